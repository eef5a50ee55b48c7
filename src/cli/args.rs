//! CLI argument definitions using clap
//!
//! Commands:
//! - prostoponyatno serve --config <path>
//! - prostoponyatno search <query> --config <path>
//! - prostoponyatno show <slug> --config <path>
//! - prostoponyatno sitemap --base-url <url> --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::search::DEFAULT_LIMIT;

/// ПростоПонятно.ai - complex topics explained in plain words
#[derive(Parser, Debug)]
#[command(name = "prostoponyatno")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./prostoponyatno.json")]
    pub config: PathBuf,

    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve,

    /// Search stored explanations and print matches as JSON
    Search {
        /// Text to look for in topics and explanation openings
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Print a stored explanation as JSON
    Show {
        slug: String,
    },

    /// Print the sitemap for every stored explanation
    Sitemap {
        /// Public origin, e.g. https://example.com
        #[arg(long, default_value = "http://localhost:8000")]
        base_url: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
