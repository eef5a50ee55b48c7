//! Service entry point
//!
//! Parses arguments and delegates to the CLI module; errors go to stderr
//! with a non-zero exit code.

use prostoponyatno::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
