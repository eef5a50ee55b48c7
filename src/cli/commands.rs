//! CLI command implementations

use std::io::{self, Write};
use std::sync::Arc;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::config::AppConfig;
use crate::explain::Explainer;
use crate::gateway::GeminiGateway;
use crate::http_server::{AppState, HttpServer};
use crate::observability::init_logging;
use crate::search::{ScanSearch, SearchBackend};
use crate::seo::sitemap_xml;
use crate::store::{ExplanationStore, FileStore};
use crate::validation::HeuristicValidator;

/// Parse arguments, load configuration and run the chosen command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = AppConfig::load(&cli.config)?;
    init_logging(cli.verbose, config.log_json);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_command(cli.command, config))
}

/// Run one command against `config`
pub async fn run_command(command: Command, config: AppConfig) -> CliResult<()> {
    let store = Arc::new(FileStore::open(&config.explanations_dir).await?);

    match command {
        Command::Serve => serve(config, store).await,
        Command::Search { query, limit } => {
            let hits = ScanSearch::new(store).search(&query, limit).await;
            write_json(&hits)
        }
        Command::Show { slug } => {
            let record = store.get(&slug).await.ok_or_else(|| CliError::not_found(&slug))?;
            write_json(&record)
        }
        Command::Sitemap { base_url } => {
            let slugs = store.list_slugs().await;
            let mut out = io::stdout().lock();
            writeln!(out, "{}", sitemap_xml(&base_url, &slugs))?;
            Ok(())
        }
    }
}

async fn serve(config: AppConfig, store: Arc<FileStore>) -> CliResult<()> {
    tracing::info!(
        dir = %store.root().display(),
        model = %config.model,
        "starting explanation service"
    );

    let gateway = Arc::new(GeminiGateway::from_config(config.gemini()));
    let explainer = Explainer::new(store.clone(), gateway, Arc::new(HeuristicValidator::new()));
    let search = Arc::new(ScanSearch::new(store));
    let state = Arc::new(AppState::new(explainer, search, config.public_url.clone()));

    HttpServer::new(config.server, state).start().await?;
    Ok(())
}

fn write_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
