//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use prostoponyatno::explain::Explainer;
use prostoponyatno::gateway::{GatewayError, GatewayResult, TextGenerator};
use prostoponyatno::http_server::{AppState, HttpServer, HttpServerConfig};
use prostoponyatno::search::ScanSearch;
use prostoponyatno::store::{FileStore, StoredExplanation};
use prostoponyatno::validation::HeuristicValidator;
use tempfile::TempDir;

/// Generator returning a fixed reply and counting calls
#[derive(Debug)]
pub struct StaticGenerator {
    reply: GatewayResult<String>,
    calls: AtomicUsize,
}

impl StaticGenerator {
    pub fn text(s: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(s.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(e: GatewayError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(e),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StaticGenerator {
    async fn generate(&self, _prompt: &str) -> GatewayResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

/// Router over a fresh on-disk store
pub struct TestApp {
    pub dir: TempDir,
    pub store: Arc<FileStore>,
    pub router: Router,
}

pub async fn app(generator: Arc<StaticGenerator>) -> TestApp {
    let dir = TempDir::new().expect("temp dir");
    let store = Arc::new(FileStore::open(dir.path()).await.expect("open store"));
    let explainer = Explainer::new(
        store.clone(),
        generator,
        Arc::new(HeuristicValidator::new()),
    );
    let search = Arc::new(ScanSearch::new(store.clone()));
    let state = Arc::new(AppState::new(explainer, search, None));
    let router = HttpServer::build_router(&HttpServerConfig::default(), state);

    TestApp { dir, store, router }
}

pub fn record(topic: &str, slug: &str, body: &str) -> StoredExplanation {
    StoredExplanation {
        topic_raw: topic.to_string(),
        slug: slug.to_string(),
        level: "simple".to_string(),
        analogy: None,
        explanation_text: body.to_string(),
        meta_title: format!("Как понять '{}' простыми словами | ПростоПонятно.ai", topic),
        meta_description: "...".to_string(),
        created_at: Utc::now(),
    }
}
