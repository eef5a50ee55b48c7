//! Shared handler state

use std::sync::Arc;

use axum::http::{header::HOST, HeaderMap};

use crate::explain::Explainer;
use crate::search::SearchBackend;
use crate::store::ExplanationStore;

/// State shared by every handler.
///
/// Built once at startup; nothing in it is mutated afterwards.
#[derive(Debug)]
pub struct AppState {
    pub explainer: Explainer,
    pub search: Arc<dyn SearchBackend>,
    pub store: Arc<dyn ExplanationStore>,
    /// Overrides the Host-derived origin in crawler files
    pub public_url: Option<String>,
}

impl AppState {
    pub fn new(
        explainer: Explainer,
        search: Arc<dyn SearchBackend>,
        public_url: Option<String>,
    ) -> Self {
        let store = explainer.store().clone();
        Self {
            explainer,
            search,
            store,
            public_url,
        }
    }

    /// Public origin without a trailing slash
    pub fn base_url(&self, headers: &HeaderMap) -> String {
        if let Some(url) = &self.public_url {
            return url.trim_end_matches('/').to_string();
        }
        let host = headers
            .get(HOST)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("localhost");
        format!("http://{}", host)
    }
}
