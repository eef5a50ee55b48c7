//! # Search Service
//!
//! Substring search over stored explanations. [`ScanSearch`] reads every
//! record on each query, which is only reasonable for small stores; an
//! indexed backend can replace it behind [`SearchBackend`] without
//! changing the HTTP contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use crate::store::ExplanationStore;

/// Results returned when the caller does not choose a limit
pub const DEFAULT_LIMIT: usize = 10;

/// Queries shorter than this (after trimming) return nothing
pub const MIN_QUERY_LEN: usize = 3;

/// Only this many leading characters of the body are searched
pub const BODY_SCAN_CHARS: usize = 500;

/// One search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub topic: String,
    pub slug: String,
}

#[async_trait]
pub trait SearchBackend: Send + Sync + std::fmt::Debug {
    /// Up to `limit` hits for `query`; never fails, an error means no hits
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchHit>;
}

/// Full-scan search over an [`ExplanationStore`]
#[derive(Debug, Clone)]
pub struct ScanSearch {
    store: Arc<dyn ExplanationStore>,
}

#[derive(Debug)]
struct Match {
    hit: SearchHit,
    in_topic: bool,
}

impl ScanSearch {
    pub fn new(store: Arc<dyn ExplanationStore>) -> Self {
        Self { store }
    }

    async fn check(store: Arc<dyn ExplanationStore>, slug: String, needle: Arc<str>) -> Option<Match> {
        let record = store.get(&slug).await?;

        let in_topic = record.topic_raw.to_lowercase().contains(&*needle);
        let head: String = record.explanation_text.chars().take(BODY_SCAN_CHARS).collect();
        let in_body = head.to_lowercase().contains(&*needle);

        if !(in_topic || in_body) {
            return None;
        }

        Some(Match {
            hit: SearchHit {
                topic: record.topic_raw,
                slug: record.slug,
            },
            in_topic,
        })
    }
}

#[async_trait]
impl SearchBackend for ScanSearch {
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        tracing::info!(query, "starting search");
        let needle: Arc<str> = Arc::from(needle);

        let mut tasks = JoinSet::new();
        for slug in self.store.list_slugs().await {
            tasks.spawn(Self::check(self.store.clone(), slug, needle.clone()));
        }

        let mut matches = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(m)) => matches.push(m),
                Ok(None) => {}
                Err(e) => tracing::error!(error = %e, "search task failed"),
            }
        }

        // Stable: ties keep completion order
        matches.sort_by_key(|m| !m.in_topic);

        tracing::info!(query, found = matches.len(), "search finished");
        matches.into_iter().take(limit).map(|m| m.hit).collect()
    }
}
