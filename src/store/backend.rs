//! # Store Backend Trait

use async_trait::async_trait;

use super::errors::StoreResult;
use super::record::StoredExplanation;

/// Keyed storage for explanations.
///
/// `load`, `save` and `slugs` report failures. The provided `get`, `put`
/// and `list_slugs` wrappers are what the rest of the service calls: they
/// log every failure and degrade to "absent" / "nothing written" /
/// "empty listing".
#[async_trait]
pub trait ExplanationStore: Send + Sync + std::fmt::Debug {
    /// Read and parse the record stored under `slug`
    async fn load(&self, slug: &str) -> StoreResult<StoredExplanation>;

    /// Write `record` under its slug, replacing any previous content
    async fn save(&self, record: &StoredExplanation) -> StoreResult<()>;

    /// Enumerate every stored slug, in no particular order
    async fn slugs(&self) -> StoreResult<Vec<String>>;

    /// Soft lookup: missing, malformed or unreadable records are `None`
    async fn get(&self, slug: &str) -> Option<StoredExplanation> {
        match self.load(slug).await {
            Ok(record) => Some(record),
            Err(e) if e.is_not_found() => {
                tracing::debug!(slug, "explanation not stored");
                None
            }
            Err(e) => {
                tracing::error!(slug, error = %e, "failed to load explanation");
                None
            }
        }
    }

    /// Write `record`; returns whether it was persisted
    async fn put(&self, record: &StoredExplanation) -> bool {
        match self.save(record).await {
            Ok(()) => {
                tracing::info!(slug = %record.slug, "saved explanation");
                true
            }
            Err(e) => {
                tracing::error!(slug = %record.slug, error = %e, "failed to save explanation");
                false
            }
        }
    }

    /// All stored slugs; an unreadable store lists as empty
    async fn list_slugs(&self) -> Vec<String> {
        match self.slugs().await {
            Ok(slugs) => slugs,
            Err(e) => {
                tracing::error!(error = %e, "failed to list explanations");
                Vec::new()
            }
        }
    }
}
