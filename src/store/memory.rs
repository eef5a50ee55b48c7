//! # In-Memory Backend
//!
//! Same contract as the directory store, kept in a map. Used by tests and
//! by anything that wants a throwaway cache.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::backend::ExplanationStore;
use super::errors::{StoreError, StoreResult};
use super::record::StoredExplanation;

/// Map-backed explanation store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, StoredExplanation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ExplanationStore for MemoryStore {
    async fn load(&self, slug: &str) -> StoreResult<StoredExplanation> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        records
            .get(slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))
    }

    async fn save(&self, record: &StoredExplanation) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(record.slug.clone(), record.clone());
        Ok(())
    }

    async fn slugs(&self) -> StoreResult<Vec<String>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.keys().cloned().collect())
    }
}
