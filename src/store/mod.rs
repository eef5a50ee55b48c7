//! # Explanation Store
//!
//! Durable keyed storage for generated explanations: one JSON record per
//! slug, point lookup and full listing. No index, no transactions.
//!
//! Callers depend on [`ExplanationStore`] only, so the flat directory of
//! [`FileStore`] can be replaced by another backend without changing
//! their contracts.

pub mod backend;
pub mod errors;
pub mod local;
pub mod memory;
pub mod record;

pub use backend::ExplanationStore;
pub use errors::{StoreError, StoreResult};
pub use local::FileStore;
pub use memory::MemoryStore;
pub use record::StoredExplanation;
