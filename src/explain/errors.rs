//! # Explain Errors

use thiserror::Error;

pub type ExplainResult<T> = Result<T, ExplainError>;

/// Request rejected before any lookup or generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    #[error("topic must be between {min} and {max} characters, got {len}")]
    TopicLength { len: usize, min: usize, max: usize },

    #[error("analogy must be at most {max} characters, got {len}")]
    AnalogyLength { len: usize, max: usize },

    #[error("level must not be empty")]
    MissingLevel,
}

impl ExplainError {
    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        422
    }
}
