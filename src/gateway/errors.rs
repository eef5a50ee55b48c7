//! # Gateway Errors

use thiserror::Error;

/// Result type for gateway calls
pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("Google GenAI client not configured or API key missing.")]
    NotConfigured,

    #[error("Invalid Google API Key.")]
    InvalidApiKey,

    /// Anything a generator implementation could not turn into text
    #[error("Generation failed: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Whether the client itself is unusable; surfaced as HTTP 503
    pub fn is_connection(&self) -> bool {
        matches!(self, GatewayError::NotConfigured | GatewayError::InvalidApiKey)
    }
}
