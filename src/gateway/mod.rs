//! # Generation Gateway
//!
//! The single remote dependency of the service: a prompt goes in, text
//! comes out. Only an unusable client (no key, rejected key) is an error.
//! Blocked, empty or truncated generations come back as apology text so
//! that validation, not the gateway, decides what gets cached.

pub mod errors;
pub mod gemini;

pub use errors::{GatewayError, GatewayResult};
pub use gemini::{GeminiConfig, GeminiGateway};

use async_trait::async_trait;

/// Prefix of every apology returned for a blocked or truncated generation
pub const BLOCKED_MESSAGE: &str =
    "Извините, не удалось сгенерировать ответ из-за ограничений или ошибки.";

/// Body returned when the remote call fails for a non-auth reason
pub const SERVICE_ERROR_MESSAGE: &str =
    "Произошла ошибка при обращении к AI сервису. Пожалуйста, проверьте конфигурацию или попробуйте позже.";

/// Remote text generation
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    async fn generate(&self, prompt: &str) -> GatewayResult<String>;
}
