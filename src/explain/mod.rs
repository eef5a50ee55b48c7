//! # Explain Orchestrator
//!
//! Cache-or-generate flow for one explanation request:
//!
//! ```text
//! derive slug -> store lookup -- hit --> cached text + slug
//!                      |
//!                     miss -> build prompt -> generate -> validate
//!                                                           |
//!                                   valid -> persist -> text + slug
//!                                 invalid -> text, no slug
//! ```
//!
//! An outcome without a slug must never be turned into a permalink.

pub mod errors;
pub mod meta;
mod orchestrator;
mod request;

pub use errors::{ExplainError, ExplainResult};
pub use orchestrator::{Disposition, ExplainOutcome, Explainer};
pub use request::ExplainRequest;

/// Returned when the generator produced no text at all
pub const EMPTY_RESPONSE_MESSAGE: &str = "AI вернул пустой ответ.";

/// Returned when a generator fails for a reason other than configuration
pub const INTERNAL_ERROR_MESSAGE: &str = "Произошла внутренняя ошибка при генерации объяснения.";
