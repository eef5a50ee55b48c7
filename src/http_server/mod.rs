//! # HTTP Server Module
//!
//! Axum server exposing the explanation service.
//!
//! # Endpoints
//!
//! - `/` - Input form
//! - `/explanation/:slug` - Stored explanation page
//! - `/api/explain` - Cache-or-generate an explanation
//! - `/api/search` - Substring search over stored explanations
//! - `/robots.txt`, `/sitemap.xml` - Crawler files
//! - `/health` - Health check

pub mod api_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod page_routes;
pub mod seo_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
