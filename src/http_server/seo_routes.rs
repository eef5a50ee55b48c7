//! Crawler Routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    response::IntoResponse,
    routing::get,
    Router,
};

use super::state::AppState;
use crate::seo::{robots_txt, sitemap_xml};

pub fn seo_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .with_state(state)
}

async fn robots_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.base_url(&headers)),
    )
}

async fn sitemap_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let slugs = state.store.list_slugs().await;
    tracing::debug!(count = slugs.len(), "building sitemap");
    (
        [(CONTENT_TYPE, "application/xml")],
        sitemap_xml(&state.base_url(&headers), &slugs),
    )
}
