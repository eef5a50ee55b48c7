//! JSON API Routes
//!
//! `POST /explain` and `GET /search`, nested under `/api`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::ApiError;
use super::state::AppState;
use crate::explain::{Disposition, ExplainRequest};
use crate::search::{SearchHit, DEFAULT_LIMIT};

pub const QUERY_MIN_CHARS: usize = 3;
pub const QUERY_MAX_CHARS: usize = 50;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
    /// `null` when the explanation was not stored
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

// ==================
// Routes
// ==================

pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/explain", post(explain_handler))
        .route("/search", get(search_handler))
        .with_state(state)
}

async fn explain_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    request.validate()?;

    let outcome = state.explainer.explain(&request).await;

    match &outcome.disposition {
        Disposition::Unavailable => {
            tracing::error!(topic = %request.topic, "generator unavailable");
            return Err(ApiError::unavailable(outcome.explanation));
        }
        Disposition::Cached | Disposition::Generated => {
            tracing::info!(slug = ?outcome.slug, "returning explanation");
        }
        Disposition::Rejected(_) | Disposition::Failed => {
            tracing::warn!(topic = %request.topic, "no valid explanation produced");
        }
    }

    Ok(Json(ExplainResponse {
        explanation: outcome.explanation,
        slug: outcome.slug,
    }))
}

async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Some(q) = params.q else {
        return Ok(Json(SearchResponse {
            results: Vec::new(),
        }));
    };

    let len = q.chars().count();
    if !(QUERY_MIN_CHARS..=QUERY_MAX_CHARS).contains(&len) {
        return Err(ApiError::unprocessable(format!(
            "q must be between {} and {} characters, got {}",
            QUERY_MIN_CHARS, QUERY_MAX_CHARS, len
        )));
    }

    tracing::info!(query = %q, "search request");
    let results = state.search.search(&q, DEFAULT_LIMIT).await;
    Ok(Json(SearchResponse { results }))
}
