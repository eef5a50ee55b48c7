//! HTML Page Routes
//!
//! Bare pages for the input form and stored explanations. Full templating
//! and static assets are served elsewhere.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};

use super::errors::ApiError;
use super::state::AppState;
use crate::prompt::Level;
use crate::seo::escape_markup;
use crate::store::StoredExplanation;

pub fn page_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/explanation/:slug", get(explanation_handler))
        .with_state(state)
}

async fn index_handler() -> Html<String> {
    let options: String = Level::ALL
        .iter()
        .map(|level| {
            format!(
                "<option value=\"{}\">{}</option>",
                level.as_key(),
                escape_markup(level.form_label())
            )
        })
        .collect();

    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head><meta charset=\"utf-8\"><title>ПростоПонятно.ai</title></head>\n<body>\n\
<form id=\"explain-form\">\n<input name=\"topic\" minlength=\"3\" maxlength=\"200\" required>\n\
<select name=\"level\">{}</select>\n<input name=\"analogy\" maxlength=\"100\">\n\
<button type=\"submit\">Объяснить</button>\n</form>\n</body>\n</html>\n",
        options
    ))
}

async fn explanation_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ApiError> {
    tracing::info!(slug = %slug, "explanation page requested");

    match state.store.get(&slug).await {
        Some(record) => Ok(Html(render_explanation(&record))),
        None => {
            tracing::warn!(slug = %slug, "explanation not found");
            Err(ApiError::not_found("Explanation not found"))
        }
    }
}

/// Escape, then turn newlines into `<br>`
fn nl2br(text: &str) -> String {
    escape_markup(text).replace('\n', "<br>\n")
}

fn render_explanation(record: &StoredExplanation) -> String {
    let level = Level::display_name(&record.level, record.analogy.as_deref());
    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
<meta name=\"description\" content=\"{}\">\n</head>\n<body>\n<article>\n<h1>{}</h1>\n\
<p class=\"level\">{}</p>\n<div class=\"explanation\">{}</div>\n\
<time datetime=\"{}\">{}</time>\n</article>\n</body>\n</html>\n",
        escape_markup(&record.meta_title),
        escape_markup(&record.meta_description),
        escape_markup(&record.topic_raw),
        escape_markup(&level),
        nl2br(&record.explanation_text),
        record.created_at.to_rfc3339(),
        record.created_at.format("%d.%m.%Y"),
    )
}
