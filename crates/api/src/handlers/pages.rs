//! Pages without a data dependency.

use axum::extract::State;
use axum::response::Html;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET /text_analysis
pub async fn text_analysis(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(state.views.render(views::TEXT_ANALYSIS, &json!({}))?)
}

/// Fallback for any path no route matches.
pub async fn not_found() -> AppError {
    AppError::PageNotFound
}
