//! Handler for the home page listing.

use axum::extract::State;
use axum::response::Html;
use lore_db::repositories::{ArticleRepo, CharacterRepo, PlaceRepo};
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Lists every article, character and place on one page.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let articles = ArticleRepo::list_all(&state.pool).await?;
    let characters = CharacterRepo::list_all(&state.pool).await?;
    let places = PlaceRepo::list_all(&state.pool).await?;

    let page = state.views.render(
        views::INDEX,
        &json!({
            "articles": articles,
            "characters": characters,
            "places": places,
        }),
    )?;
    Ok(page)
}
