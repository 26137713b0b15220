//! Handlers for characters.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use lore_core::error::CoreError;
use lore_db::models::character::CreateCharacter;
use lore_db::repositories::CharacterRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::forms::CharacterForm;
use crate::handlers::parse_id;
use crate::state::AppState;
use crate::views;

/// GET /add_character
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(state.views.render(views::ADD_CHARACTER, &json!({}))?)
}

/// POST /add_character
///
/// Redirects to the new character's page.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CharacterForm>,
) -> AppResult<Redirect> {
    let input = CreateCharacter::try_from(form)?;
    let character = CharacterRepo::create(&state.pool, &input).await?;

    tracing::info!(character_id = character.id, name = %character.name, "Character created");

    Ok(Redirect::to(&format!("/character/{}", character.id)))
}

/// GET /character/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;

    Ok(state
        .views
        .render(views::CHARACTER, &json!({ "character": character }))?)
}
