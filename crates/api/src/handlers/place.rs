//! Handlers for places.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use lore_core::error::CoreError;
use lore_db::models::place::CreatePlace;
use lore_db::repositories::PlaceRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::forms::PlaceForm;
use crate::handlers::parse_id;
use crate::state::AppState;
use crate::views;

/// GET /add_place
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(state.views.render(views::ADD_PLACE, &json!({}))?)
}

/// POST /add_place
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<PlaceForm>,
) -> AppResult<Redirect> {
    let input = CreatePlace::from(form);
    let place = PlaceRepo::create(&state.pool, &input).await?;

    tracing::info!(place_id = place.id, name = %place.name, "Place created");

    Ok(Redirect::to(&format!("/place/{}", place.id)))
}

/// GET /place/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let place = PlaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Place", id }))?;

    Ok(state.views.render(views::PLACE, &json!({ "place": place }))?)
}
