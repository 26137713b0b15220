//! Handlers for articles.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use lore_core::error::CoreError;
use lore_db::models::article::CreateArticle;
use lore_db::repositories::ArticleRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::forms::ArticleForm;
use crate::handlers::parse_id;
use crate::state::AppState;
use crate::views;

/// GET /add_article
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(state.views.render(views::ADD_ARTICLE, &json!({}))?)
}

/// POST /add_article
///
/// Articles have no landing page of their own after creation; the browser is
/// sent back to the home listing.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ArticleForm>,
) -> AppResult<Redirect> {
    let input = CreateArticle::from(form);
    let article = ArticleRepo::create(&state.pool, &input).await?;

    tracing::info!(article_id = article.id, title = %article.title, "Article created");

    Ok(Redirect::to("/"))
}

/// GET /article/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;

    Ok(state.views.render(views::ARTICLE, &json!({ "article": article }))?)
}
