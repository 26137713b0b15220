pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the wiki page routes.
///
/// Route hierarchy:
///
/// ```text
/// /                    home listing
/// /add_article         article form (GET), create (POST)
/// /add_character       character form (GET), create (POST)
/// /add_place           place form (GET), create (POST)
/// /article/{id}        article page
/// /character/{id}      character page
/// /place/{id}          place page
/// /text_analysis       static page
/// ```
pub fn wiki_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .route(
            "/add_article",
            get(handlers::article::new_form).post(handlers::article::create),
        )
        .route(
            "/add_character",
            get(handlers::character::new_form).post(handlers::character::create),
        )
        .route(
            "/add_place",
            get(handlers::place::new_form).post(handlers::place::create),
        )
        .route("/article/{id}", get(handlers::article::show))
        .route("/character/{id}", get(handlers::character::show))
        .route("/place/{id}", get(handlers::place::show))
        .route("/text_analysis", get(handlers::pages::text_analysis))
}
