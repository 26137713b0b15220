//! `GET /health`: database reachability plus the state of the wiki tables.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use lore_db::schema::{table_report, TableStatus};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WikiHealth {
    /// `ok` when every wiki table exists, `degraded` when one is missing,
    /// `unavailable` when the database cannot be queried.
    pub status: &'static str,
    pub tables: Vec<TableStatus>,
}

async fn wiki_health(State(state): State<AppState>) -> (StatusCode, Json<WikiHealth>) {
    let (code, health) = match table_report(&state.pool).await {
        Ok(tables) if tables.iter().all(|t| t.present) => (
            StatusCode::OK,
            WikiHealth {
                status: "ok",
                tables,
            },
        ),
        Ok(tables) => {
            let missing: Vec<_> = tables.iter().filter(|t| !t.present).map(|t| t.name).collect();
            tracing::warn!(?missing, "Wiki tables missing");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                WikiHealth {
                    status: "degraded",
                    tables,
                },
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "Health query failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                WikiHealth {
                    status: "unavailable",
                    tables: Vec::new(),
                },
            )
        }
    };

    (code, Json(health))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(wiki_health))
}
