//! Article entity model and DTOs.

use lore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `article` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new article.
///
/// Required fields are `Option` only so that a missing value reaches the
/// database as NULL and trips the column's `NOT NULL` constraint.
#[derive(Debug, Clone, Default)]
pub struct CreateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
}
