//! Character entity model and DTOs.

use lore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `character` table.
///
/// Optional text columns are nullable in the schema; rows written by this
/// application always hold `''` rather than NULL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub quote: Option<String>,
    pub gender: String,
    pub age: Option<i64>,
    pub full_name: Option<String>,
    pub origin: String,
    pub religion: String,
    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub history: Option<String>,
    pub first_appearance: Option<String>,
    pub image: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new character.
///
/// `name`, `gender`, `origin` and `religion` are required; `None` is
/// rejected by the database.
#[derive(Debug, Clone, Default)]
pub struct CreateCharacter {
    pub name: Option<String>,
    pub quote: String,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub full_name: String,
    pub origin: Option<String>,
    pub religion: Option<String>,
    pub appearance: String,
    pub personality: String,
    pub history: String,
    pub first_appearance: String,
    pub image: String,
}
