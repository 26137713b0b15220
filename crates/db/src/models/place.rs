//! Place entity model and DTOs.

use lore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `place` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub quote: Option<String>,
    pub image: Option<String>,
    pub location: String,
    pub first_appearance: Option<String>,
    pub description: Option<String>,
    pub history: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new place. `name` and `location` are required.
#[derive(Debug, Clone, Default)]
pub struct CreatePlace {
    pub name: Option<String>,
    pub quote: String,
    pub image: String,
    pub location: Option<String>,
    pub first_appearance: String,
    pub description: String,
    pub history: String,
}
