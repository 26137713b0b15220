//! Repository for the `place` table.

use lore_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::place::{CreatePlace, Place};

const COLUMNS: &str =
    "id, name, quote, image, location, first_appearance, description, history, created_at";

/// Provides read and insert operations for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a new place, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO place
                (name, quote, image, location, first_appearance, description, history, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let place = sqlx::query_as::<_, Place>(&query)
            .bind(&input.name)
            .bind(&input.quote)
            .bind(&input.image)
            .bind(&input.location)
            .bind(&input.first_appearance)
            .bind(&input.description)
            .bind(&input.history)
            .bind(chrono::Utc::now())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(place)
    }

    /// Find a place by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("SELECT {COLUMNS} FROM place WHERE id = ?");
        let place = sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(place)
    }

    /// List every place in storage order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Place>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("SELECT {COLUMNS} FROM place");
        let places = sqlx::query_as::<_, Place>(&query)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(places)
    }
}
