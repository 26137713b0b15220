//! Repository for the `character` table.

use lore_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::character::{Character, CreateCharacter};

const COLUMNS: &str = "id, name, quote, gender, age, full_name, origin, religion, \
     appearance, personality, history, first_appearance, image, created_at";

/// Provides read and insert operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO character
                (name, quote, gender, age, full_name, origin, religion,
                 appearance, personality, history, first_appearance, image, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.quote)
            .bind(&input.gender)
            .bind(input.age)
            .bind(&input.full_name)
            .bind(&input.origin)
            .bind(&input.religion)
            .bind(&input.appearance)
            .bind(&input.personality)
            .bind(&input.history)
            .bind(&input.first_appearance)
            .bind(&input.image)
            .bind(chrono::Utc::now())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(character)
    }

    /// Find a character by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("SELECT {COLUMNS} FROM character WHERE id = ?");
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(character)
    }

    /// List every character in storage order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Character>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("SELECT {COLUMNS} FROM character");
        let characters = sqlx::query_as::<_, Character>(&query)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(characters)
    }
}
