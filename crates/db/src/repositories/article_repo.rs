//! Repository for the `article` table.

use lore_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::article::{Article, CreateArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, created_at";

/// Provides read and insert operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    ///
    /// `created_at` is stamped here rather than by the column default so the
    /// stored value carries an explicit UTC offset.
    pub async fn create(pool: &SqlitePool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO article (title, content, created_at)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(chrono::Utc::now())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(article)
    }

    /// Find an article by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("SELECT {COLUMNS} FROM article WHERE id = ?");
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(article)
    }

    /// List every article in storage order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Article>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("SELECT {COLUMNS} FROM article");
        let articles = sqlx::query_as::<_, Article>(&query)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(articles)
    }
}
