//! Inspection of the wiki tables as they exist in the database file.

use serde::Serialize;
use sqlx::SqlitePool;

/// The tables the wiki reads and writes.
pub const WIKI_TABLES: [&str; 3] = ["article", "character", "place"];

/// Presence and size of one wiki table.
#[derive(Debug, Clone, Serialize)]
pub struct TableStatus {
    pub name: &'static str,
    pub present: bool,
    /// Row count; `None` when the table is missing.
    pub records: Option<i64>,
}

/// Report every wiki table, in [`WIKI_TABLES`] order.
pub async fn table_report(pool: &SqlitePool) -> Result<Vec<TableStatus>, sqlx::Error> {
    let mut report = Vec::with_capacity(WIKI_TABLES.len());

    for name in WIKI_TABLES {
        let (present,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        let records = if present {
            // `name` comes from WIKI_TABLES, never from a request.
            let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {name}"))
                .fetch_one(pool)
                .await?;
            Some(count)
        } else {
            None
        };

        report.push(TableStatus {
            name,
            present,
            records,
        });
    }

    Ok(report)
}
