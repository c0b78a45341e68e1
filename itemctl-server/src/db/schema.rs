//! Startup schema bootstrap for the item table
//!
//! Not a migration system: the table is created once if absent and
//! never altered afterwards.

use sqlx::SqlitePool;

use super::repos::DbError;

/// Name of the single table backing [`crate::models::Item`].
pub const ITEM_TABLE: &str = "item";

const CREATE_ITEM_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS item (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        price REAL NOT NULL
    )
"#;

/// Whether the item table is present.
pub async fn table_exists(pool: &SqlitePool) -> Result<bool, DbError> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(ITEM_TABLE)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Create the item table if it does not exist.
///
/// Returns `true` when the table was created by this call.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<bool, DbError> {
    if table_exists(pool).await? {
        tracing::debug!(table = ITEM_TABLE, "table already present");
        return Ok(false);
    }

    sqlx::query(CREATE_ITEM_TABLE).execute(pool).await?;
    tracing::info!(table = ITEM_TABLE, "created table");
    Ok(true)
}
