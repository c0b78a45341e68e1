//! Item repository
//!
//! - create: INSERT ... RETURNING (id assigned by SQLite)
//! - update/delete: single statement, `RETURNING` doubles as the existence check

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{Item, ItemPayload};

const RESOURCE: &str = "item";

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new item and return it with its generated id.
    pub async fn create(&self, payload: &ItemPayload) -> Result<Item, DbError> {
        let mut tx = self.pool.begin().await?;

        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO item (name, description, price)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, description, price
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = item.id, "item created");
        Ok(item)
    }

    /// List every item, ascending by id.
    pub async fn list(&self) -> Result<Vec<Item>, DbError> {
        let mut tx = self.pool.begin().await?;

        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, name, description, price
            FROM item
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(items)
    }

    /// Get a single item by id.
    pub async fn get(&self, id: i64) -> Result<Item, DbError> {
        let mut tx = self.pool.begin().await?;

        let item: Item = sqlx::query_as(
            r#"
            SELECT id, name, description, price
            FROM item
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found(id))?;

        tx.commit().await?;
        Ok(item)
    }

    /// Overwrite name, description and price of an existing item.
    ///
    /// The id is taken from the caller, never from the payload.
    pub async fn update(&self, id: i64, payload: &ItemPayload) -> Result<Item, DbError> {
        let mut tx = self.pool.begin().await?;

        let item: Item = sqlx::query_as(
            r#"
            UPDATE item
            SET name = ?1, description = ?2, price = ?3
            WHERE id = ?4
            RETURNING id, name, description, price
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found(id))?;

        tx.commit().await?;
        tracing::debug!(id, "item updated");
        Ok(item)
    }

    /// Delete an item, returning the row as it was before removal.
    pub async fn delete(&self, id: i64) -> Result<Item, DbError> {
        let mut tx = self.pool.begin().await?;

        let item: Item = sqlx::query_as(
            r#"
            DELETE FROM item
            WHERE id = ?1
            RETURNING id, name, description, price
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found(id))?;

        tx.commit().await?;
        tracing::debug!(id, "item deleted");
        Ok(item)
    }
}
