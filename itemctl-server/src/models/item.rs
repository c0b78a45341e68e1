//! Item entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named, priced thing with an optional description.
///
/// `id` is assigned by the database on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Request body for create and update.
///
/// Unknown keys (including `id`) are ignored by serde, so a body that
/// carries an id cannot influence which row is written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}
