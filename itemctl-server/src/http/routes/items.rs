//! Item endpoints
//!
//! All five handlers return 200 with the affected row; a missing id is 404.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::ItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ItemId;
use crate::http::server::AppState;
use crate::models::{Item, ItemPayload};

/// POST /items/ - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<Item>, ApiError> {
    let item = ItemRepo::new(&state.pool).create(&payload).await?;
    Ok(Json(item))
}

/// GET /items/ - list all items
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = ItemRepo::new(&state.pool).list().await?;
    Ok(Json(items))
}

/// GET /items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    let item = ItemRepo::new(&state.pool).get(id).await?;
    Ok(Json(item))
}

/// PUT /items/{id} - overwrite an existing item
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<Item>, ApiError> {
    let item = ItemRepo::new(&state.pool).update(id, &payload).await?;
    Ok(Json(item))
}

/// DELETE /items/{id} - delete an item, returning it
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    let item = ItemRepo::new(&state.pool).delete(id).await?;
    Ok(Json(item))
}

/// Item routes
///
/// The collection is reachable with and without the trailing slash.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
