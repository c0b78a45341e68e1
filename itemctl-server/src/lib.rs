//! itemctl-server: HTTP CRUD service for items
//!
//! Five endpoints over a single SQLite table. Each request gets its own
//! transaction on a pooled connection; the pool is built by the caller and
//! injected through [`http::AppState`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, ensure_schema, DbError, ItemRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Item, ItemPayload};
