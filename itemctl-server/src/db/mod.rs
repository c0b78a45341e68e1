//! Database layer - connection pool, schema bootstrap, repositories
//!
//! # Session scoping
//!
//! Every repository call is one transaction on one pooled connection.
//! `sqlx::Transaction` rolls back when dropped, so a call that returns
//! early (not found, or `?` on a driver error) never leaves work pending.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
