//! Repository implementations for database access
//!
//! Each repository method is one statement inside one transaction.
//! Writes use `RETURNING` so the response row comes from the same
//! statement that changed it (no write-then-reread).

pub mod items;

pub use items::ItemRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
