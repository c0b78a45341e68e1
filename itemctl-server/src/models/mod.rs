//! Domain models
//!
//! `Item` is the persisted row; `ItemPayload` is what clients send.
//! Clients never supply ids, so the payload has no id field at all.

pub mod item;
pub mod validation;

pub use item::{Item, ItemPayload};
pub use validation::ValidationError;
