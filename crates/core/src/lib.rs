//! `cosmocats-core`: shared domain building blocks.
//!
//! Identifiers, the entity trait and the error taxonomy used by every other crate.
//! Nothing in here knows about HTTP or storage.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, FieldViolation, ViolationKind};
pub use id::{CategoryId, ProductId};
