//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic failures live here. Nothing is retried: every operation is
/// local, so a retry would reproduce the same outcome.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The requested product id is absent from the store.
    #[error("{0}")]
    NotFound(String),

    /// One or more payload fields violated a rule. Never truncated to the first one.
    #[error("validation failed: {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation(violations)
    }
}

/// Which rule a field violated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    MissingField,
    BlankField,
    DomainTermMissing,
    NonPositiveValue,
}

/// A single `(fieldName, reason)` pair reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field_name: String,
    pub reason: String,
    #[serde(skip)]
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field_name: impl Into<String>, kind: ViolationKind, reason: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            reason: reason.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_serializes_as_field_name_and_reason() {
        let v = FieldViolation::new("price", ViolationKind::NonPositiveValue, "Price must be greater than 0");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fieldName": "price", "reason": "Price must be greater than 0" })
        );
    }

    #[test]
    fn not_found_displays_its_message() {
        let err = DomainError::not_found("Product with id: x does not exist!");
        assert_eq!(err.to_string(), "Product with id: x does not exist!");
    }
}
