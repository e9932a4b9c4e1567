//! Field rules for product creation/update payloads.
//!
//! Rules run in declaration order (`categoryId`, `name`, `price`) and every
//! violation is collected, so a client sees all of its mistakes in one response.

use cosmocats_core::{CategoryId, DomainError, DomainResult, FieldViolation, ViolationKind};

use crate::product::ProductData;

/// Terms a product name must contain (case-insensitive) to be accepted.
pub const COSMIC_TERMS: &[&str] = &[
    "Anti-Gravity",
    "Cosmic",
    "Stardust",
    "Galaxy",
    "Nebula",
    "Meteor",
    "Asteroid",
    "Quasar",
    "Supernova",
    "Black Hole",
    "Wormhole",
    "Pulsar",
    "Comet",
    "Star",
    "Orbit",
    "Eclipse",
    "Celestial",
    "Constellation",
    "Interstellar",
    "Planetary",
    "Solar",
    "Lunar",
    "Astral",
    "Galactic",
    "Zenith",
];

pub const CATEGORY_ID_FIELD: &str = "categoryId";
pub const NAME_FIELD: &str = "name";
pub const PRICE_FIELD: &str = "price";

const CATEGORY_ID_MISSING: &str = "Product categoryId cannot be null";
const CATEGORY_ID_BLANK: &str = "Product categoryId cannot be empty";
const NAME_MISSING: &str = "Product name cannot be null";
const NAME_BLANK: &str = "Product name cannot be empty";
const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";

/// The vocabulary as shown to clients: terms joined by `", "`.
pub fn cosmic_terms_display() -> String {
    COSMIC_TERMS.join(", ")
}

pub fn contains_cosmic_term(value: &str) -> bool {
    let value = value.to_lowercase();
    COSMIC_TERMS
        .iter()
        .any(|term| value.contains(&term.to_lowercase()))
}

fn cosmic_term_reason() -> String {
    format!(
        "The field must contain a cosmic term, such as: {}",
        cosmic_terms_display()
    )
}

/// Accumulates field violations without short-circuiting.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presence + non-blank check for a text field. Returns the value only if both pass.
    pub fn required_text(
        &mut self,
        field: &str,
        value: Option<String>,
        missing: &str,
        blank: &str,
    ) -> Option<String> {
        match value {
            None => {
                self.reject(field, ViolationKind::MissingField, missing);
                None
            }
            Some(v) if v.trim().is_empty() => {
                self.reject(field, ViolationKind::BlankField, blank);
                None
            }
            Some(v) => Some(v),
        }
    }

    /// Records a violation unless `ok` holds.
    pub fn check(&mut self, field: &str, ok: bool, kind: ViolationKind, reason: impl Into<String>) -> bool {
        if !ok {
            self.reject(field, kind, reason);
        }
        ok
    }

    pub fn reject(&mut self, field: &str, kind: ViolationKind, reason: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, kind, reason));
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }
}

/// An unvalidated creation/update payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl ProductDraft {
    /// Run every rule and either produce the replacement payload or the full
    /// list of violations in rule-declaration order.
    pub fn validate(self) -> DomainResult<ProductData> {
        let mut v = Validator::new();

        let category_id =
            v.required_text(CATEGORY_ID_FIELD, self.category_id, CATEGORY_ID_MISSING, CATEGORY_ID_BLANK);

        // A missing or blank name also fails the vocabulary rule.
        let has_term = self.name.as_deref().is_some_and(contains_cosmic_term);
        let name = v.required_text(NAME_FIELD, self.name, NAME_MISSING, NAME_BLANK);
        v.check(
            NAME_FIELD,
            has_term,
            ViolationKind::DomainTermMissing,
            cosmic_term_reason(),
        );

        if let Some(price) = self.price {
            // NaN fails this comparison too.
            v.check(PRICE_FIELD, price > 0.0, ViolationKind::NonPositiveValue, PRICE_NOT_POSITIVE);
        }

        match (category_id, name) {
            (Some(category_id), Some(name)) if v.is_valid() => Ok(ProductData {
                category_id: CategoryId::new(category_id),
                name,
                description: self.description,
                price: self.price,
            }),
            _ => Err(DomainError::validation(v.into_violations())),
        }
    }
}
