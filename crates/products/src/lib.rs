//! Products domain module.
//!
//! The `Product` entity, its full-replacement payload and the field rules a
//! creation/update payload must satisfy. Pure domain logic: no IO, no HTTP, no storage.

pub mod product;
pub mod validation;

pub use product::{Product, ProductData};
pub use validation::{COSMIC_TERMS, ProductDraft, Validator, contains_cosmic_term, cosmic_terms_display};
