use serde::{Deserialize, Serialize};

use cosmocats_core::{CategoryId, ProductId};
use cosmocats_products::{Product, ProductDraft};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /` and `PUT /{id}`.
///
/// Every field is optional at the wire level so the validator can report
/// missing fields instead of the JSON layer rejecting the whole body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreationRequest {
    /// Honored on create when present; ignored on update.
    pub id: Option<ProductId>,
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl ProductCreationRequest {
    pub fn into_parts(self) -> (Option<ProductId>, ProductDraft) {
        (
            self.id,
            ProductDraft {
                category_id: self.category_id,
                name: self.name,
                description: self.description,
                price: self.price,
            },
        )
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.product_id(),
            category_id: p.category_id().clone(),
            name: p.name().to_string(),
            description: p.description().map(str::to_string),
            price: p.price(),
        }
    }
}
