use cosmocats_core::{CategoryId, Entity, ProductId};

/// The mutable attributes of a product, always overwritten together.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// A sellable item.
///
/// Immutable value: a change produces a new `Product` through [`Product::replaced_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    price: Option<f64>,
}

impl Product {
    pub fn new(id: ProductId, data: ProductData) -> Self {
        Self {
            id,
            category_id: data.category_id,
            name: data.name,
            description: data.description,
            price: data.price,
        }
    }

    /// Same identity, every mutable field taken from `data`.
    pub fn replaced_with(&self, data: ProductData) -> Self {
        Self::new(self.id, data)
    }

    pub fn product_id(&self) -> ProductId {
        self.id
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn data(&self) -> ProductData {
        ProductData {
            category_id: self.category_id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
