//! Product storage abstractions.
//!
//! The store is the sole owner of live `Product` values; callers only ever get clones.

pub mod in_memory;
pub mod seed;

use std::sync::Arc;

use cosmocats_core::{DomainResult, ProductId};
use cosmocats_products::{Product, ProductData};

pub use in_memory::InMemoryProductStore;
pub use seed::seed_products;

/// Keyed product collection. Identity is `id` only.
pub trait ProductRepository: Send + Sync {
    /// Append `product`, or replace the entity with the same id. Never fails.
    fn insert_or_replace(&self, product: Product) -> Product;

    fn get_by_id(&self, id: ProductId) -> Option<Product>;

    /// Overwrite every mutable field of `id`. Fails with `NotFound` if absent.
    fn update(&self, id: ProductId, data: ProductData) -> DomainResult<Product>;

    /// Remove `id`. Fails with `NotFound` if absent.
    fn delete(&self, id: ProductId) -> DomainResult<()>;

    /// All products in collection order.
    fn list_all(&self) -> Vec<Product>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn insert_or_replace(&self, product: Product) -> Product {
        (**self).insert_or_replace(product)
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).get_by_id(id)
    }

    fn update(&self, id: ProductId, data: ProductData) -> DomainResult<Product> {
        (**self).update(id, data)
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn list_all(&self) -> Vec<Product> {
        (**self).list_all()
    }
}
