use std::sync::Arc;

use cosmocats_core::{DomainError, DomainResult, ProductId};
use cosmocats_infra::{InMemoryProductStore, ProductRepository};
use cosmocats_products::{Product, ProductData};

/// Orchestration layer: the only path from handlers to the store.
///
/// Adds not-found translation for reads and logging for mutations. Store failures
/// are surfaced unchanged; nothing is retried or compensated.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductRepository>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductRepository>) -> Self {
        Self { store }
    }

    /// In-memory wiring (dev/test), optionally with the seed catalog.
    pub fn in_memory(seed: bool) -> Self {
        let store = if seed {
            InMemoryProductStore::seeded()
        } else {
            InMemoryProductStore::new()
        };
        Self::new(Arc::new(store))
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.list_all()
    }

    pub fn get_product(&self, id: ProductId) -> DomainResult<Product> {
        self.store.get_by_id(id).ok_or_else(|| {
            tracing::warn!(%id, "product not found");
            DomainError::not_found(format!("Product with id: {id} does not exist!"))
        })
    }

    /// Upsert by id: a product with the same id is replaced.
    pub fn create_product(&self, product: Product) -> Product {
        let saved = self.store.insert_or_replace(product);
        tracing::info!(id = %saved.product_id(), "product created or replaced");
        saved
    }

    pub fn update_product(&self, id: ProductId, data: ProductData) -> DomainResult<Product> {
        let updated = self.store.update(id, data).inspect_err(|e| log_failure(id, e))?;
        tracing::info!(%id, "product updated");
        Ok(updated)
    }

    pub fn delete_product(&self, id: ProductId) -> DomainResult<()> {
        self.store.delete(id).inspect_err(|e| log_failure(id, e))?;
        tracing::info!(%id, "product deleted");
        Ok(())
    }
}

fn log_failure(id: ProductId, err: &DomainError) {
    tracing::warn!(%id, "{err}");
}
