use std::sync::{Mutex, MutexGuard, PoisonError};

use cosmocats_core::{DomainError, DomainResult, Entity, ProductId};
use cosmocats_products::{Product, ProductData};

use super::ProductRepository;
use super::seed::seed_products;

/// In-memory product store.
///
/// Every operation runs under one mutex, so concurrent requests observe a single
/// linear history. Lookups are linear scans; collection order is insertion order,
/// except that a replaced entity moves to the end.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demonstration catalog.
    pub fn seeded() -> Self {
        let store = Self::with_products(seed_products());
        tracing::debug!(count = store.lock().len(), "product store seeded");
        store
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let store = Self::new();
        for product in products {
            store.insert_or_replace(product);
        }
        store
    }

    // A panic while holding the lock cannot leave the Vec half-written, so the
    // poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn position(products: &[Product], id: ProductId) -> Option<usize> {
        products.iter().position(|p| *p.id() == id)
    }

    fn replace_at(products: &mut Vec<Product>, idx: usize, replacement: Product) -> Product {
        products.remove(idx);
        products.push(replacement.clone());
        replacement
    }
}

impl ProductRepository for InMemoryProductStore {
    fn insert_or_replace(&self, product: Product) -> Product {
        let mut products = self.lock();
        match Self::position(&products, product.product_id()) {
            Some(idx) => {
                let replacement = products[idx].replaced_with(product.data());
                Self::replace_at(&mut products, idx, replacement)
            }
            None => {
                products.push(product.clone());
                product
            }
        }
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        let products = self.lock();
        Self::position(&products, id).map(|idx| products[idx].clone())
    }

    fn update(&self, id: ProductId, data: ProductData) -> DomainResult<Product> {
        let mut products = self.lock();
        let idx = Self::position(&products, id).ok_or_else(|| {
            DomainError::not_found(format!(
                "Product with id: {id} does not exist. There is nothing to update!"
            ))
        })?;
        let replacement = products[idx].replaced_with(data);
        Ok(Self::replace_at(&mut products, idx, replacement))
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut products = self.lock();
        let idx = Self::position(&products, id).ok_or_else(|| {
            DomainError::not_found(format!(
                "Product with id: {id} does not exist. There is nothing to delete!"
            ))
        })?;
        products.remove(idx);
        Ok(())
    }

    fn list_all(&self) -> Vec<Product> {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmocats_core::CategoryId;

    fn data(name: &str, price: f64) -> ProductData {
        ProductData {
            category_id: CategoryId::new("c1"),
            name: name.to_string(),
            description: None,
            price: Some(price),
        }
    }

    fn product(name: &str, price: f64) -> Product {
        Product::new(ProductId::new(), data(name, price))
    }

    fn ids(store: &InMemoryProductStore) -> Vec<ProductId> {
        store.list_all().iter().map(|p| p.product_id()).collect()
    }

    #[test]
    fn insert_appends_new_products_in_order() {
        let store = InMemoryProductStore::new();
        let a = store.insert_or_replace(product("Cosmic Milk", 15.99));
        let b = store.insert_or_replace(product("Galaxy Catnip", 12.99));

        assert_eq!(ids(&store), vec![a.product_id(), b.product_id()]);
        assert_eq!(store.get_by_id(a.product_id()), Some(a));
    }

    #[test]
    fn insert_with_existing_id_replaces_keeping_the_id() {
        let store = InMemoryProductStore::new();
        let original = store.insert_or_replace(product("Cosmic Milk", 15.99));
        let other = store.insert_or_replace(product("Galaxy Catnip", 12.99));

        let incoming = Product::new(original.product_id(), data("Stardust Milk", 20.0));
        let stored = store.insert_or_replace(incoming.clone());

        assert_eq!(stored, incoming);
        assert_eq!(store.list_all().len(), 2);
        // Replacement moves to the end.
        assert_eq!(ids(&store), vec![other.product_id(), original.product_id()]);
        assert_eq!(store.get_by_id(original.product_id()).unwrap().name(), "Stardust Milk");
    }

    #[test]
    fn update_overwrites_all_fields_and_keeps_identity() {
        let store = InMemoryProductStore::new();
        let original = store.insert_or_replace(product("Cosmic Milk", 15.99));

        let new_data = ProductData {
            category_id: CategoryId::new("c9"),
            name: "Comet Dust Cream".to_string(),
            description: Some("smooth".to_string()),
            price: None,
        };
        let updated = store.update(original.product_id(), new_data.clone()).unwrap();

        assert_eq!(updated.product_id(), original.product_id());
        assert_eq!(updated.data(), new_data);
        assert_eq!(store.get_by_id(original.product_id()), Some(updated));
    }

    #[test]
    fn update_unknown_id_is_not_found_and_does_not_mutate() {
        let store = InMemoryProductStore::seeded();
        let before = store.list_all();
        let id = ProductId::new();

        let err = store.update(id, data("Cosmic Milk", 1.0)).unwrap_err();

        assert_eq!(
            err,
            DomainError::NotFound(format!(
                "Product with id: {id} does not exist. There is nothing to update!"
            ))
        );
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let store = InMemoryProductStore::seeded();
        let before = store.list_all();
        let victim = before[2].product_id();

        store.delete(victim).unwrap();

        let after = store.list_all();
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|p| p.product_id() != victim));
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let store = InMemoryProductStore::seeded();
        let err = store.delete(ProductId::new()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m.ends_with("There is nothing to delete!")));
        assert_eq!(store.list_all().len(), 5);
    }

    #[test]
    fn get_unknown_id_is_none() {
        assert!(InMemoryProductStore::seeded().get_by_id(ProductId::new()).is_none());
    }

    #[test]
    fn concurrent_inserts_are_all_kept() {
        let store = std::sync::Arc::new(InMemoryProductStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.insert_or_replace(product("Cosmic Milk", 1.0));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.list_all().len(), 200);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: repeated upserts of the same id leave exactly one entity
            /// carrying the last payload.
            #[test]
            fn upsert_keeps_one_entity_per_id(prices in prop::collection::vec(0.01f64..1000.0, 1..20)) {
                let store = InMemoryProductStore::new();
                let id = ProductId::new();
                for price in &prices {
                    store.insert_or_replace(Product::new(id, data("Cosmic Milk", *price)));
                }

                let all = store.list_all();
                prop_assert_eq!(all.len(), 1);
                prop_assert_eq!(all[0].price(), prices.last().copied());
            }
        }
    }
}
