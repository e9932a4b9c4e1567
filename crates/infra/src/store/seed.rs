//! Demonstration catalog loaded at startup.
//!
//! Ids, names, descriptions and prices are fixed; category ids are random.

use cosmocats_core::{CategoryId, ProductId};
use cosmocats_products::{Product, ProductData};
use uuid::Uuid;

const SEED: &[(u128, &str, &str, f64)] = &[
    (
        0x77777777_0000_0000_0000_000000000001,
        "Anti-Gravity Yarn Ball",
        "A yarn ball that floats in zero gravity, perfect for cosmic playtime.",
        49.99,
    ),
    (
        0x77777777_0000_0000_0000_000000000002,
        "Cosmic Milk",
        "A refreshing drink made from milk harvested from cosmic cows.",
        15.99,
    ),
    (
        0x77777777_0000_0000_0000_000000000003,
        "Stardust Blanket",
        "A warm blanket infused with stardust for cozy nights in space.",
        99.99,
    ),
    (
        0x77777777_0000_0000_0000_000000000004,
        "Galaxy Catnip",
        "Specially cultivated catnip that provides a euphoric space experience.",
        12.99,
    ),
    (
        0x77777777_0000_0000_0000_000000000005,
        "Nebula Scratching Post",
        "A scratching post made from sturdy asteroid materials.",
        79.99,
    ),
];

pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, name, description, price)| {
            Product::new(
                ProductId::from_uuid(Uuid::from_u128(id)),
                ProductData {
                    category_id: CategoryId::random(),
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    price: Some(price),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_deterministic() {
        let ids: Vec<String> = seed_products().iter().map(|p| p.product_id().to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "77777777-0000-0000-0000-000000000001",
                "77777777-0000-0000-0000-000000000002",
                "77777777-0000-0000-0000-000000000003",
                "77777777-0000-0000-0000-000000000004",
                "77777777-0000-0000-0000-000000000005",
            ]
        );
    }

    #[test]
    fn seed_names_pass_the_vocabulary_check() {
        for p in seed_products() {
            assert!(cosmocats_products::contains_cosmic_term(p.name()), "{}", p.name());
        }
    }
}
