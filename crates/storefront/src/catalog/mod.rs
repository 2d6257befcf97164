//! Product catalog and category taxonomy.
//!
//! The catalog is static reference data defined once at process start and
//! never mutated. Every other component reads from it: the cart resolves
//! products by id, the checkout prices them, and the assistant and visual
//! matcher serialize compact manifests of it for the upstream model.

mod data;

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use zephyra_core::ProductId;

/// Promotional tag shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductTag {
    New,
    Bestseller,
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base price, used when no size is selected.
    pub price: Decimal,
    /// Size-specific prices, keyed by size label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<HashMap<String, Decimal>>,
    /// Primary image.
    pub image_url: String,
    /// Additional images, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Available size labels, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category label.
    pub category: String,
    /// Subcategory label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Promotional tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<ProductTag>,
}

/// A category with one observed level of nesting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category name.
    pub name: String,
    /// Child categories, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub subcategories: Vec<Category>,
}

/// Compact product entry serialized into the assistant system instruction.
#[derive(Debug, Serialize)]
struct AssistantManifestEntry<'a> {
    id: ProductId,
    name: &'a str,
    category: &'a str,
    subcategory: Option<&'a str>,
    price: Decimal,
    description: Option<&'a str>,
}

/// Compact product entry serialized into the visual-match prompt.
#[derive(Debug, Serialize)]
struct VisionManifestEntry<'a> {
    id: ProductId,
    name: &'a str,
    description: Option<&'a str>,
    category: &'a str,
    subcategory: Option<&'a str>,
}

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products and categories, indexing by id.
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(idx, product)| (product.id, idx))
            .collect();

        Self {
            products,
            categories,
            by_id,
        }
    }

    /// The shipped Zephyra catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(data::products(), data::categories())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The category taxonomy.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|idx| self.products.get(*idx))
    }

    /// Products whose category or subcategory matches `name`, in catalog
    /// order.
    #[must_use]
    pub fn filter(&self, name: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| {
                product.category == name || product.subcategory.as_deref() == Some(name)
            })
            .collect()
    }

    /// Resolve a list of raw ids back to products, preserving order and
    /// silently dropping ids with no catalog match.
    #[must_use]
    pub fn resolve_ids(&self, ids: &[i32]) -> Vec<&Product> {
        ids.iter()
            .filter_map(|id| self.product(ProductId::new(*id)))
            .collect()
    }

    /// Serialized product manifest embedded in the assistant system
    /// instruction.
    #[must_use]
    pub fn assistant_manifest(&self) -> String {
        let entries: Vec<AssistantManifestEntry<'_>> = self
            .products
            .iter()
            .map(|p| AssistantManifestEntry {
                id: p.id,
                name: &p.name,
                category: &p.category,
                subcategory: p.subcategory.as_deref(),
                price: p.price,
                description: p.description.as_deref(),
            })
            .collect();

        // Serialization of plain structs cannot fail.
        serde_json::to_string(&entries).unwrap_or_default()
    }

    /// Serialized product manifest embedded in the visual-match prompt.
    #[must_use]
    pub fn vision_manifest(&self) -> String {
        let entries: Vec<VisionManifestEntry<'_>> = self
            .products
            .iter()
            .map(|p| VisionManifestEntry {
                id: p.id,
                name: &p.name,
                description: p.description.as_deref(),
                category: &p.category,
                subcategory: p.subcategory.as_deref(),
            })
            .collect();

        serde_json::to_string(&entries).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing;

    #[test]
    fn test_seed_catalog_lookup() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.products().len(), 13);

        let product = catalog.product(ProductId::new(13)).expect("product 13");
        assert_eq!(product.name, "Glycolic Gloss Shampoo");
        assert!(catalog.product(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_every_listed_size_has_a_positive_price() {
        // The size list and the price map are maintained by hand; this
        // catches a size label without a matching price entry.
        let catalog = Catalog::seed();
        for product in catalog.products() {
            for size in product.sizes.iter().flatten() {
                let price = pricing::unit_price(product, Some(size));
                assert!(
                    price > Decimal::ZERO,
                    "product {} size {size} resolves to a non-positive price",
                    product.id
                );
                let prices = product.prices.as_ref().expect("size list without prices");
                assert!(
                    prices.contains_key(size),
                    "product {} missing price for size {size}",
                    product.id
                );
            }
        }
    }

    #[test]
    fn test_filter_matches_category_and_subcategory() {
        let catalog = Catalog::seed();

        let skincare = catalog.filter("Skincare");
        assert!(skincare.iter().all(|p| p.category == "Skincare"));
        assert_eq!(skincare.len(), 5);

        let shampoo = catalog.filter("Shampoo");
        assert!(
            shampoo
                .iter()
                .all(|p| p.subcategory.as_deref() == Some("Shampoo"))
        );
        assert_eq!(shampoo.len(), 4);

        assert!(catalog.filter("Fragrance").is_empty());
    }

    #[test]
    fn test_resolve_ids_drops_unknown_and_preserves_order() {
        let catalog = Catalog::seed();
        let resolved = catalog.resolve_ids(&[2, 99, 5]);
        let ids: Vec<i32> = resolved.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_manifests_are_valid_json() {
        let catalog = Catalog::seed();

        let chat: serde_json::Value =
            serde_json::from_str(&catalog.assistant_manifest()).expect("chat manifest");
        assert_eq!(chat.as_array().map(Vec::len), Some(13));

        let vision: serde_json::Value =
            serde_json::from_str(&catalog.vision_manifest()).expect("vision manifest");
        let first = vision.get(0).expect("first entry");
        assert!(first.get("price").is_none());
        assert!(first.get("name").is_some());
    }
}
