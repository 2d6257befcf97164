//! Pricing resolver.
//!
//! Resolves a unit price for a product and optional size, and derives line
//! totals. A size with no entry in the product's price map silently falls
//! back to the base price; there is no error path.

use rust_decimal::Decimal;

use crate::catalog::Product;

/// Unit price for a product with an optional selected size.
#[must_use]
pub fn unit_price(product: &Product, size: Option<&str>) -> Decimal {
    size.and_then(|size| product.prices.as_ref()?.get(size).copied())
        .unwrap_or(product.price)
}

/// Line total for a quantity of a product with an optional selected size.
#[must_use]
pub fn line_total(product: &Product, size: Option<&str>, quantity: u32) -> Decimal {
    unit_price(product, size) * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use zephyra_core::ProductId;

    #[test]
    fn test_size_price_overrides_base_price() {
        let catalog = Catalog::seed();
        let product = catalog.product(ProductId::new(13)).expect("product 13");

        assert_eq!(unit_price(product, Some("200ml")), Decimal::new(500, 0));
        assert_eq!(unit_price(product, Some("440ml")), Decimal::new(990, 0));
    }

    #[test]
    fn test_unknown_size_falls_back_to_base_price() {
        let catalog = Catalog::seed();
        let product = catalog.product(ProductId::new(13)).expect("product 13");

        assert_eq!(unit_price(product, Some("750ml")), product.price);
    }

    #[test]
    fn test_no_size_uses_base_price() {
        let catalog = Catalog::seed();
        let product = catalog.product(ProductId::new(1)).expect("product 1");

        assert_eq!(unit_price(product, None), Decimal::new(2499, 2));
    }

    #[test]
    fn test_line_total_multiplies_by_quantity() {
        let catalog = Catalog::seed();
        let product = catalog.product(ProductId::new(13)).expect("product 13");

        assert_eq!(
            line_total(product, Some("200ml"), 3),
            Decimal::new(1500, 0)
        );
    }
}
