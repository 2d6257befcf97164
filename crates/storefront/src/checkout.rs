//! Checkout calculator.
//!
//! Aggregates cart line totals into a subtotal, applies the flat delivery
//! charge and the coupon discount, and produces the final total. The last
//! applied coupon code is the only coupon state: re-applying an invalid
//! code replaces a previously valid discount with zero.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::pricing;

/// The single known coupon code, compared case-insensitively.
pub const COUPON_CODE: &str = "4EVERYOUNG";

/// Flat delivery charge, applied regardless of subtotal or destination.
#[must_use]
pub fn delivery_charge() -> Decimal {
    Decimal::new(150, 0)
}

/// Discount rate applied when the coupon code matches.
fn discount_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Final checkout figures for a cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub subtotal: Decimal,
    pub delivery_charge: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Sum of line totals over the cart snapshot. Lines whose product is not
/// in the catalog contribute nothing; ids only ever come from the catalog.
#[must_use]
pub fn subtotal(cart: &Cart, catalog: &Catalog) -> Decimal {
    cart.lines()
        .iter()
        .filter_map(|line| {
            let product = catalog.product(line.product_id)?;
            Some(pricing::line_total(
                product,
                line.size.as_deref(),
                line.quantity,
            ))
        })
        .sum()
}

/// Discount for a coupon code against a subtotal. A non-matching code
/// yields zero, replacing any previously applied discount.
#[must_use]
pub fn coupon_discount(code: &str, subtotal: Decimal) -> Decimal {
    if code.eq_ignore_ascii_case(COUPON_CODE) {
        subtotal * discount_rate()
    } else {
        Decimal::ZERO
    }
}

/// Compute the full checkout summary for a cart and the last applied
/// coupon code, if any. The total is not clamped: the discount can never
/// exceed 5% of the subtotal, so a negative total is unreachable.
#[must_use]
pub fn summary(cart: &Cart, catalog: &Catalog, coupon: Option<&str>) -> CheckoutSummary {
    let subtotal = subtotal(cart, catalog);
    let delivery_charge = delivery_charge();
    let discount = coupon.map_or(Decimal::ZERO, |code| coupon_discount(code, subtotal));

    CheckoutSummary {
        subtotal,
        delivery_charge,
        discount,
        total: subtotal + delivery_charge - discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zephyra_core::ProductId;

    fn cart_with_subtotal_1000(catalog: &Catalog) -> Cart {
        // Two 200ml Glycolic Gloss at 500 each.
        let mut cart = Cart::default();
        cart.add(ProductId::new(13), 2, Some("200ml".to_string()));
        assert_eq!(subtotal(&cart, catalog), Decimal::new(1000, 0));
        cart
    }

    #[test]
    fn test_coupon_is_case_insensitive() {
        let subtotal = Decimal::new(1000, 0);
        assert_eq!(coupon_discount("4everyoung", subtotal), Decimal::new(50, 0));
        assert_eq!(coupon_discount("4EVERYOUNG", subtotal), Decimal::new(50, 0));
    }

    #[test]
    fn test_invalid_coupon_yields_zero_discount() {
        assert_eq!(
            coupon_discount("bogus", Decimal::new(1000, 0)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_reapplying_bad_code_erases_prior_discount() {
        let catalog = Catalog::seed();
        let cart = cart_with_subtotal_1000(&catalog);

        let valid = summary(&cart, &catalog, Some("4everyoung"));
        assert_eq!(valid.discount, Decimal::new(50, 0));

        // The last applied code is the only coupon state.
        let replaced = summary(&cart, &catalog, Some("bogus"));
        assert_eq!(replaced.discount, Decimal::ZERO);
    }

    #[test]
    fn test_total_for_known_cart() {
        let catalog = Catalog::seed();
        let cart = cart_with_subtotal_1000(&catalog);

        let summary = summary(&cart, &catalog, Some("4EVERYOUNG"));
        assert_eq!(summary.subtotal, Decimal::new(1000, 0));
        assert_eq!(summary.delivery_charge, Decimal::new(150, 0));
        assert_eq!(summary.discount, Decimal::new(50, 0));
        assert_eq!(summary.total, Decimal::new(1100, 0));
    }

    #[test]
    fn test_empty_cart_still_pays_delivery() {
        let catalog = Catalog::seed();
        let summary = summary(&Cart::default(), &catalog, None);
        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::new(150, 0));
    }

    #[test]
    fn test_sized_and_unsized_lines_mix() {
        let catalog = Catalog::seed();
        let mut cart = Cart::default();
        cart.add(ProductId::new(1), 2, None); // 2 x 24.99
        cart.add(ProductId::new(13), 1, Some("440ml".to_string())); // 990

        assert_eq!(subtotal(&cart, &catalog), Decimal::new(103_998, 2));
    }
}
