//! Money formatting helpers using decimal arithmetic.
//!
//! Zephyra prices are plain [`Decimal`] amounts in a single currency (Taka).
//! There is no currency conversion; the only policy is fixed two-decimal
//! display formatting at the edges.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol appended to displayed amounts.
pub const CURRENCY_SYMBOL: &str = "\u{09f3}";

/// Format an amount for display with two decimal places and the currency
/// symbol, e.g. `1150.00৳`. Amounts carrying more precision are rounded
/// half away from zero; `Display` precision alone would truncate.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}{CURRENCY_SYMBOL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(Decimal::new(2499, 2)), "24.99\u{09f3}");
        assert_eq!(format_amount(Decimal::new(150, 0)), "150.00\u{09f3}");
    }

    #[test]
    fn test_format_amount_rounds_display_only() {
        // Rounding is a formatting concern; the Decimal itself keeps full
        // precision.
        let amount = Decimal::new(12346, 3); // 12.346
        assert_eq!(format_amount(amount), "12.35\u{09f3}");

        let amount = Decimal::new(12344, 3); // 12.344
        assert_eq!(format_amount(amount), "12.34\u{09f3}");
    }

    #[test]
    fn test_format_amount_rounds_fractional_discount() {
        // 5% of a two-decimal subtotal has four decimals.
        let discount = Decimal::new(2499, 2) * Decimal::new(5, 2); // 1.2495
        assert_eq!(format_amount(discount), "1.25\u{09f3}");
    }

    #[test]
    fn test_format_amount_rounds_midpoint_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35\u{09f3}");
    }
}
