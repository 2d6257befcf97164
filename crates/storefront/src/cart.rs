//! Cart ledger.
//!
//! An in-memory collection of line items keyed by product id plus optional
//! size label. The cart lives in the session and is read-modified-written
//! by the cart route handlers; nothing survives the session. All operations
//! are total functions over the collection - there are no error paths.

use serde::{Deserialize, Serialize};

use zephyra_core::ProductId;

/// A single cart line. The composite key is product id + optional size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Selected size label, if the product has sizes.
    pub size: Option<String>,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Stable line identifier, `"{id}"` or `"{id}-{size}"`.
    #[must_use]
    pub fn line_id(&self) -> String {
        match &self.size {
            Some(size) => format!("{}-{size}", self.product_id),
            None => self.product_id.to_string(),
        }
    }

    fn matches(&self, product_id: ProductId, size: Option<&str>) -> bool {
        self.product_id == product_id && self.size.as_deref() == size
    }
}

/// The session-scoped cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add `quantity` of a product. If a line with the same product+size
    /// key exists its quantity is incremented, otherwise a new line is
    /// appended. Quantity is floored at 1; there is no upper bound.
    pub fn add(&mut self, product_id: ProductId, quantity: u32, size: Option<String>) {
        let quantity = quantity.max(1);
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product_id, size.as_deref()))
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product_id,
                size,
                quantity,
            });
        }
    }

    /// Set the quantity of a line, clamped to a minimum of 1. A line can
    /// never reach zero through this path. Unknown line ids are ignored.
    pub fn set_quantity(&mut self, line_id: &str, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.line_id() == line_id) {
            line.quantity = quantity.max(1);
        }
    }

    /// Remove a line unconditionally. Idempotent if already absent.
    pub fn remove(&mut self, line_id: &str) {
        self.lines.retain(|line| line.line_id() != line_id);
    }

    /// Current line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i32) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn test_add_merges_same_product_and_size() {
        let mut cart = Cart::default();
        cart.add(id(13), 1, Some("440ml".to_string()));
        cart.add(id(13), 2, Some("440ml".to_string()));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_add_distinguishes_sizes() {
        let mut cart = Cart::default();
        cart.add(id(13), 1, Some("440ml".to_string()));
        cart.add(id(13), 1, Some("200ml".to_string()));
        cart.add(id(1), 1, None);

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_add_saturates_instead_of_overflowing() {
        let mut cart = Cart::default();
        cart.add(id(1), u32::MAX, None);
        cart.add(id(1), 2, None);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_add_floors_quantity_at_one() {
        let mut cart = Cart::default();
        cart.add(id(1), 0, None);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_never_reaches_zero() {
        let mut cart = Cart::default();
        cart.add(id(1), 1, None);

        // Decrement from 1 leaves the line at 1.
        cart.set_quantity("1", 0);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.set_quantity("1", 5);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_set_quantity_ignores_unknown_line() {
        let mut cart = Cart::default();
        cart.add(id(1), 2, None);
        cart.set_quantity("99-440ml", 7);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::default();
        cart.add(id(13), 1, Some("440ml".to_string()));

        cart.remove("13-440ml");
        assert!(cart.is_empty());

        // Removing again is a no-op.
        cart.remove("13-440ml");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_lines_preserve_insertion_order() {
        let mut cart = Cart::default();
        cart.add(id(5), 1, None);
        cart.add(id(2), 1, None);
        cart.add(id(9), 1, None);

        let ids: Vec<String> = cart.lines().iter().map(CartLine::line_id).collect();
        assert_eq!(ids, vec!["5", "2", "9"]);
    }

    #[test]
    fn test_cart_survives_session_roundtrip() {
        let mut cart = Cart::default();
        cart.add(id(13), 2, Some("200ml".to_string()));

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
