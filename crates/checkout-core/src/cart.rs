//! # Cart
//!
//! Ordered cart lines, at most one per SKU.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                    Line present          Line absent         │
//! │  ─────────                    ────────────          ───────────         │
//! │                                                                         │
//! │  add(sku, n)                  qty += n (in place)   push(sku, n)        │
//! │                                                                         │
//! │  set_quantity(sku, q > 0)     qty = q (in place)    push(sku, q)        │
//! │                                                                         │
//! │  set_quantity(sku, q <= 0)    line removed          push(sku, q) KEEP   │
//! │                                                     no-op        DROP   │
//! │                                                                         │
//! │  remove(sku)                  = set_quantity(sku, 0)                    │
//! │                                                                         │
//! │  NOTE: a line keeps the position of its first insertion until it is    │
//! │        removed. Re-adding after removal appends at the end.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use crate::config::OrphanLinePolicy;
use crate::error::{CoreError, CoreResult};
use crate::types::CartLine;

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `sku`
/// - Lines are kept in first-insertion order
/// - A pre-existing line never survives a non-positive quantity update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, sku: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.sku == sku)
    }

    /// Increases the quantity for `sku` by `quantity`, going through
    /// [`Cart::set_quantity`] with the summed amount.
    ///
    /// Fails with [`CoreError::QuantityOverflow`] when the sum leaves the
    /// `i64` range; the cart is unchanged in that case.
    pub fn add(&mut self, sku: &str, quantity: i64, orphans: OrphanLinePolicy) -> CoreResult<()> {
        let Some(new_qty) = self.quantity_of(sku).checked_add(quantity) else {
            warn!(sku = %sku, quantity, "Cart quantity would overflow");
            return Err(CoreError::QuantityOverflow(sku.to_string()));
        };
        self.set_quantity(sku, new_qty, orphans);
        Ok(())
    }

    /// Sets the absolute quantity for `sku`.
    pub fn set_quantity(&mut self, sku: &str, quantity: i64, orphans: OrphanLinePolicy) {
        match self.position(sku) {
            Some(idx) if quantity > 0 => {
                debug!(sku = %sku, quantity, "Updating cart line");
                self.lines[idx].quantity = quantity;
            }
            Some(idx) => {
                debug!(sku = %sku, quantity, "Removing cart line");
                self.lines.remove(idx);
            }
            None if quantity <= 0 && orphans == OrphanLinePolicy::Drop => {
                debug!(sku = %sku, quantity, "Ignoring non-positive quantity for absent line");
            }
            None => {
                debug!(sku = %sku, quantity, "Appending cart line");
                self.lines.push(CartLine::new(sku, quantity));
            }
        }
    }

    pub fn remove(&mut self, sku: &str, orphans: OrphanLinePolicy) {
        self.set_quantity(sku, 0, orphans);
    }

    /// Quantity for `sku`, or 0 when there is no line.
    pub fn quantity_of(&self, sku: &str) -> i64 {
        self.position(sku)
            .map(|idx| self.lines[idx].quantity)
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "Clearing cart");
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEEP: OrphanLinePolicy = OrphanLinePolicy::Keep;
    const DROP: OrphanLinePolicy = OrphanLinePolicy::Drop;

    #[test]
    fn test_add_accumulates_in_place() {
        let mut cart = Cart::new();
        cart.add("b", 2, KEEP).unwrap();
        cart.add("a", 1, KEEP).unwrap();
        cart.add("b", 3, KEEP).unwrap();

        assert_eq!(cart.lines(), &[CartLine::new("b", 5), CartLine::new("a", 1)]);
    }

    #[test]
    fn test_set_quantity_keeps_position() {
        let mut cart = Cart::new();
        cart.add("b", 2, KEEP).unwrap();
        cart.add("a", 1, KEEP).unwrap();
        cart.set_quantity("b", 1, KEEP);

        assert_eq!(cart.lines(), &[CartLine::new("b", 1), CartLine::new("a", 1)]);
    }

    #[test]
    fn test_non_positive_quantity_removes_existing_line() {
        let mut cart = Cart::new();
        cart.add("b", 1, KEEP).unwrap();
        cart.add("a", 1, KEEP).unwrap();

        cart.set_quantity("a", 0, KEEP);
        assert_eq!(cart.lines(), &[CartLine::new("b", 1)]);

        cart.set_quantity("b", -2, DROP);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_readd_after_remove_appends() {
        let mut cart = Cart::new();
        cart.add("a", 1, KEEP).unwrap();
        cart.add("b", 1, KEEP).unwrap();
        cart.remove("a", KEEP);
        cart.add("a", 4, KEEP).unwrap();

        assert_eq!(cart.lines(), &[CartLine::new("b", 1), CartLine::new("a", 4)]);
    }

    #[test]
    fn test_remove_absent_keeps_orphan_line() {
        let mut cart = Cart::new();
        cart.remove("z", KEEP);

        assert_eq!(cart.lines(), &[CartLine::new("z", 0)]);
        assert_eq!(cart.quantity_of("z"), 0);
    }

    #[test]
    fn test_remove_absent_with_drop_policy_is_noop() {
        let mut cart = Cart::new();
        cart.remove("z", DROP);
        cart.set_quantity("y", -3, DROP);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_orphan_line_is_removed_by_next_add() {
        // z×0 exists, so adding 0 again counts as "present, qty <= 0"
        let mut cart = Cart::new();
        cart.remove("z", KEEP);
        cart.add("z", 0, KEEP).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_overflow_leaves_line_unchanged() {
        let mut cart = Cart::new();
        cart.add("x", i64::MAX, KEEP).unwrap();

        let err = cart.add("x", 1, KEEP).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow(sku) if sku == "x"));
        assert_eq!(cart.lines(), &[CartLine::new("x", i64::MAX)]);

        cart.set_quantity("y", i64::MIN, KEEP);
        assert!(cart.add("y", -1, KEEP).is_err());
        assert_eq!(cart.quantity_of("y"), i64::MIN);
    }

    #[test]
    fn test_quantity_of_absent_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.quantity_of("nope"), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("a", 1, KEEP).unwrap();
        cart.add("b", 2, KEEP).unwrap();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }
}
