//! # Cart
//!
//! The ordered list of accepted quotations.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation        Effect                          Fails?                │
//! │  ─────────        ──────                          ──────                │
//! │  add(q)           push to the end                 no (dup id: no-op)    │
//! │  remove(id)       drop every entry with that id   no (unknown: no-op)   │
//! │  clear()          empty                           no                    │
//! │  total()          Σ quotation.total, every read   no                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence is not this type's concern; the app mirrors every mutation
//! to the store. Serialized form is a bare array of quotations.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Quotation;

/// Accepted quotations in insertion order.
///
/// ## Invariants
/// - Display order = addition order
/// - Every `id` is unique within the cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Quotation>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Rebuilds a cart from persisted items.
    ///
    /// Later entries repeating an earlier id are dropped.
    pub fn from_items(items: Vec<Quotation>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    /// Appends a quotation.
    ///
    /// Returns `false` (and leaves the cart untouched) when a quotation with
    /// the same id is already present.
    pub fn add(&mut self, quotation: Quotation) -> bool {
        if self.contains(&quotation.id) {
            return false;
        }
        self.items.push(quotation);
        true
    }

    /// Removes every entry whose id equals `id`. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|q| q.id != id);
        before - self.items.len()
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quotation totals, in whole currency units. Saturates.
    pub fn total(&self) -> i64 {
        self.items.iter().fold(0, |sum, q| sum.saturating_add(q.total))
    }

    /// The total as Money.
    pub fn total_money(&self) -> Money {
        let cents = self
            .items
            .iter()
            .fold(0i64, |sum, q| sum.saturating_add(q.total_money().cents()));
        Money::from_cents(cents)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|q| q.id == id)
    }

    /// Items in display order.
    pub fn items(&self) -> &[Quotation] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: &str, total: i64) -> Quotation {
        Quotation {
            id: id.to_string(),
            destination_id: "cancun".to_string(),
            title: format!("Quote {}", id),
            detail: "2 adults · 0 minors · departure —".to_string(),
            total,
        }
    }

    #[test]
    fn test_add_keeps_order_and_sums() {
        let mut cart = Cart::new();
        assert!(cart.add(quote("a", 828)));
        assert!(cart.add(quote("b", 920)));

        let ids: Vec<&str> = cart.items().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(cart.total(), 1748);
        assert_eq!(cart.total_money(), Money::from_major(1748));
    }

    #[test]
    fn test_add_duplicate_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(quote("a", 100));
        assert!(!cart.add(quote("a", 999)));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 100);
    }

    #[test]
    fn test_remove_unknown_leaves_sequence_unchanged() {
        let mut cart = Cart::from_items(vec![quote("a", 1), quote("b", 2)]);
        let before = cart.clone();

        assert_eq!(cart.remove("zzz"), 0);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_existing() {
        let mut cart = Cart::from_items(vec![quote("a", 1), quote("b", 2), quote("c", 3)]);
        assert_eq!(cart.remove("b"), 1);

        let ids: Vec<&str> = cart.items().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(cart.total(), 4);
    }

    #[test]
    fn test_clear_then_total_is_zero() {
        let mut cart = Cart::from_items(vec![quote("a", 1), quote("b", 2)]);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_total_saturates() {
        let cart = Cart::from_items(vec![quote("a", i64::MAX), quote("b", 5)]);
        assert_eq!(cart.total(), i64::MAX);
    }

    #[test]
    fn test_from_items_drops_duplicate_ids() {
        let cart = Cart::from_items(vec![quote("a", 1), quote("a", 2), quote("b", 3)]);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].total, 1);
    }

    #[test]
    fn test_serializes_as_array() {
        let cart = Cart::from_items(vec![quote("a", 1)]);
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["destinationId"], "cancun");

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
