//! Shopping Cart State
//!
//! This module holds the [`Cart`] entity: an owned, insertion-ordered set of
//! line items keyed by item name.

use super::error::CartResult;
use super::helpers::{format_item_summary, merge_item};
use super::models::{CartItem, CartSummary, LineItem, DEFAULT_QUANTITY};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Cart
// =============================================================================

/// In-memory shopping cart.
///
/// Every stored item has a quantity of at least 1 and a name that is unique
/// within the cart. Items keep the order in which they were first added,
/// but two carts compare equal whenever they hold the same line items.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item_name` at `price` per unit.
    ///
    /// Re-adding a name increments its quantity and keeps the price recorded
    /// on first insertion. Fails with
    /// [`CartError::InvalidQuantity`](super::CartError::InvalidQuantity) when
    /// `quantity` is 0, leaving the cart unchanged.
    pub fn add_item(&mut self, item_name: &str, price: f64, quantity: u32) -> CartResult<()> {
        merge_item(&mut self.items, item_name, price, quantity).inspect_err(|err| {
            tracing::debug!(item = item_name, %err, "rejected cart item");
        })
    }

    /// Adds a single unit of `item_name`.
    pub fn add_one(&mut self, item_name: &str, price: f64) -> CartResult<()> {
        self.add_item(item_name, price, DEFAULT_QUANTITY)
    }

    /// Merges a batch of items with the same rules as [`Cart::add_item`].
    ///
    /// The batch is applied as a whole: if any item is rejected, none of them
    /// are added.
    pub fn add_items<I>(&mut self, items: I) -> CartResult<()>
    where
        I: IntoIterator<Item = CartItem>,
    {
        let mut staged = self.items.clone();
        for incoming in items {
            merge_item(
                &mut staged,
                &incoming.name,
                incoming.line.price,
                incoming.line.quantity,
            )
            .inspect_err(|err| {
                tracing::debug!(item = %incoming.name, %err, "rejected cart batch");
            })?;
        }
        self.items = staged;
        Ok(())
    }

    /// Removes `item_name` and returns its line item; absent names are a no-op.
    pub fn remove_item(&mut self, item_name: &str) -> Option<LineItem> {
        let index = self.items.iter().position(|i| i.name == item_name)?;
        let removed = self.items.remove(index);
        tracing::debug!(
            item = item_name,
            quantity = removed.line.quantity,
            "removed cart item"
        );
        Some(removed.line)
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all items
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.line.quantity)).sum()
    }

    /// Sum of `price * quantity` across all items, unrounded
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|i| i.line.subtotal()).sum()
    }

    /// Read-only view of the items in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Copy of the line item stored under `item_name`
    pub fn get(&self, item_name: &str) -> Option<LineItem> {
        self.items
            .iter()
            .find(|i| i.name == item_name)
            .map(|i| i.line)
    }

    /// Number of distinct item names
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the cart holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned snapshot with aggregates, suitable for serialization
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            total_quantity: self.total_quantity(),
            total_price: self.total_price(),
        }
    }
}

impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .items
                .iter()
                .all(|i| other.get(&i.name) == Some(i.line))
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_item_summary(&self.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartError;

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.items().is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_add_one_uses_default_quantity() {
        let mut cart = Cart::new();
        cart.add_one("Pear", 4500.0).unwrap();
        cart.add_one("Pear", 4500.0).unwrap();
        assert_eq!(
            cart.get("Pear"),
            Some(LineItem {
                price: 4500.0,
                quantity: 2
            })
        );
    }

    #[test]
    fn test_add_items_is_all_or_nothing() {
        let mut cart = Cart::new();
        cart.add_item("Apple", 10000.0, 2).unwrap();
        let before = cart.clone();

        let err = cart
            .add_items(vec![
                CartItem::new("Apple", 10000.0, 1),
                CartItem::new("Banana", 5000.0, 0),
            ])
            .unwrap_err();

        assert!(
            matches!(err, CartError::InvalidQuantity { ref name, .. } if name == "Banana")
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_items_merges_batch() {
        let mut cart = Cart::new();
        cart.add_item("Apple", 10000.0, 2).unwrap();
        cart.add_items(vec![
            CartItem::new("Apple", 12000.0, 3),
            CartItem::new("Banana", 5000.0, 1),
        ])
        .unwrap();

        assert_eq!(cart.to_string(), "5x Apple, 1x Banana");
        assert_eq!(cart.get("Apple").map(|l| l.price), Some(10000.0));
    }

    #[test]
    fn test_remove_item_returns_line() {
        let mut cart = Cart::new();
        cart.add_item("Apple", 10000.0, 2).unwrap();
        assert_eq!(
            cart.remove_item("Apple"),
            Some(LineItem {
                price: 10000.0,
                quantity: 2
            })
        );
        assert_eq!(cart.remove_item("Apple"), None);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = Cart::new();
        a.add_item("Apple", 10000.0, 2).unwrap();
        a.add_item("Banana", 5000.0, 3).unwrap();

        let mut b = Cart::new();
        b.add_item("Banana", 5000.0, 3).unwrap();
        b.add_item("Apple", 10000.0, 2).unwrap();

        assert_eq!(a, b);
        assert_ne!(a.to_string(), b.to_string());

        b.add_one("Apple", 10000.0).unwrap();
        assert_ne!(a, b);

        b.remove_item("Apple");
        b.add_item("Cherry", 10000.0, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_total_quantity_does_not_overflow_u32() {
        let mut cart = Cart::new();
        cart.add_item("A", 0.0, u32::MAX).unwrap();
        cart.add_item("B", 0.0, u32::MAX).unwrap();
        assert_eq!(cart.total_quantity(), 2 * u64::from(u32::MAX));
    }
}
