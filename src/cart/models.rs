//! Shopping Cart Domain Models
//!
//! This module contains the data structures stored in and produced by a
//! [`Cart`](super::Cart).

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Quantity used when an item is added without an explicit count
pub const DEFAULT_QUANTITY: u32 = 1;

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Unit price and quantity recorded for one item name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Price per unit, as recorded on first insertion
    pub price: f64,

    /// Number of units (always at least 1 while stored in a cart)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl LineItem {
    /// `price * quantity`, unrounded.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Represents a named item in the shopping cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Name of the product, unique within a cart
    pub name: String,

    /// Price and quantity, serialized next to `name`
    #[serde(flatten)]
    pub line: LineItem,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            line: LineItem { price, quantity },
        }
    }
}

/// Owned snapshot of a cart with its aggregates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Items in insertion order
    pub items: Vec<CartItem>,

    /// Sum of all quantities
    pub total_quantity: u64,

    /// Sum of `price * quantity` over all items
    pub total_price: f64,
}
