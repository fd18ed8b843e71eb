//! Shopping Cart Library
//!
//! This library provides an in-memory shopping cart that tracks named line
//! items with their unit price and quantity, and computes aggregate totals.

// Domain modules
pub mod cart;

pub use cart::{Cart, CartError, CartItem, CartResult, CartSummary, LineItem};
