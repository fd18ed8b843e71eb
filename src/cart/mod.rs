//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (LineItem, CartItem, CartSummary)
//! - Errors raised by cart mutations
//! - Business logic helpers (item merging, formatting)
//! - The Cart entity itself

pub mod error;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::{CartError, CartResult};
pub use models::{CartItem, CartSummary, LineItem, DEFAULT_QUANTITY};
pub use state::Cart;
