//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::error::{CartError, CartResult};
use super::models::{CartItem, LineItem};

/// Merges one item into `cart_items`, aggregating the quantity of an existing
/// entry or appending a new one.
///
/// # Behaviour
///
/// * `quantity == 0` is rejected with [`CartError::InvalidQuantity`].
/// * If an item with the same name already exists, its `quantity` is
///   increased by `quantity`. Its price is **not** touched: the first price
///   recorded for a name is kept.
/// * An increment that would overflow `u32` is rejected with
///   [`CartError::QuantityOverflow`].
///
/// On error `cart_items` is left untouched.
pub fn merge_item(
    cart_items: &mut Vec<CartItem>,
    name: &str,
    price: f64,
    quantity: u32,
) -> CartResult<()> {
    if quantity == 0 {
        return Err(CartError::InvalidQuantity {
            name: name.to_string(),
            quantity,
        });
    }

    if let Some(existing) = cart_items.iter_mut().find(|i| i.name == name) {
        existing.line.quantity = existing
            .line
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| CartError::QuantityOverflow {
                name: name.to_string(),
            })?;
        tracing::debug!(
            item = name,
            added = quantity,
            quantity = existing.line.quantity,
            "incremented cart item"
        );
    } else {
        cart_items.push(CartItem {
            name: name.to_string(),
            line: LineItem { price, quantity },
        });
        tracing::debug!(item = name, price, quantity, "inserted cart item");
    }

    Ok(())
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Apple, 1x Banana"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.line.quantity, i.name))
        .collect::<Vec<_>>()
        .join(", ")
}
