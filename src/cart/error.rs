use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be greater than 0 (got {quantity} for '{name}')")]
    InvalidQuantity { name: String, quantity: u32 },

    #[error("quantity for '{name}' would overflow")]
    QuantityOverflow { name: String },
}

pub type CartResult<T> = std::result::Result<T, CartError>;
