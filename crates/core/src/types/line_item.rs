//! Cart line items.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Price, Quantity};

/// Errors that can occur when building a line item.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineItemError {
    #[error("Unit price for '{name}' is negative: {price}")]
    NegativePrice { name: String, price: Price },
}

/// One distinct product in the cart.
///
/// `name` is the deduplication key. The serde field names are the checkout
/// hand-off format read by the follow-up page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Units ordered.
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a line item.
    ///
    /// # Errors
    ///
    /// Returns [`LineItemError::NegativePrice`] if `price` is below zero.
    /// A NaN price is accepted as-is.
    pub fn new(
        name: impl Into<String>,
        price: Price,
        quantity: Quantity,
    ) -> Result<Self, LineItemError> {
        let name = name.into();
        if price.is_negative() {
            return Err(LineItemError::NegativePrice { name, price });
        }
        Ok(Self {
            name,
            price,
            quantity,
        })
    }

    /// `price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}
