//! Session hand-off contract between the menu page and the checkout page.
//!
//! On checkout the cart is written as a JSON array of
//! `{"name", "price", "quantity"}` objects under a fixed key in session
//! storage. The checkout page reads the same key back. Both sides go through
//! [`encode`] and [`decode`] so the format lives in one place.

use crate::error::{CheckoutError, HandoffError, StorageError};
use crate::types::LineItem;

/// Session storage key holding the serialized cart.
pub const DEFAULT_STORAGE_KEY: &str = "cartItems";

/// Session-scoped key/value storage provided by the host.
pub trait SessionStorage {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Serialize `items` to the hand-off format.
///
/// # Errors
///
/// Returns [`HandoffError::Encode`] if serialization fails.
pub fn encode(items: &[LineItem]) -> Result<String, HandoffError> {
    serde_json::to_string(items).map_err(HandoffError::Encode)
}

/// Parse the hand-off format.
///
/// # Errors
///
/// Returns [`HandoffError::Decode`] if `json` is not a list of line items.
pub fn decode(json: &str) -> Result<Vec<LineItem>, HandoffError> {
    serde_json::from_str(json).map_err(HandoffError::Decode)
}

/// Read the cart left by the menu page, if any.
///
/// # Errors
///
/// Returns an error if storage cannot be read or the stored value does not
/// decode.
pub fn load_items(
    storage: &impl SessionStorage,
    key: &str,
) -> Result<Option<Vec<LineItem>>, CheckoutError> {
    match storage.get_item(key)? {
        Some(json) => Ok(Some(decode(&json)?)),
        None => Ok(None),
    }
}
