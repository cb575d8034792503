//! Error types shared by the cart and its host adapters.

use thiserror::Error;

/// Cart store errors.
#[derive(Debug, Error)]
pub enum CartError {
    /// The order summary container is not on the page.
    #[error("Display region with id '{0}' not found")]
    DisplayRegionMissing(String),
}

/// Session hand-off encoding errors.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Failed to encode cart items: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to decode cart items: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Session storage errors reported by the host.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Session storage is disabled or not exposed by the host.
    #[error("Session storage unavailable")]
    Unavailable,
    /// The host refused the write (e.g. quota exceeded).
    #[error("Session storage write failed: {0}")]
    Write(String),
    #[error("Session storage read failed: {0}")]
    Read(String),
}

/// Navigation errors reported by the host.
#[derive(Debug, Error)]
#[error("Navigation to '{location}' failed: {reason}")]
pub struct NavigationError {
    pub location: String,
    pub reason: String,
}

/// Checkout hand-off errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Handoff(#[from] HandoffError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Result type alias for `CheckoutError`.
pub type CheckoutResult<T> = std::result::Result<T, CheckoutError>;
