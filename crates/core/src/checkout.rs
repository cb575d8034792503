//! Checkout hand-off.
//!
//! Placing an order never talks to a server: the cart is written to session
//! storage and the browser moves on to the checkout page, which picks the
//! items up from there.

use tracing::instrument;

use crate::cart::{CartStore, DisplayRegion};
use crate::error::{CheckoutResult, NavigationError};
use crate::handoff::{self, SessionStorage};
use crate::types::LineItem;

/// Browser navigation.
pub trait Navigator {
    /// Send the page to `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to navigate.
    fn navigate(&self, location: &str) -> Result<(), NavigationError>;
}

/// Blocking user-facing notices.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Fixed checkout parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    /// Session storage key for the serialized cart.
    pub storage_key: String,
    /// Where to send the browser once the cart is stored.
    pub location: String,
    /// Notice shown when ordering with an empty cart.
    pub empty_cart_notice: String,
}

/// What a checkout attempt did.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Nothing to order; the user was notified.
    EmptyCart,
    /// The cart was stored and the browser redirected.
    Redirected { items: Vec<LineItem> },
}

/// Hand the cart off to the checkout page.
///
/// # Errors
///
/// Returns an error if the cart cannot be encoded or stored, or navigation
/// fails. Nothing is navigated to unless the write succeeded.
#[instrument(skip_all, fields(items = cart.items().len(), location = %settings.location))]
pub fn place_order<R: DisplayRegion>(
    cart: &CartStore<R>,
    storage: &mut impl SessionStorage,
    navigator: &impl Navigator,
    notifier: &impl Notifier,
    settings: &CheckoutSettings,
) -> CheckoutResult<CheckoutOutcome> {
    if cart.is_empty() {
        tracing::debug!("Checkout attempted with an empty cart");
        notifier.notify(&settings.empty_cart_notice);
        return Ok(CheckoutOutcome::EmptyCart);
    }

    let items = cart.items().to_vec();
    let json = handoff::encode(&items)?;
    storage.set_item(&settings.storage_key, &json)?;
    navigator.navigate(&settings.location)?;

    tracing::info!(total = %cart.summary().total, "Cart handed off to checkout");
    Ok(CheckoutOutcome::Redirected { items })
}
