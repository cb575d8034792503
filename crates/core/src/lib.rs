//! Menu Cart Core - Host-independent cart logic.
//!
//! This crate provides everything the menu cart widget does that does not
//! touch the DOM:
//! - the cart store and its rendering into a display region
//! - price and quantity parsing for menu display text
//! - the session hand-off format read by the checkout page
//!
//! # Architecture
//!
//! Browser facilities are reached only through traits ([`DisplayRegion`],
//! [`ItemBlock`], [`SessionStorage`], [`Navigator`], [`Notifier`]). The
//! `menu-cart-widget` crate implements them over `web-sys`; tests implement
//! them in memory.
//!
//! # Modules
//!
//! - [`types`] - Prices, quantities and line items
//! - [`cart`] - The cart store
//! - [`summary`] - Line subtotals and order total
//! - [`render`] - Order summary markup
//! - [`extract`] - Line items from menu markup
//! - [`handoff`] - Session storage contract
//! - [`checkout`] - Place-order flow
//! - [`config`] - Widget configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod extract;
pub mod handoff;
pub mod render;
pub mod summary;
pub mod types;

pub use cart::{CartStore, DisplayRegion};
pub use checkout::{CheckoutOutcome, CheckoutSettings, Navigator, Notifier, place_order};
pub use config::{ConfigError, WidgetConfig};
pub use error::{CartError, CheckoutError, HandoffError, NavigationError, StorageError};
pub use extract::{ExtractSettings, ItemBlock, extract_line_item};
pub use handoff::SessionStorage;
pub use summary::{OrderSummary, SummaryLine};
pub use types::*;
