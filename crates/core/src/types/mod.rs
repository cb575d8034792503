//! Core types for the menu cart.
//!
//! This module provides type-safe wrappers for the cart's domain values.

pub mod line_item;
pub mod price;
pub mod quantity;

pub use line_item::{LineItem, LineItemError};
pub use price::Price;
pub use quantity::Quantity;
