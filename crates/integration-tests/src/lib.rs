//! Integration tests for the menu cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p menu-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Add/clear behaviour as seen through the rendered summary
//! - `menu_parsing` - Price and quantity parsing of menu text
//! - `checkout_handoff` - Place-order flow and the session storage format
//!
//! This library provides in-memory stand-ins for the browser so the core
//! crate can be driven end to end without a DOM.

use std::cell::RefCell;
use std::collections::HashMap;

use menu_cart_core::{
    CartStore, DisplayRegion, ItemBlock, NavigationError, Navigator, Notifier, SessionStorage,
    StorageError,
};

/// Display region that keeps every render.
#[derive(Debug, Default)]
pub struct RecordingRegion {
    pub renders: Vec<String>,
}

impl RecordingRegion {
    /// Markup from the latest render.
    #[must_use]
    pub fn current(&self) -> &str {
        self.renders.last().map_or("", String::as_str)
    }
}

impl DisplayRegion for RecordingRegion {
    fn replace_markup(&mut self, markup: &str) {
        self.renders.push(markup.to_string());
    }
}

/// Session storage backed by a map.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    pub values: HashMap<String, String>,
}

impl SessionStorage for MemorySessionStorage {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }
}

/// Records navigation and notices instead of performing them.
#[derive(Debug, Default)]
pub struct FakeBrowser {
    pub visited: RefCell<Vec<String>>,
    pub notices: RefCell<Vec<String>>,
}

impl Navigator for FakeBrowser {
    fn navigate(&self, location: &str) -> Result<(), NavigationError> {
        self.visited.borrow_mut().push(location.to_string());
        Ok(())
    }
}

impl Notifier for FakeBrowser {
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

/// A menu block as authored on the page.
#[derive(Debug, Default, Clone)]
pub struct MenuBlock {
    pub name: Option<String>,
    pub price: Option<String>,
    pub attributes: HashMap<String, String>,
}

impl MenuBlock {
    /// A block with both name and price elements.
    #[must_use]
    pub fn new(name: &str, price: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
            attributes: HashMap::new(),
        }
    }
}

impl ItemBlock for MenuBlock {
    fn name_text(&self) -> Option<String> {
        self.name.clone()
    }

    fn price_text(&self) -> Option<String> {
        self.price.clone()
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

/// A fresh cart bound to a recording region.
#[must_use]
pub fn new_cart() -> CartStore<RecordingRegion> {
    match CartStore::initialize(Some(RecordingRegion::default()), "order-summary") {
        Ok(cart) => cart,
        Err(e) => unreachable!("region supplied: {e}"),
    }
}
