//! The cart store.
//!
//! Owns the list of line items for one page view and keeps a display region
//! in sync with it. All mutation goes through [`CartStore`]; callers only
//! ever see the items through a shared borrow.

use tracing::instrument;

use crate::error::CartError;
use crate::render::render_summary;
use crate::summary::OrderSummary;
use crate::types::LineItem;

/// A place the order summary markup is written to.
pub trait DisplayRegion {
    /// Replace the region's contents with `markup`.
    fn replace_markup(&mut self, markup: &str);
}

/// In-memory cart bound to a display region.
#[derive(Debug)]
pub struct CartStore<R> {
    items: Vec<LineItem>,
    region: R,
}

impl<R: DisplayRegion> CartStore<R> {
    /// Bind a new, empty cart to `region` and render it.
    ///
    /// `region` is the result of looking up `region_id` on the host page.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DisplayRegionMissing`] if the lookup found nothing.
    pub fn initialize(region: Option<R>, region_id: &str) -> Result<Self, CartError> {
        let region = region.ok_or_else(|| CartError::DisplayRegionMissing(region_id.to_string()))?;
        let mut store = Self {
            items: Vec::new(),
            region,
        };
        store.render();
        tracing::debug!(region_id, "Cart store initialized");
        Ok(store)
    }

    /// Add `item`, merging into an existing line with the same name.
    ///
    /// A merged line keeps its original unit price.
    #[instrument(skip(self, item), fields(name = %item.name, quantity = %item.quantity))]
    pub fn add_item(&mut self, item: LineItem) {
        match self.items.iter_mut().find(|line| line.name == item.name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
                tracing::debug!(total_quantity = %existing.quantity, "Merged into existing line");
            }
            None => {
                tracing::debug!(price = %item.price, "Appended new line");
                self.items.push(item);
            }
        }
        self.render();
    }

    /// Remove every item.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.render();
    }

    /// Current items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals for the current items.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_items(&self.items)
    }

    /// The bound display region.
    #[must_use]
    pub const fn region(&self) -> &R {
        &self.region
    }

    fn render(&mut self) {
        match render_summary(&self.summary()) {
            Ok(markup) => self.region.replace_markup(&markup),
            Err(e) => tracing::error!("Failed to render order summary: {e}"),
        }
    }
}
