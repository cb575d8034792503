//! Order summary computation.
//!
//! Pure function of the item list, kept apart from markup so totals can be
//! checked without a display region.

use crate::types::{LineItem, Price, Quantity};

/// One summary row.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: Quantity,
    pub unit_price: Price,
    pub subtotal: Price,
}

/// Totals for the current cart contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderSummary {
    /// Rows in insertion order.
    pub lines: Vec<SummaryLine>,
    /// Sum of all subtotals.
    pub total: Price,
}

impl OrderSummary {
    /// Compute the summary for `items`.
    #[must_use]
    pub fn from_items(items: &[LineItem]) -> Self {
        let mut total = Price::ZERO;
        let lines = items
            .iter()
            .map(|item| {
                let subtotal = item.subtotal();
                total += subtotal;
                SummaryLine {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.price,
                    subtotal,
                }
            })
            .collect();

        Self { lines, total }
    }

    /// Number of distinct items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
