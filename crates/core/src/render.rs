//! Order summary markup.

use askama::Template;

use crate::summary::{OrderSummary, SummaryLine};
use crate::types::Price;

/// Order summary fragment written into the display region.
#[derive(Template)]
#[template(path = "order_summary.html")]
pub struct OrderSummaryTemplate<'a> {
    pub lines: &'a [SummaryLine],
    pub total: Price,
}

impl<'a> From<&'a OrderSummary> for OrderSummaryTemplate<'a> {
    fn from(summary: &'a OrderSummary) -> Self {
        Self {
            lines: &summary.lines,
            total: summary.total,
        }
    }
}

/// Render the summary markup.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_summary(summary: &OrderSummary) -> askama::Result<String> {
    OrderSummaryTemplate::from(summary).render()
}
