//! Reading line items out of menu markup.
//!
//! Each product on the menu page is a block holding a name element and a
//! price element whose text looks like `R$ 12,50`, optionally with a count
//! marker such as `(2 unidades)`. Blocks may also carry the same data as
//! attributes (`data-name`, `data-price`, `data-quantity`), which are read
//! in preference to the display text when present.

use crate::types::{LineItem, LineItemError, Price, Quantity};

pub const DATA_NAME: &str = "data-name";
pub const DATA_PRICE: &str = "data-price";
pub const DATA_QUANTITY: &str = "data-quantity";

/// One product block on the host page.
pub trait ItemBlock {
    /// Text of the name element; `None` if the element is absent.
    fn name_text(&self) -> Option<String>;

    /// Text of the price element; `None` if the element is absent.
    fn price_text(&self) -> Option<String>;

    /// Value of an attribute on the block itself.
    fn data_attribute(&self, name: &str) -> Option<String>;
}

/// Fallbacks and switches for item extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSettings {
    /// Name used when the name element is empty.
    pub fallback_name: String,
    /// Price text used when the price element is empty.
    pub fallback_price: String,
    /// Read `data-*` attributes before scraping display text.
    pub prefer_data_attributes: bool,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            fallback_name: "Item sem nome".to_string(),
            fallback_price: "R$ 0,00".to_string(),
            prefer_data_attributes: true,
        }
    }
}

/// Build the line item a block describes.
///
/// Returns `None` when the block lacks its name or price element, or when
/// the price is negative.
#[must_use]
pub fn extract_line_item(block: &impl ItemBlock, settings: &ExtractSettings) -> Option<LineItem> {
    let item = if settings.prefer_data_attributes {
        from_data_attributes(block)
    } else {
        None
    };

    let item = match item {
        Some(item) => item,
        None => from_display_text(block, settings)?,
    };

    match item {
        Ok(item) => Some(item),
        Err(e) => {
            tracing::warn!("Ignoring menu item: {e}");
            None
        }
    }
}

type Extracted = Result<LineItem, LineItemError>;

fn from_data_attributes(block: &impl ItemBlock) -> Option<Extracted> {
    let name = block.data_attribute(DATA_NAME)?;
    let price = block.data_attribute(DATA_PRICE)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let price = Price::new(price.trim().parse().unwrap_or(f64::NAN));
    let quantity = block
        .data_attribute(DATA_QUANTITY)
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .and_then(Quantity::new)
        .unwrap_or(Quantity::ONE);

    Some(LineItem::new(name, price, quantity))
}

fn from_display_text(block: &impl ItemBlock, settings: &ExtractSettings) -> Option<Extracted> {
    let name_text = block.name_text()?;
    let price_text = block.price_text()?;

    let name = match name_text.trim() {
        "" => settings.fallback_name.as_str(),
        trimmed => trimmed,
    };
    let price_text = if price_text.is_empty() {
        settings.fallback_price.as_str()
    } else {
        price_text.as_str()
    };

    Some(LineItem::new(
        name,
        Price::parse_display(price_text),
        Quantity::parse_marker(price_text),
    ))
}
