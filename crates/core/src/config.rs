//! Widget configuration.
//!
//! Every value has a default matching the menu page markup, so a page with
//! no configuration works unchanged. A page may override any subset by
//! embedding a JSON object, e.g.
//!
//! ```html
//! <script type="application/json" id="menu-cart-config">
//!   {"checkout_location": "checkout.html", "log_level": "debug"}
//! </script>
//! ```
//!
//! # Keys
//!
//! - `summary_region_id` - Order summary container (default: `order-summary`)
//! - `item_selector` - Product block (default: `.menu-item`)
//! - `add_control_selector` - Add-to-cart buttons (default: `.menu-item button`)
//! - `name_selector` - Name element inside a block (default: `h3`)
//! - `price_selector` - Price element inside a block (default: `span`)
//! - `clear_control_id` - Clear cart button (default: `clear-cart`)
//! - `place_order_control_id` - Place order button (default: `place-order`)
//! - `storage_key` - Session storage key (default: `cartItems`)
//! - `checkout_location` - Redirect target (default: `paginas/pagamento.html`)
//! - `empty_cart_notice` - Alert text for an empty checkout
//! - `fallback_name` - Name for blocks with an empty name element
//! - `fallback_price` - Price text for blocks with an empty price element
//! - `prefer_data_attributes` - Read `data-*` attributes first (default: true)
//! - `log_level` - Tracing filter directive (default: `info`)

use serde::Deserialize;
use thiserror::Error;

use crate::checkout::CheckoutSettings;
use crate::extract::ExtractSettings;
use crate::handoff::DEFAULT_STORAGE_KEY;

/// Element id of the embedded JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "menu-cart-config";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Configuration value {0} must not be blank")]
    Blank(&'static str),
}

/// Menu cart widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub summary_region_id: String,
    pub item_selector: String,
    pub add_control_selector: String,
    pub name_selector: String,
    pub price_selector: String,
    pub clear_control_id: String,
    pub place_order_control_id: String,
    pub storage_key: String,
    pub checkout_location: String,
    pub empty_cart_notice: String,
    pub fallback_name: String,
    pub fallback_price: String,
    pub prefer_data_attributes: bool,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let extract = ExtractSettings::default();
        Self {
            summary_region_id: "order-summary".to_string(),
            item_selector: ".menu-item".to_string(),
            add_control_selector: ".menu-item button".to_string(),
            name_selector: "h3".to_string(),
            price_selector: "span".to_string(),
            clear_control_id: "clear-cart".to_string(),
            place_order_control_id: "place-order".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            checkout_location: "paginas/pagamento.html".to_string(),
            empty_cart_notice: "Seu carrinho está vazio!".to_string(),
            fallback_name: extract.fallback_name,
            fallback_price: extract.fallback_price,
            prefer_data_attributes: extract.prefer_data_attributes,
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from a JSON override, defaulting missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown key, or
    /// blanks out a required identifier.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every identifier the widget looks up is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Blank`] naming the first blank value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("summary_region_id", &self.summary_region_id),
            ("item_selector", &self.item_selector),
            ("add_control_selector", &self.add_control_selector),
            ("name_selector", &self.name_selector),
            ("price_selector", &self.price_selector),
            ("clear_control_id", &self.clear_control_id),
            ("place_order_control_id", &self.place_order_control_id),
            ("storage_key", &self.storage_key),
            ("checkout_location", &self.checkout_location),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(ConfigError::Blank(*key)),
            None => Ok(()),
        }
    }

    /// Extraction settings for add-to-cart clicks.
    #[must_use]
    pub fn extract_settings(&self) -> ExtractSettings {
        ExtractSettings {
            fallback_name: self.fallback_name.clone(),
            fallback_price: self.fallback_price.clone(),
            prefer_data_attributes: self.prefer_data_attributes,
        }
    }

    /// Settings for the place-order hand-off.
    #[must_use]
    pub fn checkout_settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            storage_key: self.storage_key.clone(),
            location: self.checkout_location.clone(),
            empty_cart_notice: self.empty_cart_notice.clone(),
        }
    }
}
