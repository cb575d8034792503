//! Menu Cart Widget - Browser binding for the menu cart.
//!
//! Load the generated module and call `start()` once it is initialised:
//!
//! ```js
//! import init, { start } from "./pkg/menu_cart_widget.js";
//! await init();
//! start();
//! ```
//!
//! `start()` reads optional overrides from the
//! `<script type="application/json" id="menu-cart-config">` element, waits for
//! `DOMContentLoaded` if the document is still loading, then binds the page.
//! `mountWithConfig(json)` does the same with an explicit JSON override.
//!
//! # Architecture
//!
//! - [`dom`] implements the `menu-cart-core` host traits over `web-sys`
//! - [`binder`] attaches click handlers that drive the cart store
//! - [`logging`] routes `tracing` output to the browser console

// `#[wasm_bindgen]` exports expand to unsafe FFI shims.
#![allow(unsafe_code)]

pub mod binder;
pub mod dom;
pub mod logging;

use menu_cart_core::WidgetConfig;
use menu_cart_core::config::CONFIG_ELEMENT_ID;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub use binder::{PageBinder, SharedCart};

/// Mount the widget using the page's embedded configuration.
///
/// # Errors
///
/// Returns an error if the embedded configuration is invalid, or if the page
/// is already loaded and mounting fails.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = dom::window()?;
    let document = dom::document()?;
    let config = page_config(&document)?;
    logging::init(&config.log_level);
    when_ready(window, document, config)
}

/// Mount the widget with a JSON configuration override.
///
/// # Errors
///
/// Returns an error if `json` is not a valid configuration, or if the page
/// is already loaded and mounting fails.
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = parse_config(json)?;
    logging::init(&config.log_level);
    when_ready(dom::window()?, dom::document()?, config)
}

/// Mount immediately, returning the binder for further inspection.
///
/// # Errors
///
/// Returns an error if the order summary container is missing.
pub fn mount(config: WidgetConfig) -> Result<PageBinder, JsValue> {
    PageBinder::mount(dom::window()?, config)
}

fn parse_config(json: &str) -> Result<WidgetConfig, JsValue> {
    WidgetConfig::from_json(json).map_err(|e| {
        logging::init("info");
        tracing::error!("Invalid menu cart configuration: {e}");
        binder::to_js_error(e)
    })
}

fn page_config(document: &Document) -> Result<WidgetConfig, JsValue> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => parse_config(&json),
        None => Ok(WidgetConfig::default()),
    }
}

fn when_ready(window: Window, document: Document, config: WidgetConfig) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        return PageBinder::mount(window, config).map(drop);
    }

    tracing::debug!("Document still loading, deferring mount");
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = PageBinder::mount(window, config) {
            wasm_bindgen::throw_val(e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}
