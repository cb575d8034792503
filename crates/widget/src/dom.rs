//! `web-sys` implementations of the core host traits.

use menu_cart_core::{
    DisplayRegion, ItemBlock, NavigationError, Navigator, Notifier, SessionStorage, StorageError,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Storage, Window};

/// Render a thrown JS value for logs and error messages.
pub fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// The global window.
///
/// # Errors
///
/// Returns an error outside a browser window context.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// The window's document.
///
/// # Errors
///
/// Returns an error when there is no window or document.
pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Order summary container.
#[derive(Debug, Clone)]
pub struct ElementRegion(Element);

impl ElementRegion {
    /// Look up the region by element id.
    #[must_use]
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        document.get_element_by_id(id).map(Self)
    }

    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.0
    }
}

impl DisplayRegion for ElementRegion {
    fn replace_markup(&mut self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

/// A `.menu-item` block and the selectors for its parts.
pub struct DomItemBlock<'a> {
    block: Element,
    name_selector: &'a str,
    price_selector: &'a str,
}

impl<'a> DomItemBlock<'a> {
    /// Find the block enclosing `control`.
    #[must_use]
    pub fn enclosing(
        control: &Element,
        item_selector: &str,
        name_selector: &'a str,
        price_selector: &'a str,
    ) -> Option<Self> {
        let block = match control.closest(item_selector) {
            Ok(block) => block?,
            Err(e) => {
                tracing::warn!("Invalid item selector '{item_selector}': {}", describe(&e));
                return None;
            }
        };
        Some(Self {
            block,
            name_selector,
            price_selector,
        })
    }

    fn text_of(&self, selector: &str) -> Option<String> {
        match self.block.query_selector(selector) {
            Ok(found) => found.map(|el| el.text_content().unwrap_or_default()),
            Err(e) => {
                tracing::warn!("Invalid selector '{selector}': {}", describe(&e));
                None
            }
        }
    }
}

impl ItemBlock for DomItemBlock<'_> {
    fn name_text(&self) -> Option<String> {
        self.text_of(self.name_selector)
    }

    fn price_text(&self) -> Option<String> {
        self.text_of(self.price_selector)
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        self.block.get_attribute(name)
    }
}

/// `window.sessionStorage`, if the browser grants it.
pub struct BrowserSessionStorage(Option<Storage>);

impl BrowserSessionStorage {
    /// Open the window's session storage.
    ///
    /// Access can be denied (e.g. storage disabled by the user); writes then
    /// fail with [`StorageError::Unavailable`].
    #[must_use]
    pub fn open(window: &Window) -> Self {
        match window.session_storage() {
            Ok(storage) => Self(storage),
            Err(e) => {
                tracing::warn!("Session storage access denied: {}", describe(&e));
                Self(None)
            }
        }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.0.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(describe(&e)))
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(describe(&e)))
    }
}

/// `window.location` and `window.alert`.
pub struct BrowserWindow(Window);

impl BrowserWindow {
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self(window)
    }
}

impl Navigator for BrowserWindow {
    fn navigate(&self, location: &str) -> Result<(), NavigationError> {
        self.0
            .location()
            .set_href(location)
            .map_err(|e| NavigationError {
                location: location.to_string(),
                reason: describe(&e),
            })
    }
}

impl Notifier for BrowserWindow {
    fn notify(&self, message: &str) {
        if let Err(e) = self.0.alert_with_message(message) {
            tracing::warn!("Failed to show notice: {}", describe(&e));
        }
    }
}
