//! Page binder: wires menu page controls to the cart store.
//!
//! Controls are bound once, at mount time. Controls added to the page
//! afterwards are not picked up.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use menu_cart_core::{CartStore, CheckoutOutcome, WidgetConfig, extract_line_item, place_order};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, Window};

use crate::dom::{BrowserSessionStorage, BrowserWindow, DomItemBlock, ElementRegion};

/// The page's cart, shared by every bound handler.
pub type SharedCart = Rc<RefCell<CartStore<ElementRegion>>>;

/// Convert an error into a thrown JS `Error`.
pub fn to_js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// A mounted cart widget.
pub struct PageBinder {
    window: Window,
    document: Document,
    config: Rc<WidgetConfig>,
    cart: SharedCart,
}

impl PageBinder {
    /// Build the cart store and bind every control on the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the order summary container is missing, or a
    /// configured selector is not valid CSS.
    pub fn mount(window: Window, config: WidgetConfig) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;

        let region = ElementRegion::find(&document, &config.summary_region_id);
        let cart = CartStore::initialize(region, &config.summary_region_id).map_err(|e| {
            tracing::error!("Cart initialization failed: {e}");
            to_js_error(e)
        })?;

        let binder = Self {
            window,
            document,
            config: Rc::new(config),
            cart: Rc::new(RefCell::new(cart)),
        };

        let add_controls = binder.bind_add_controls()?;
        let clear_control = binder.bind_clear_control()?;
        let place_order_control = binder.bind_place_order_control()?;
        tracing::info!(
            add_controls,
            clear_control,
            place_order_control,
            "Menu cart mounted"
        );

        Ok(binder)
    }

    /// The shared cart store.
    #[must_use]
    pub fn cart(&self) -> SharedCart {
        Rc::clone(&self.cart)
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    fn bind_add_controls(&self) -> Result<u32, JsValue> {
        let controls = self
            .document
            .query_selector_all(&self.config.add_control_selector)?;

        let mut bound = 0;
        for index in 0..controls.length() {
            let Some(control) = controls
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            self.bind_add_control(control)?;
            bound += 1;
        }
        Ok(bound)
    }

    fn bind_add_control(&self, control: Element) -> Result<(), JsValue> {
        let cart = Rc::clone(&self.cart);
        let config = Rc::clone(&self.config);
        let extract = config.extract_settings();
        let target = control.clone();

        let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            event.prevent_default();

            let Some(block) = DomItemBlock::enclosing(
                &control,
                &config.item_selector,
                &config.name_selector,
                &config.price_selector,
            ) else {
                tracing::debug!("Add control is not inside an item block");
                return;
            };

            match extract_line_item(&block, &extract) {
                Some(item) => cart.borrow_mut().add_item(item),
                None => tracing::debug!("Item block has no usable name or price"),
            }
        }));
        target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn bind_clear_control(&self) -> Result<bool, JsValue> {
        let Some(control) = self.document.get_element_by_id(&self.config.clear_control_id) else {
            tracing::debug!(id = %self.config.clear_control_id, "No clear control on page");
            return Ok(false);
        };

        let cart = Rc::clone(&self.cart);
        let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            cart.borrow_mut().clear_cart();
        }));
        control.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(true)
    }

    fn bind_place_order_control(&self) -> Result<bool, JsValue> {
        let Some(control) = self
            .document
            .get_element_by_id(&self.config.place_order_control_id)
        else {
            tracing::debug!(id = %self.config.place_order_control_id, "No place order control on page");
            return Ok(false);
        };

        let cart = Rc::clone(&self.cart);
        let settings = self.config.checkout_settings();
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            event.prevent_default();

            let mut storage = BrowserSessionStorage::open(&window);
            let browser = BrowserWindow::new(window.clone());
            let store = cart.borrow();
            match place_order(&*store, &mut storage, &browser, &browser, &settings) {
                Ok(CheckoutOutcome::EmptyCart) => {}
                Ok(CheckoutOutcome::Redirected { items }) => {
                    tracing::debug!(items = items.len(), "Redirecting to checkout");
                }
                Err(e) => tracing::error!("Checkout failed: {e}"),
            }
        }));
        control.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(true)
    }
}
