//! Browser tests for the menu cart widget.
//!
//! Run with `wasm-pack test --headless --firefox crates/widget`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::float_cmp)]

use menu_cart_core::handoff::{self, DEFAULT_STORAGE_KEY};
use menu_cart_core::{SessionStorage, WidgetConfig};
use menu_cart_widget::dom::{self, BrowserSessionStorage};
use menu_cart_widget::{mount, mount_with_config, start};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

const MENU: &str = r##"
<section>
  <div class="menu-item" id="coxinha">
    <h3> Coxinha </h3>
    <span>(2 unidades) R$ 10,00</span>
    <button>Adicionar</button>
  </div>
  <div class="menu-item" id="suco">
    <h3>Suco</h3>
    <span>R$ 1.208,50</span>
    <button>Adicionar</button>
  </div>
  <div class="menu-item" id="bolo" data-name="Bolo" data-price="12.00" data-quantity="3">
    <h3>Bolo do dia</h3>
    <span>consulte</span>
    <button>Adicionar</button>
  </div>
  <div class="menu-item" id="broken">
    <h3>Sem preço</h3>
    <button>Adicionar</button>
  </div>
</section>
<div id="order-summary"></div>
<a href="#" id="clear-cart">Limpar</a>
"##;

fn load(markup: &str) {
    dom::document().unwrap().body().unwrap().set_inner_html(markup);
}

fn click(selector: &str) {
    dom::document()
        .unwrap()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn summary_html() -> String {
    dom::document()
        .unwrap()
        .get_element_by_id("order-summary")
        .unwrap()
        .inner_html()
}

#[wasm_bindgen_test]
fn mount_without_summary_region_fails() {
    load("<div class=\"menu-item\"><h3>Suco</h3><span>R$ 1,00</span><button></button></div>");
    assert!(mount(WidgetConfig::default()).is_err());
}

#[wasm_bindgen_test]
fn mount_renders_empty_cart() {
    load(MENU);
    let binder = mount(WidgetConfig::default()).unwrap();
    assert!(summary_html().contains("Carrinho vazio."));
    assert_eq!(binder.cart().borrow().region().element().id(), "order-summary");
}

#[wasm_bindgen_test]
fn add_click_scrapes_item_and_merges_by_name() {
    load(MENU);
    let binder = mount(WidgetConfig::default()).unwrap();

    click("#suco button");
    click("#suco button");

    let cart = binder.cart();
    let cart = cart.borrow();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].name, "Suco");
    assert_eq!(cart.items()[0].price.amount(), 1208.5);
    assert_eq!(cart.items()[0].quantity.get(), 2);
    assert!(summary_html().contains("Total: R$ 2417.00"));
}

#[wasm_bindgen_test]
fn add_click_reads_quantity_marker() {
    load(MENU);
    let binder = mount(WidgetConfig::default()).unwrap();

    click("#coxinha button");

    let cart = binder.cart();
    let cart = cart.borrow();
    assert_eq!(cart.items()[0].name, "Coxinha");
    assert_eq!(cart.items()[0].quantity.get(), 2);
}

#[wasm_bindgen_test]
fn add_click_prefers_data_attributes() {
    load(MENU);
    let binder = mount(WidgetConfig::default()).unwrap();

    click("#bolo button");

    let cart = binder.cart();
    let cart = cart.borrow();
    assert_eq!(cart.items()[0].name, "Bolo");
    assert_eq!(cart.items()[0].price.amount(), 12.0);
    assert_eq!(cart.items()[0].quantity.get(), 3);
}

#[wasm_bindgen_test]
fn add_click_without_price_element_is_ignored() {
    load(MENU);
    let binder = mount(WidgetConfig::default()).unwrap();

    click("#broken button");

    assert!(binder.cart().borrow().is_empty());
    assert!(summary_html().contains("Carrinho vazio."));
}

#[wasm_bindgen_test]
fn clear_click_empties_cart() {
    load(MENU);
    let binder = mount(WidgetConfig::default()).unwrap();

    click("#suco button");
    click("#clear-cart");

    assert!(binder.cart().borrow().is_empty());
    assert!(summary_html().contains("Carrinho vazio."));
}

#[wasm_bindgen_test]
fn configured_identifiers_are_used() {
    load(
        r#"<article class="prato"><h4>Pastel</h4><em>R$ 7,00</em><button>+</button></article>
           <div id="resumo"></div>"#,
    );
    let config = WidgetConfig::from_json(
        r#"{"summary_region_id": "resumo", "item_selector": ".prato",
            "add_control_selector": ".prato button", "name_selector": "h4",
            "price_selector": "em"}"#,
    )
    .unwrap();
    let binder = mount(config).unwrap();
    assert_eq!(binder.config().summary_region_id, "resumo");

    click(".prato button");

    assert_eq!(binder.cart().borrow().items()[0].name, "Pastel");
    assert!(
        dom::document()
            .unwrap()
            .get_element_by_id("resumo")
            .unwrap()
            .inner_html()
            .contains("Total: R$ 7.00")
    );
}

#[wasm_bindgen_test]
fn session_storage_holds_handoff() {
    let window = dom::window().unwrap();
    let mut storage = BrowserSessionStorage::open(&window);
    let items = handoff::decode(r#"[{"name":"Suco","price":8.5,"quantity":2}]"#).unwrap();

    storage
        .set_item(DEFAULT_STORAGE_KEY, &handoff::encode(&items).unwrap())
        .unwrap();
    let loaded = handoff::load_items(&storage, DEFAULT_STORAGE_KEY)
        .unwrap()
        .unwrap();

    assert_eq!(loaded, items);
}

#[wasm_bindgen_test]
fn place_order_click_stores_cart_and_redirects() {
    let window = dom::window().unwrap();
    window.location().set_hash("").unwrap();
    load(&format!("{MENU}<button id=\"place-order\">Pedir</button>"));
    let config = WidgetConfig::from_json(r##"{"checkout_location": "#pagamento"}"##).unwrap();
    let binder = mount(config).unwrap();

    click("#suco button");
    click("#bolo button");
    click("#place-order");

    let storage = BrowserSessionStorage::open(&window);
    let stored = handoff::load_items(&storage, DEFAULT_STORAGE_KEY)
        .unwrap()
        .unwrap();
    assert_eq!(stored, binder.cart().borrow().items());
    assert_eq!(stored.len(), 2);
    assert_eq!(window.location().hash().unwrap(), "#pagamento");
}

#[wasm_bindgen_test]
fn start_reads_embedded_config() {
    load(
        r#"<script type="application/json" id="menu-cart-config">{"summary_region_id": "resumo"}</script>
           <div id="resumo"></div>"#,
    );

    start().unwrap();

    assert!(
        dom::document()
            .unwrap()
            .get_element_by_id("resumo")
            .unwrap()
            .inner_html()
            .contains("Carrinho vazio.")
    );
}

#[wasm_bindgen_test]
fn start_rejects_invalid_embedded_config() {
    load(
        r#"<script type="application/json" id="menu-cart-config">{"storage_key": ""}</script>
           <div id="order-summary"></div>"#,
    );

    assert!(start().is_err());
    assert!(summary_html().is_empty());
}

#[wasm_bindgen_test]
fn mount_with_config_rejects_invalid_json() {
    load(MENU);

    assert!(mount_with_config("{not json").is_err());
    assert!(mount_with_config(r#"{"summary_id": "x"}"#).is_err());
    assert!(summary_html().is_empty());
}

#[wasm_bindgen_test]
fn mount_with_config_binds_page() {
    load(r#"<div id="resumo"></div>"#);

    mount_with_config(r#"{"summary_region_id": "resumo"}"#).unwrap();

    assert!(
        dom::document()
            .unwrap()
            .get_element_by_id("resumo")
            .unwrap()
            .inner_html()
            .contains("Carrinho vazio.")
    );
}
