//! Cart store behaviour as seen through the rendered order summary.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use menu_cart_core::{CartError, CartStore, LineItem, Price, Quantity};
use menu_cart_integration_tests::{RecordingRegion, new_cart};

fn item(name: &str, price: f64, quantity: u32) -> LineItem {
    LineItem::new(name, Price::new(price), Quantity::new(quantity).unwrap()).unwrap()
}

fn displayed_items(cart: &CartStore<RecordingRegion>) -> usize {
    cart.region().current().matches("<li>").count()
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_missing_region_is_fatal() {
    let err = CartStore::<RecordingRegion>::initialize(None, "order-summary").unwrap_err();
    assert_eq!(err.to_string(), "Display region with id 'order-summary' not found");
    assert!(matches!(err, CartError::DisplayRegionMissing(_)));
}

#[test]
fn test_initialize_renders_empty_notice() {
    let cart = new_cart();
    assert_eq!(cart.region().renders.len(), 1);
    assert_eq!(cart.region().current(), r#"<p id="order-total">Carrinho vazio.</p>"#);
}

// =============================================================================
// Adding
// =============================================================================

#[test]
fn test_new_name_adds_one_line_and_its_subtotal() {
    let mut cart = new_cart();
    cart.add_item(item("Coxinha", 6.5, 2));
    let before_total = cart.summary().total.amount();
    let before_count = displayed_items(&cart);

    cart.add_item(item("Suco", 8.0, 3));

    assert_eq!(displayed_items(&cart), before_count + 1);
    assert_eq!(cart.summary().total.amount(), before_total + 24.0);
    assert!(cart.region().current().contains("Total: R$ 37.00"));
}

#[test]
fn test_existing_name_increments_quantity() {
    let mut cart = new_cart();
    cart.add_item(item("Coxinha", 6.5, 2));
    cart.add_item(item("Suco", 8.0, 1));
    let before_total = cart.summary().total.amount();

    cart.add_item(item("Coxinha", 50.0, 4));

    assert_eq!(displayed_items(&cart), 2);
    assert_eq!(cart.items()[0].quantity.get(), 6);
    assert_eq!(cart.items()[0].price.amount(), 6.5);
    assert_eq!(cart.summary().total.amount(), before_total + 6.5 * 4.0);
    assert!(cart.region().current().contains("Quantidade: 6<br>"));
}

#[test]
fn test_every_mutation_renders() {
    let mut cart = new_cart();
    cart.add_item(item("Coxinha", 6.5, 1));
    cart.add_item(item("Coxinha", 6.5, 1));
    cart.clear_cart();
    assert_eq!(cart.region().renders.len(), 4);
}

#[test]
fn test_nan_price_propagates_to_total() {
    let mut cart = new_cart();
    cart.add_item(item("Suco", 8.0, 1));
    cart.add_item(LineItem::new("Bolo", Price::parse_display("sob consulta"), Quantity::ONE).unwrap());

    assert!(cart.summary().total.is_nan());
    assert!(cart.region().current().contains("Subtotal: R$ NaN"));
    assert!(cart.region().current().contains("Total: R$ NaN"));
}

// =============================================================================
// Clearing
// =============================================================================

#[test]
fn test_clear_non_empty_cart() {
    let mut cart = new_cart();
    cart.add_item(item("Coxinha", 6.5, 2));
    cart.add_item(item("Suco", 8.0, 1));

    cart.clear_cart();

    assert!(cart.items().is_empty());
    assert_eq!(cart.region().current(), r#"<p id="order-total">Carrinho vazio.</p>"#);
}

#[test]
fn test_clear_empty_cart_still_renders() {
    let mut cart = new_cart();
    cart.clear_cart();
    assert_eq!(cart.region().renders.len(), 2);
    assert!(cart.items().is_empty());
}
