//! Cart dialog behavior driven through the controller with the bundled
//! catalog.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::http::StatusCode;
use bistro_cart_core::{CartStore, ProductId};
use bistro_cart_integration_tests::{OrderEndpoint, catalog, product};
use bistro_cart_widget::{CounterButton, DialogState, Modal, Patch};
use rust_decimal::Decimal;

#[test]
fn test_catalog_scenario_totals() {
    let salad = product("laab-kai-chicken-salad");
    let mut store = CartStore::new();

    store.add(Arc::clone(&salad));
    assert_eq!(store.total_price(), Decimal::from(10));
    assert_eq!(store.total_count(), 1);

    store.add(Arc::clone(&salad));
    assert_eq!(store.total_count(), 2);
    assert_eq!(store.total_price(), Decimal::from(20));

    store.adjust_count(&salad.id, -1);
    assert_eq!(store.total_count(), 1);

    store.adjust_count(&salad.id, -1);
    assert!(store.is_empty());
}

#[test]
fn test_totals_across_whole_catalog() {
    let mut store = CartStore::new();
    for (n, product) in catalog().iter().enumerate() {
        for _ in 0..=n {
            store.add(Arc::clone(product));
        }
    }

    // 10 + 2 * 9.5 + 3 * 7 + 4 * 12.5
    assert_eq!(store.total_count(), 10);
    assert_eq!(store.total_price(), Decimal::from(100));
}

#[tokio::test]
async fn test_dialog_patches_follow_counter_clicks() {
    let endpoint = OrderEndpoint::spawn(StatusCode::OK).await;
    let mut cart = endpoint.cart();
    let soup = product("tom-yam-kai");
    let curry = product("red-curry-veggies");

    cart.add_product(Arc::clone(&soup)).unwrap();
    cart.add_product(Arc::clone(&curry)).unwrap();
    cart.on_icon_click().unwrap();

    let body = cart.view().modal().body().to_string();
    assert!(body.contains("€7.00"));
    assert!(body.contains("€12.50"));
    assert!(body.contains("€19.50"));

    cart.on_counter_click(&curry.id, CounterButton::Plus).unwrap();
    assert!(cart.view().modal().patches().contains(&Patch::SetRowPrice {
        product_id: curry.id.clone(),
        text: "€25.00".to_string(),
    }));
    assert!(cart.view().modal().patches().contains(&Patch::SetTotal {
        text: "€32.00".to_string(),
    }));

    cart.on_counter_click(&soup.id, CounterButton::Minus).unwrap();
    assert!(cart.view().modal().patches().contains(&Patch::RemoveRow {
        product_id: soup.id.clone(),
    }));
    assert_eq!(cart.state(), DialogState::Open);
    assert_eq!(cart.icon().count(), 2);

    cart.on_counter_click(&curry.id, CounterButton::Minus).unwrap();
    cart.on_counter_click(&curry.id, CounterButton::Minus).unwrap();
    assert!(cart.store().is_empty());
    assert_eq!(cart.state(), DialogState::Closed);
    assert!(!cart.view().modal().is_open());

    // Clicks after the dialog closed change nothing.
    cart.on_counter_click(&ProductId::new("tom-yam-kai"), CounterButton::Plus)
        .unwrap();
    assert!(cart.store().is_empty());
    assert!(endpoint.received().is_empty());
}

#[tokio::test]
async fn test_reopen_after_confirmation_shows_empty_cart() {
    let endpoint = OrderEndpoint::spawn(StatusCode::OK).await;
    let mut cart = endpoint.cart();

    cart.add_product(product("tom-yam-kai")).unwrap();
    cart.on_icon_click().unwrap();
    cart.submit_order(&bistro_cart_widget::OrderForm {
        name: "Santa Claus".to_string(),
        email: "john@gmail.com".to_string(),
        tel: "+1234567".to_string(),
        address: "North, Lapland, Snow Home".to_string(),
    })
    .await
    .unwrap();
    cart.on_dialog_closed();

    cart.on_icon_click().unwrap();
    let body = cart.view().modal().body();
    assert_eq!(cart.view().modal().title(), "Your order");
    assert!(!body.contains(r#"class="cart-product""#));
    assert!(body.contains("€0.00"));
}
