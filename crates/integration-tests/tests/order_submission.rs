//! End-to-end order submission against a local order endpoint.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use bistro_cart_integration_tests::{OrderEndpoint, product};
use bistro_cart_widget::order::OrderSubmitter;
use bistro_cart_widget::{
    CartError, DialogState, HttpOrderClient, OrderForm, Patch, SubmitError, WidgetConfig,
};

fn delivery() -> OrderForm {
    OrderForm {
        name: "Santa Claus".to_string(),
        email: "john@gmail.com".to_string(),
        tel: "+1234567".to_string(),
        address: "North, Lapland, Snow Home".to_string(),
    }
}

#[tokio::test]
async fn test_client_posts_form_encoded_fields() {
    let endpoint = OrderEndpoint::spawn(StatusCode::OK).await;
    let client = HttpOrderClient::new(&endpoint.config());

    let order = delivery().validate().unwrap();
    client.submit(&order).await.unwrap();

    let received = endpoint.received();
    assert_eq!(received.len(), 1);
    let fields = &received[0];
    assert_eq!(fields["name"], "Santa Claus");
    assert_eq!(fields["email"], "john@gmail.com");
    assert_eq!(fields["tel"], "+1234567");
    assert_eq!(fields["address"], "North, Lapland, Snow Home");
}

#[tokio::test]
async fn test_client_treats_other_success_codes_as_failure() {
    let endpoint = OrderEndpoint::spawn(StatusCode::CREATED).await;
    let client = HttpOrderClient::new(&endpoint.config());

    let err = client
        .submit(&delivery().validate().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Status(StatusCode::CREATED)));
}

#[tokio::test]
async fn test_client_reports_transport_failure() {
    // Bind and drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = WidgetConfig {
        order_endpoint: format!("http://{addr}/orders").parse().unwrap(),
        ..WidgetConfig::default()
    };
    let client = HttpOrderClient::new(&config);

    let err = client
        .submit(&delivery().validate().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Http(_)));
}

#[tokio::test]
async fn test_checkout_flow_success() {
    let endpoint = OrderEndpoint::spawn(StatusCode::OK).await;
    let mut cart = endpoint.cart();

    cart.add_product(product("laab-kai-chicken-salad")).unwrap();
    cart.add_product(product("tom-yam-kai")).unwrap();
    cart.on_icon_click().unwrap();
    cart.submit_order(&delivery()).await.unwrap();

    assert_eq!(cart.state(), DialogState::Confirmation);
    assert!(cart.store().is_empty());
    assert_eq!(cart.icon().count(), 0);
    assert!(!cart.icon().is_visible());
    assert_eq!(cart.view().modal().title(), "Success!");
    assert_eq!(endpoint.received().len(), 1);
}

#[tokio::test]
async fn test_checkout_flow_failure_keeps_cart_and_clears_loading() {
    let endpoint = OrderEndpoint::spawn(StatusCode::SERVICE_UNAVAILABLE).await;
    let mut cart = endpoint.cart();

    cart.add_product(product("som-tam-papaya-salad")).unwrap();
    cart.on_icon_click().unwrap();
    let err = cart.submit_order(&delivery()).await.unwrap_err();

    assert!(matches!(
        err,
        CartError::Submission(SubmitError::Status(StatusCode::SERVICE_UNAVAILABLE))
    ));
    assert_eq!(cart.state(), DialogState::Open);
    assert_eq!(cart.store().total_count(), 1);
    assert_eq!(cart.view().modal().title(), "Your order");

    let patches = cart.view().modal().patches();
    assert_eq!(
        patches.iter().rev().find(|p| matches!(p, Patch::SetSubmitLoading(_))),
        Some(&Patch::SetSubmitLoading(false))
    );
    assert!(patches.iter().any(|p| matches!(p, Patch::ShowError { .. })));
}

#[tokio::test]
async fn test_retry_after_failure_uses_same_cart() {
    let failing = OrderEndpoint::spawn(StatusCode::BAD_GATEWAY).await;
    let mut cart = failing.cart();
    cart.add_product(product("tom-yam-kai")).unwrap();
    cart.on_icon_click().unwrap();

    assert!(cart.submit_order(&delivery()).await.is_err());
    assert!(cart.submit_order(&delivery()).await.is_err());
    assert_eq!(failing.received().len(), 2);
    assert_eq!(cart.store().total_count(), 1);
}
