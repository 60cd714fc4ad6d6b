//! Bistro Cart demo - drives the cart widget headlessly.
//!
//! Loads the bundled catalog, fills a cart, clicks through the dialog the way
//! a shopper would, and submits an order to the configured endpoint. The
//! dialog is a [`HeadlessModal`]; run with `RUST_LOG=debug` to see every
//! title, body, and patch it receives.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;
use std::sync::Arc;

use bistro_cart_core::Product;
use bistro_cart_widget::{
    CartBadge, CartController, CounterButton, HeadlessModal, HttpOrderClient, OrderForm,
    WidgetConfig, telemetry,
};

const CATALOG: &str = include_str!("../data/catalog.json");

#[tokio::main]
async fn main() -> ExitCode {
    let mut config = WidgetConfig::from_env().expect("Failed to load configuration");
    config.form_prefill = OrderForm {
        name: "Santa Claus".to_string(),
        email: "john@gmail.com".to_string(),
        tel: "+1234567".to_string(),
        address: "North, Lapland, Snow Home".to_string(),
    };
    let _sentry_guard = telemetry::init(&config);

    let catalog: Vec<Arc<Product>> = match serde_json::from_str::<Vec<Product>>(CATALOG) {
        Ok(products) => products.into_iter().map(Arc::new).collect(),
        Err(e) => {
            tracing::error!(error = %e, "Bundled catalog is malformed");
            return ExitCode::FAILURE;
        }
    };

    let mut cart = CartController::new(
        &config,
        HeadlessModal::new(),
        CartBadge::new(&config),
        HttpOrderClient::new(&config),
    );

    match run(&mut cart, &catalog, &config.form_prefill).await {
        Ok(()) => {
            tracing::info!(state = ?cart.state(), "Demo finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Demo failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    cart: &mut CartController<HeadlessModal, CartBadge, HttpOrderClient>,
    catalog: &[Arc<Product>],
    delivery: &OrderForm,
) -> bistro_cart_widget::Result<()> {
    for product in catalog.iter().take(3) {
        cart.add_product(Arc::clone(product))?;
    }
    if let Some(first) = catalog.first() {
        cart.add_product(Arc::clone(first))?;
    }
    tracing::info!(
        count = cart.icon().count(),
        total = %cart.icon().total_text(),
        "Cart filled"
    );

    cart.on_icon_click()?;
    if let Some(second) = catalog.get(1) {
        cart.on_counter_click(&second.id, CounterButton::Plus)?;
    }
    if let Some(third) = catalog.get(2) {
        cart.on_counter_click(&third.id, CounterButton::Minus)?;
    }

    // The dialog shows the prefilled inputs; submit them unchanged.
    cart.submit_order(delivery).await
}
