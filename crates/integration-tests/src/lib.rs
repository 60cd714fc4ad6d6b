//! Shared fixtures for Bistro Cart integration tests.
//!
//! - [`catalog`] - the demo catalog bundled with the widget
//! - [`OrderEndpoint`] - a local order intake built on axum that answers with
//!   a chosen status and records every form it receives

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Form, Router};
use bistro_cart_core::{Product, ProductId};
use bistro_cart_widget::{
    CartBadge, CartController, HeadlessModal, HttpOrderClient, WidgetConfig,
};
use url::Url;

const CATALOG: &str = include_str!("../../widget/data/catalog.json");

/// Form fields received by an [`OrderEndpoint`].
pub type ReceivedForm = HashMap<String, String>;

/// The controller type the end-to-end tests drive.
pub type TestCart = CartController<HeadlessModal, CartBadge, HttpOrderClient>;

/// Load the bundled catalog.
#[must_use]
pub fn catalog() -> Vec<Arc<Product>> {
    serde_json::from_str::<Vec<Product>>(CATALOG)
        .unwrap()
        .into_iter()
        .map(Arc::new)
        .collect()
}

/// Look up a catalog product by id.
#[must_use]
pub fn product(id: &str) -> Arc<Product> {
    let id = ProductId::new(id);
    catalog().into_iter().find(|p| p.id == id).unwrap()
}

#[derive(Clone)]
struct EndpointState {
    status: StatusCode,
    received: Arc<Mutex<Vec<ReceivedForm>>>,
}

/// A running local order intake.
pub struct OrderEndpoint {
    url: Url,
    received: Arc<Mutex<Vec<ReceivedForm>>>,
}

impl OrderEndpoint {
    /// Bind to an ephemeral port and answer every `POST /orders` with `status`.
    pub async fn spawn(status: StatusCode) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = EndpointState {
            status,
            received: Arc::clone(&received),
        };
        let app = Router::new()
            .route("/orders", post(accept_order))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: Url::parse(&format!("http://{addr}/orders")).unwrap(),
            received,
        }
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Forms received so far.
    #[must_use]
    pub fn received(&self) -> Vec<ReceivedForm> {
        self.received.lock().unwrap().clone()
    }

    /// Widget configuration pointing at this endpoint.
    #[must_use]
    pub fn config(&self) -> WidgetConfig {
        WidgetConfig {
            order_endpoint: self.url.clone(),
            ..WidgetConfig::default()
        }
    }

    /// A controller wired to this endpoint with a headless dialog.
    #[must_use]
    pub fn cart(&self) -> TestCart {
        let config = self.config();
        CartController::new(
            &config,
            HeadlessModal::new(),
            CartBadge::new(&config),
            HttpOrderClient::new(&config),
        )
    }
}

async fn accept_order(
    State(state): State<EndpointState>,
    Form(fields): Form<ReceivedForm>,
) -> StatusCode {
    state.received.lock().unwrap().push(fields);
    state.status
}
