//! Bistro Cart Widget - the cart dialog around a [`CartStore`].
//!
//! # Architecture
//!
//! - [`controller::CartController`] owns the store and turns user
//!   interactions into store mutations
//! - [`view::CartView`] renders the dialog with Askama and patches it in place
//! - [`modal::Modal`] and [`bistro_cart_core::CartObserver`] are the seams to
//!   the host page (dialog chrome and icon badge)
//! - [`order::HttpOrderClient`] submits orders with `reqwest`
//!
//! [`CartStore`]: bistro_cart_core::CartStore

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod error;
pub mod icon;
pub mod modal;
pub mod order;
pub mod telemetry;
pub mod view;

pub use config::WidgetConfig;
pub use controller::{CartController, CounterButton, DialogState};
pub use error::{CartError, Result};
pub use icon::CartBadge;
pub use modal::{HeadlessModal, Modal, Patch};
pub use order::{HttpOrderClient, Order, OrderForm, OrderSubmitter, SubmitError};
pub use view::CartView;
