//! Bistro Cart Core - cart state and shared types.
//!
//! This crate provides the pieces of the cart widget that carry real
//! invariants and can be tested without any rendering surface:
//! - [`types`] - product ids, prices, products, and email addresses
//! - [`cart`] - the [`CartStore`] state machine and its change events
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients,
//! no templating. The widget crate owns a store and publishes its events to
//! whatever views and badges are interested.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CartChange, CartEntry, CartEvent, CartObserver, CartStore, CartSummary};
pub use types::*;
