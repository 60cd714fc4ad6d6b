//! Core types for Bistro Cart.
//!
//! This module provides type-safe wrappers for the catalog concepts the cart
//! works with.

pub mod email;
pub mod id;
pub mod price;
pub mod product;

pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::{Price, PriceError, format_amount};
pub use product::Product;
