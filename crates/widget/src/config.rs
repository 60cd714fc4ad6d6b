//! Widget configuration.
//!
//! Every field has a default, so the widget runs without any environment.
//! Hosts that want overrides can call [`WidgetConfig::from_env`].
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_ORDER_ENDPOINT` - Order intake URL (default: `https://httpbin.org/post`)
//! - `CART_CURRENCY_SYMBOL` - Symbol prefixed to prices (default: `€`)
//! - `CART_PRODUCT_IMAGE_BASE` - Directory of product images (default: `/assets/images/products`)
//! - `CART_ICON_BASE` - Directory of counter icons (default: `/assets/images/icons`)
//! - `CART_DELIVERY_IMAGE` - Image on the order confirmation (default: `/assets/images/delivery.gif`)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use thiserror::Error;
use url::Url;

use crate::order::OrderForm;

/// Default order intake endpoint.
pub const DEFAULT_ORDER_ENDPOINT: &str = "https://httpbin.org/post";
const DEFAULT_CURRENCY_SYMBOL: &str = "€";
const DEFAULT_PRODUCT_IMAGE_BASE: &str = "/assets/images/products";
const DEFAULT_ICON_BASE: &str = "/assets/images/icons";
const DEFAULT_DELIVERY_IMAGE: &str = "/assets/images/delivery.gif";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Where orders are POSTed, form-encoded
    pub order_endpoint: Url,
    /// Symbol prefixed to every displayed amount
    pub currency_symbol: String,
    /// Directory holding product images, without trailing slash
    pub product_image_base: String,
    /// Directory holding the counter icons, without trailing slash
    pub icon_base: String,
    /// Image shown on the order confirmation
    pub delivery_image: String,
    /// Values the delivery inputs start with; empty fields render blank
    pub form_prefill: OrderForm,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            order_endpoint: Url::parse(DEFAULT_ORDER_ENDPOINT)
                .expect("default order endpoint is a valid URL"),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            product_image_base: DEFAULT_PRODUCT_IMAGE_BASE.to_string(),
            icon_base: DEFAULT_ICON_BASE.to_string(),
            delivery_image: DEFAULT_DELIVERY_IMAGE.to_string(),
            form_prefill: OrderForm::default(),
            sentry_dsn: None,
        }
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CART_ORDER_ENDPOINT` is set but not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the order endpoint is not a valid URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let dir = |key: &str, default: &str| {
            get(key).map_or_else(
                || default.to_string(),
                |dir| dir.trim_end_matches('/').to_string(),
            )
        };

        let order_endpoint = get("CART_ORDER_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_ORDER_ENDPOINT.to_string());
        let order_endpoint = Url::parse(&order_endpoint).map_err(|e| {
            ConfigError::InvalidEnvVar("CART_ORDER_ENDPOINT".to_string(), e.to_string())
        })?;

        Ok(Self {
            order_endpoint,
            currency_symbol: get("CART_CURRENCY_SYMBOL")
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
            product_image_base: dir("CART_PRODUCT_IMAGE_BASE", DEFAULT_PRODUCT_IMAGE_BASE),
            icon_base: dir("CART_ICON_BASE", DEFAULT_ICON_BASE),
            delivery_image: get("CART_DELIVERY_IMAGE")
                .unwrap_or_else(|| DEFAULT_DELIVERY_IMAGE.to_string()),
            form_prefill: OrderForm::default(),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}
