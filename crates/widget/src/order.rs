//! Order form validation and submission.
//!
//! The dialog's delivery form is collected into an [`OrderForm`], validated
//! into an [`Order`], and handed to an [`OrderSubmitter`]. The production
//! submitter, [`HttpOrderClient`], POSTs the fields form-encoded and treats
//! HTTP 200 as the only success status.

use bistro_cart_core::{Email, EmailError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::WidgetConfig;

/// Raw delivery details as typed into the form.
///
/// Field names match the `name` attributes of the rendered inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub tel: String,
    pub address: String,
}

/// Reasons an [`OrderForm`] cannot become an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderFormError {
    /// A required field is blank.
    #[error("{0} is required")]
    Missing(&'static str),

    /// The email field does not hold an address.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
}

impl OrderForm {
    /// Check every required field and parse the email.
    ///
    /// # Errors
    ///
    /// Returns the first [`OrderFormError`] found, checking fields in form order.
    pub fn validate(&self) -> Result<Order, OrderFormError> {
        let name = required("name", &self.name)?;
        let email = Email::parse(&self.email).map_err(|err| match err {
            EmailError::Empty => OrderFormError::Missing("email"),
            other => OrderFormError::Email(other),
        })?;
        let tel = required("tel", &self.tel)?;
        let address = required("address", &self.address)?;

        Ok(Order {
            name,
            email,
            tel,
            address,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, OrderFormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(OrderFormError::Missing(field));
    }
    Ok(value.to_string())
}

/// Validated delivery details, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    name: String,
    email: Email,
    tel: String,
    address: String,
}

impl Order {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn tel(&self) -> &str {
        &self.tel
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Errors that can occur when submitting an order.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request could not be sent or the response not read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with something other than 200.
    #[error("order endpoint responded with status {0}")]
    Status(StatusCode),
}

/// Network collaborator that delivers an order.
///
/// A single request per call, no retries and no timeout of its own.
pub trait OrderSubmitter {
    /// Deliver `order`; `Ok(())` means the intake accepted it.
    fn submit(&self, order: &Order) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// Submits orders to an HTTP endpoint as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpOrderClient {
    /// Create a client for the configured order endpoint.
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config.order_endpoint.clone())
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// The endpoint orders are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl OrderSubmitter for HttpOrderClient {
    #[instrument(skip(self, order), fields(endpoint = %self.endpoint))]
    async fn submit(&self, order: &Order) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(order)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Order endpoint responded");

        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled() -> OrderForm {
        OrderForm {
            name: "Santa Claus".to_string(),
            email: "john@gmail.com".to_string(),
            tel: "+1234567".to_string(),
            address: "North, Lapland, Snow Home".to_string(),
        }
    }

    #[test]
    fn test_validate_filled_form() {
        let order = filled().validate().unwrap();
        assert_eq!(order.name(), "Santa Claus");
        assert_eq!(order.email().as_str(), "john@gmail.com");
        assert_eq!(order.tel(), "+1234567");
        assert_eq!(order.address(), "North, Lapland, Snow Home");
    }

    #[test]
    fn test_validate_trims_fields() {
        let form = OrderForm {
            name: "  Santa ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate().unwrap().name(), "Santa");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let form = OrderForm {
            name: String::new(),
            address: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(OrderFormError::Missing("name")));

        let form = OrderForm {
            email: " ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(OrderFormError::Missing("email")));

        let form = OrderForm {
            address: "\t".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(OrderFormError::Missing("address")));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let form = OrderForm {
            email: "santa-at-lapland".to_string(),
            ..filled()
        };
        assert_eq!(
            form.validate(),
            Err(OrderFormError::Email(EmailError::AtSymbol))
        );
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = WidgetConfig::default();
        let client = HttpOrderClient::new(&config);
        assert_eq!(client.endpoint(), &config.order_endpoint);
    }
}
