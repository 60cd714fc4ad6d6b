//! Unified error handling with Sentry integration.
//!
//! [`CartError`] is what the controller's operations return. Submission
//! failures are additionally reported to the diagnostic sink through
//! [`report_submission_failure`] before they reach the caller.

use thiserror::Error;

use crate::order::{OrderFormError, SubmitError};

/// Widget-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// The delivery form is incomplete or malformed.
    #[error("Invalid order form: {0}")]
    InvalidForm(#[from] OrderFormError),

    /// The order could not be delivered.
    #[error("Order submission failed: {0}")]
    Submission(#[from] SubmitError),

    /// There is nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// The dialog is not showing the cart contents.
    #[error("Cart dialog is not open")]
    DialogNotOpen,
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

/// Send a submission failure to Sentry and the log.
///
/// Returns the Sentry event id, which is nil when no Sentry client is bound.
pub fn report_submission_failure(err: &SubmitError) -> sentry::types::Uuid {
    let event_id = sentry::capture_error(err);
    tracing::error!(
        error = %err,
        sentry_event_id = %event_id,
        "Order submission failed"
    );
    event_id
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of cart
/// interactions leading up to a failed order.
pub fn add_breadcrumb(category: &str, message: &str) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    });
}
