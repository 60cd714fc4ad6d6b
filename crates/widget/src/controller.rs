//! Cart controller: user interactions in, store mutations and view updates out.
//!
//! Dialog lifecycle:
//!
//! ```text
//! Closed --icon click--> Open --order placed--> Confirmation --dialog closed--> Closed
//!                          |
//!                          +--cart emptied by counter clicks--> Closed
//! ```

use std::sync::Arc;

use bistro_cart_core::{CartEvent, CartObserver, CartStore, Product, ProductId};
use tracing::{debug, info, instrument, warn};

use crate::config::WidgetConfig;
use crate::error::{CartError, Result, add_breadcrumb, report_submission_failure};
use crate::modal::Modal;
use crate::order::{OrderForm, OrderSubmitter};
use crate::view::CartView;

/// Message shown in the dialog when the order endpoint rejects an order.
pub const SUBMIT_FAILURE_MESSAGE: &str =
    "We could not place your order. Please check your connection and try again.";

/// Where the cart dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    /// Showing line items and the delivery form.
    Open,
    /// Showing the order confirmation.
    Confirmation,
}

/// Which counter button was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterButton {
    Minus,
    Plus,
}

impl CounterButton {
    /// Count change this button applies.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Minus => -1,
            Self::Plus => 1,
        }
    }

    /// Resolve a delegated click from the clicked element's class list.
    #[must_use]
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| match class {
            "cart-counter__button_minus" => Some(Self::Minus),
            "cart-counter__button_plus" => Some(Self::Plus),
            _ => None,
        })
    }
}

/// Owns the cart and wires it to the dialog, the icon badge, and the order
/// endpoint.
#[derive(Debug)]
pub struct CartController<M, I, S> {
    store: CartStore,
    view: CartView<M>,
    icon: I,
    submitter: S,
    state: DialogState,
}

impl<M, I, S> CartController<M, I, S>
where
    M: Modal,
    I: CartObserver,
    S: OrderSubmitter,
{
    /// Create a controller with an empty cart and a closed dialog.
    #[must_use]
    pub fn new(config: &WidgetConfig, modal: M, icon: I, submitter: S) -> Self {
        Self {
            store: CartStore::new(),
            view: CartView::new(modal, config),
            icon,
            submitter,
            state: DialogState::Closed,
        }
    }

    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    pub const fn state(&self) -> DialogState {
        self.state
    }

    pub const fn view(&self) -> &CartView<M> {
        &self.view
    }

    pub const fn icon(&self) -> &I {
        &self.icon
    }

    /// Add one unit of a catalog product. `None` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the open dialog fails to render the new row.
    pub fn add_product(&mut self, product: impl Into<Option<Arc<Product>>>) -> Result<()> {
        match self.store.add(product) {
            Some(event) => self.publish(&event),
            None => {
                debug!("Ignored add without a product");
                Ok(())
            }
        }
    }

    /// Cart icon clicked: open the dialog on the current contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialog body fails to render.
    pub fn on_icon_click(&mut self) -> Result<()> {
        add_breadcrumb("cart", "Opened cart dialog");
        self.view.open(&self.store)?;
        self.state = DialogState::Open;
        Ok(())
    }

    /// Counter button clicked inside the row for `product_id`.
    ///
    /// A minus click on a row showing 1 removes the row right away, ahead of
    /// the store notification. Clicks outside the open cart dialog and clicks
    /// on unknown rows are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if patching the dialog fails.
    pub fn on_counter_click(&mut self, product_id: &ProductId, button: CounterButton) -> Result<()> {
        if self.state != DialogState::Open {
            debug!(%product_id, "Ignored counter click outside the cart dialog");
            return Ok(());
        }

        if button == CounterButton::Minus
            && self.store.get(product_id).is_some_and(|entry| entry.count() == 1)
        {
            self.view.remove_row(product_id);
        }

        match self.store.adjust_count(product_id, button.delta()) {
            Some(event) => self.publish(&event),
            None => {
                debug!(%product_id, "Ignored counter click for a product not in the cart");
                Ok(())
            }
        }
    }

    /// Order form submitted.
    ///
    /// Marks the submit button as loading for the duration of the request and
    /// always clears it afterwards. On success the dialog shows the
    /// confirmation and the cart is emptied. On failure the error is reported,
    /// shown in the form, and the cart is left as it was.
    ///
    /// # Errors
    ///
    /// - [`CartError::DialogNotOpen`] / [`CartError::EmptyCart`] when there is nothing to submit
    /// - [`CartError::InvalidForm`] when the delivery details are incomplete
    /// - [`CartError::Submission`] when the order endpoint rejects the order
    #[instrument(skip(self, form))]
    pub async fn submit_order(&mut self, form: &OrderForm) -> Result<()> {
        if self.state != DialogState::Open {
            return Err(CartError::DialogNotOpen);
        }
        if self.store.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let order = match form.validate() {
            Ok(order) => order,
            Err(err) => {
                warn!(error = %err, "Rejected order form");
                self.view.show_error(&err.to_string())?;
                return Err(err.into());
            }
        };

        add_breadcrumb("order", "Submitting order");
        self.view.clear_error();
        self.view.set_submit_loading(true);
        let result = self.submitter.submit(&order).await;
        self.view.set_submit_loading(false);

        match result {
            Ok(()) => {
                info!(
                    total_count = self.store.total_count(),
                    total_price = %self.store.total_price(),
                    "Order placed"
                );
                let event = self.store.clear();
                self.icon.on_cart_change(&event);
                self.state = DialogState::Confirmation;
                self.view.show_confirmation()
            }
            Err(err) => {
                report_submission_failure(&err);
                self.view.show_error(SUBMIT_FAILURE_MESSAGE)?;
                Err(err.into())
            }
        }
    }

    /// The host closed the dialog (close button, overlay click, Escape).
    pub fn on_dialog_closed(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Close the dialog from code.
    pub fn close(&mut self) {
        self.view.close();
        self.state = DialogState::Closed;
    }

    fn publish(&mut self, event: &CartEvent) -> Result<()> {
        let patched = if self.state == DialogState::Open {
            let patched = self.view.apply_change(event);
            if event.left_cart_empty() {
                self.state = DialogState::Closed;
            }
            patched
        } else {
            Ok(())
        };

        self.icon.on_cart_change(event);
        patched
    }
}
