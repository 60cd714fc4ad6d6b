//! Cart dialog rendering and in-place updates.
//!
//! [`CartView`] renders the order list (rows plus delivery form) once when
//! the dialog opens, then turns every [`CartEvent`] into [`Patch`]es so the
//! open dialog keeps its focus and scroll position.

use askama::Template;
use bistro_cart_core::{CartChange, CartEntry, CartEvent, CartStore, ProductId, format_amount};
use rust_decimal::Decimal;

use crate::config::WidgetConfig;
use crate::error::Result;
use crate::modal::{Modal, Patch};
use crate::order::OrderForm;

/// Title of the dialog while it shows the cart.
pub const ORDER_TITLE: &str = "Your order";
/// Title of the dialog after a successful order.
pub const SUCCESS_TITLE: &str = "Success!";

/// Row display data for templates.
#[derive(Debug, Clone)]
pub struct CartRowView {
    pub id: String,
    pub name: String,
    pub image_src: String,
    pub count: u32,
    pub line_price: String,
}

/// Single cart row fragment.
#[derive(Template)]
#[template(path = "partials/cart_row.html")]
struct CartRowTemplate<'a> {
    row: &'a CartRowView,
    icon_base: &'a str,
}

/// Whole dialog body: rows followed by the delivery form.
#[derive(Template)]
#[template(path = "cart/order_list.html")]
struct OrderListTemplate<'a> {
    rows: Vec<CartRowView>,
    icon_base: &'a str,
    total: String,
    prefill: &'a OrderForm,
}

#[derive(Template)]
#[template(path = "partials/order_confirmation.html")]
struct OrderConfirmationTemplate<'a> {
    delivery_image: &'a str,
}

#[derive(Template)]
#[template(path = "partials/order_error.html")]
struct OrderErrorTemplate<'a> {
    message: &'a str,
}

/// Renders the cart into a [`Modal`] and keeps it in sync.
#[derive(Debug)]
pub struct CartView<M> {
    modal: M,
    currency_symbol: String,
    product_image_base: String,
    icon_base: String,
    delivery_image: String,
    form_prefill: OrderForm,
    /// Rows already dropped by [`CartView::remove_row`] whose store removal
    /// has not been applied yet.
    removed_rows: Vec<ProductId>,
}

impl<M: Modal> CartView<M> {
    #[must_use]
    pub fn new(modal: M, config: &WidgetConfig) -> Self {
        Self {
            modal,
            currency_symbol: config.currency_symbol.clone(),
            product_image_base: config.product_image_base.clone(),
            icon_base: config.icon_base.clone(),
            delivery_image: config.delivery_image.clone(),
            form_prefill: config.form_prefill.clone(),
            removed_rows: Vec::new(),
        }
    }

    pub const fn modal(&self) -> &M {
        &self.modal
    }

    pub const fn modal_mut(&mut self) -> &mut M {
        &mut self.modal
    }

    /// Render the dialog body for the current store contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_order_list(&self, store: &CartStore) -> Result<String> {
        let template = OrderListTemplate {
            rows: store.entries().iter().map(|entry| self.row(entry)).collect(),
            icon_base: &self.icon_base,
            total: self.money(store.total_price()),
            prefill: &self.form_prefill,
        };
        Ok(template.render()?)
    }

    /// Render one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_row(&self, entry: &CartEntry) -> Result<String> {
        let row = self.row(entry);
        let template = CartRowTemplate {
            row: &row,
            icon_base: &self.icon_base,
        };
        Ok(template.render()?)
    }

    /// Show the dialog with the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the body fails to render; the dialog is left untouched.
    pub fn open(&mut self, store: &CartStore) -> Result<()> {
        let body = self.render_order_list(store)?;
        self.removed_rows.clear();
        self.modal.set_title(ORDER_TITLE);
        self.modal.set_body(body);
        self.modal.open();
        Ok(())
    }

    /// Patch the open dialog for one store change.
    ///
    /// Does nothing while the dialog is closed. Closes the dialog when the
    /// change left the cart empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a newly added row fails to render.
    pub fn apply_change(&mut self, event: &CartEvent) -> Result<()> {
        if !self.modal.is_open() {
            return Ok(());
        }

        match &event.change {
            CartChange::Added(entry) => {
                let html = self.render_row(entry)?;
                self.modal.apply(Patch::InsertRow { html });
            }
            CartChange::Updated(entry) => {
                self.modal.apply(Patch::SetRowCount {
                    product_id: entry.id().clone(),
                    count: entry.count(),
                });
                self.modal.apply(Patch::SetRowPrice {
                    product_id: entry.id().clone(),
                    text: self.money(entry.line_total()),
                });
            }
            CartChange::Removed(entry) => {
                if let Some(index) = self.removed_rows.iter().position(|id| id == entry.id()) {
                    self.removed_rows.swap_remove(index);
                } else {
                    self.modal.apply(Patch::RemoveRow {
                        product_id: entry.id().clone(),
                    });
                }
            }
            CartChange::Cleared => {}
        }

        self.modal.apply(Patch::SetTotal {
            text: self.money(event.summary.total_price),
        });

        if event.left_cart_empty() {
            self.modal.close();
        }
        Ok(())
    }

    /// Drop the row for `product_id` ahead of its store removal.
    ///
    /// The matching `CartChange::Removed` then only updates the total.
    pub fn remove_row(&mut self, product_id: &ProductId) {
        self.modal.apply(Patch::RemoveRow {
            product_id: product_id.clone(),
        });
        self.removed_rows.push(product_id.clone());
    }

    pub fn set_submit_loading(&mut self, loading: bool) {
        self.modal.apply(Patch::SetSubmitLoading(loading));
    }

    /// Show `message` in the form's error area.
    ///
    /// # Errors
    ///
    /// Returns an error if the message fragment fails to render.
    pub fn show_error(&mut self, message: &str) -> Result<()> {
        let html = OrderErrorTemplate { message }.render()?;
        self.modal.apply(Patch::ShowError { html });
        Ok(())
    }

    pub fn clear_error(&mut self) {
        self.modal.apply(Patch::ClearError);
    }

    /// Swap the dialog to the order confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation fails to render.
    pub fn show_confirmation(&mut self) -> Result<()> {
        let body = OrderConfirmationTemplate {
            delivery_image: &self.delivery_image,
        }
        .render()?;
        self.modal.set_title(SUCCESS_TITLE);
        self.modal.set_body(body);
        Ok(())
    }

    pub fn close(&mut self) {
        self.modal.close();
    }

    fn row(&self, entry: &CartEntry) -> CartRowView {
        let product = entry.product();
        CartRowView {
            id: product.id.to_string(),
            name: product.name.clone(),
            image_src: format!("{}/{}", self.product_image_base, product.image),
            count: entry.count(),
            line_price: self.money(entry.line_total()),
        }
    }

    fn money(&self, amount: Decimal) -> String {
        format_amount(&self.currency_symbol, amount)
    }
}
