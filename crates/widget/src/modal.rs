//! Dialog collaborator.
//!
//! The widget never touches a live element tree. It hands whole bodies to a
//! [`Modal`] as markup and describes later changes as [`Patch`]es, each of
//! which names the CSS selector it targets. A browser host applies them
//! against the DOM; [`HeadlessModal`] keeps them in memory.

use bistro_cart_core::ProductId;
use tracing::debug;

/// Class toggled on the submit button while an order is in flight.
pub const LOADING_CLASS: &str = "is-loading";

/// Dialog chrome the cart renders into.
pub trait Modal {
    /// Replace the dialog title.
    fn set_title(&mut self, title: &str);
    /// Replace the dialog body with `html`.
    fn set_body(&mut self, html: String);
    /// Show the dialog.
    fn open(&mut self);
    /// Hide the dialog.
    fn close(&mut self);
    /// Whether the dialog is showing.
    fn is_open(&self) -> bool;
    /// Change part of the current body in place.
    fn apply(&mut self, patch: Patch);
}

/// An in-place change to the rendered cart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Replace the text of a row's counter.
    SetRowCount { product_id: ProductId, count: u32 },
    /// Replace the text of a row's line price.
    SetRowPrice { product_id: ProductId, text: String },
    /// Insert a rendered row before the order form.
    InsertRow { html: String },
    /// Remove a row.
    RemoveRow { product_id: ProductId },
    /// Replace the running total beside the submit button.
    SetTotal { text: String },
    /// Add or remove [`LOADING_CLASS`] on the submit button.
    SetSubmitLoading(bool),
    /// Fill and reveal the form's error area with rendered markup.
    ShowError { html: String },
    /// Empty and hide the form's error area.
    ClearError,
}

impl Patch {
    /// CSS selector of the element this patch acts on.
    #[must_use]
    pub fn selector(&self) -> String {
        match self {
            Self::SetRowCount { product_id, .. } => {
                format!("{} .cart-counter__count", row_selector(product_id))
            }
            Self::SetRowPrice { product_id, .. } => {
                format!("{} .cart-product__price", row_selector(product_id))
            }
            Self::RemoveRow { product_id } => row_selector(product_id),
            Self::InsertRow { .. } => ".order-list .cart-form".to_string(),
            Self::SetTotal { .. } => ".cart-buttons__info-price".to_string(),
            Self::SetSubmitLoading(_) => ".cart-form button[type=\"submit\"]".to_string(),
            Self::ShowError { .. } | Self::ClearError => ".cart-form__error".to_string(),
        }
    }
}

/// Selector for the row of `product_id`, with the id quoted for CSS.
#[must_use]
pub fn row_selector(product_id: &ProductId) -> String {
    let quoted = product_id.as_str().replace('\\', "\\\\").replace('"', "\\\"");
    format!("[data-product-id=\"{quoted}\"]")
}

/// A modal that keeps its state in memory.
///
/// Used by the demo binary and by tests; every call is logged at debug level.
#[derive(Debug, Default, Clone)]
pub struct HeadlessModal {
    title: String,
    body: String,
    open: bool,
    patches: Vec<Patch>,
}

impl HeadlessModal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Patches applied since the body was last replaced.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }
}

impl Modal for HeadlessModal {
    fn set_title(&mut self, title: &str) {
        debug!(title, "Modal title set");
        self.title = title.to_string();
    }

    fn set_body(&mut self, html: String) {
        debug!(bytes = html.len(), "Modal body replaced");
        self.body = html;
        self.patches.clear();
    }

    fn open(&mut self) {
        debug!("Modal opened");
        self.open = true;
    }

    fn close(&mut self) {
        debug!("Modal closed");
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn apply(&mut self, patch: Patch) {
        debug!(selector = %patch.selector(), ?patch, "Modal patched");
        self.patches.push(patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_selectors() {
        let id = ProductId::new("tom-yam-kai");
        let patch = Patch::SetRowCount {
            product_id: id.clone(),
            count: 2,
        };
        assert_eq!(
            patch.selector(),
            "[data-product-id=\"tom-yam-kai\"] .cart-counter__count"
        );
        assert_eq!(
            Patch::RemoveRow { product_id: id }.selector(),
            "[data-product-id=\"tom-yam-kai\"]"
        );
    }

    #[test]
    fn test_row_selector_quotes_id() {
        let id = ProductId::new(r#"odd"id\"#);
        assert_eq!(row_selector(&id), r#"[data-product-id="odd\"id\\"]"#);
    }

    #[test]
    fn test_headless_modal_lifecycle() {
        let mut modal = HeadlessModal::new();
        assert!(!modal.is_open());

        modal.set_title("Your order");
        modal.set_body("<div></div>".to_string());
        modal.open();
        modal.apply(Patch::SetSubmitLoading(true));
        assert!(modal.is_open());
        assert_eq!(modal.title(), "Your order");
        assert_eq!(modal.patches(), [Patch::SetSubmitLoading(true)]);

        modal.set_body("<p></p>".to_string());
        assert!(modal.patches().is_empty());

        modal.close();
        assert!(!modal.is_open());
    }
}
