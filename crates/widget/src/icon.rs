//! Cart icon badge.

use askama::Template;
use bistro_cart_core::{CartEvent, CartObserver, CartSummary, format_amount};

use crate::config::WidgetConfig;

#[derive(Template)]
#[template(path = "partials/cart_badge.html")]
struct CartBadgeTemplate<'a> {
    count: u32,
    total: &'a str,
}

/// Icon-badge collaborator showing the item count and running total.
///
/// Hidden while the cart is empty. Re-renders its markup on every change.
#[derive(Debug, Clone)]
pub struct CartBadge {
    currency_symbol: String,
    summary: CartSummary,
    markup: String,
}

impl CartBadge {
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        let mut badge = Self {
            currency_symbol: config.currency_symbol.clone(),
            summary: CartSummary::default(),
            markup: String::new(),
        };
        badge.refresh();
        badge
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.summary.total_count
    }

    #[must_use]
    pub fn total_text(&self) -> String {
        format_amount(&self.currency_symbol, self.summary.total_price)
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.summary.total_count > 0
    }

    /// Markup from the last refresh.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    fn refresh(&mut self) {
        let total = self.total_text();
        let template = CartBadgeTemplate {
            count: self.summary.total_count,
            total: &total,
        };
        match template.render() {
            Ok(markup) => self.markup = markup,
            Err(e) => tracing::error!(error = %e, "Failed to render cart badge"),
        }
    }
}

impl CartObserver for CartBadge {
    fn on_cart_change(&mut self, event: &CartEvent) {
        self.summary = event.summary;
        tracing::debug!(
            total_count = self.summary.total_count,
            total_price = %self.summary.total_price,
            "Cart badge updated"
        );
        self.refresh();
    }
}
