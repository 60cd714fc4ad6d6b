//! In-memory cart state.
//!
//! [`CartStore`] holds an ordered list of [`CartEntry`] values, unique by
//! product id, in insertion order (which is also display order). Every
//! mutation returns a [`CartEvent`] that the store's owner publishes to its
//! [`CartObserver`]s; the store itself knows nothing about views.
//!
//! Invalid input is tolerated: adding "no product" or adjusting an unknown id
//! is a silent no-op that returns `None`.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::types::{Product, ProductId};

/// A product and how many of it are in the cart.
///
/// `count` is at least 1 for as long as the entry is in a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    product: Arc<Product>,
    count: u32,
}

impl CartEntry {
    fn new(product: Arc<Product>) -> Self {
        Self { product, count: 1 }
    }

    /// The product this entry refers to.
    #[must_use]
    pub const fn product(&self) -> &Arc<Product> {
        &self.product
    }

    /// The product id.
    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Number of units, always >= 1.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// `price * count`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.line_total(self.count)
    }
}

/// What a single mutation did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new entry was appended with count 1.
    Added(CartEntry),
    /// An existing entry's count changed; holds the entry after the change.
    Updated(CartEntry),
    /// An entry was removed; holds the entry as it was before removal.
    Removed(CartEntry),
    /// Every entry was removed at once.
    Cleared,
}

impl CartChange {
    /// The affected entry, if the change concerns a single one.
    #[must_use]
    pub const fn entry(&self) -> Option<&CartEntry> {
        match self {
            Self::Added(entry) | Self::Updated(entry) | Self::Removed(entry) => Some(entry),
            Self::Cleared => None,
        }
    }
}

/// Aggregate figures for the whole cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Sum of all entry counts.
    pub total_count: u32,
    /// Sum of `price * count` over all entries.
    pub total_price: Decimal,
}

/// Change notification emitted by every store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEvent {
    /// The entry-level change.
    pub change: CartChange,
    /// Totals after the change.
    pub summary: CartSummary,
}

impl CartEvent {
    /// Whether the store was empty after this change.
    #[must_use]
    pub const fn left_cart_empty(&self) -> bool {
        self.summary.total_count == 0
    }
}

/// Receives [`CartEvent`]s from whoever owns a [`CartStore`].
pub trait CartObserver {
    /// Called after every mutation of the observed store.
    fn on_cart_change(&mut self, event: &CartEvent);
}

impl<T: CartObserver + ?Sized> CartObserver for &mut T {
    fn on_cart_change(&mut self, event: &CartEvent) {
        (**self).on_cart_change(event);
    }
}

impl<T: CartObserver + ?Sized> CartObserver for Box<T> {
    fn on_cart_change(&mut self, event: &CartEvent) {
        (**self).on_cart_change(event);
    }
}

/// Ordered, id-unique collection of cart entries.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing entry for the product id, or appends a new
    /// entry with count 1. Passing `None` does nothing and returns `None`.
    pub fn add(&mut self, product: impl Into<Option<Arc<Product>>>) -> Option<CartEvent> {
        let product = product.into()?;

        let change = if let Some(entry) = self.entry_mut(&product.id) {
            entry.count = entry.count.saturating_add(1);
            CartChange::Updated(entry.clone())
        } else {
            let entry = CartEntry::new(product);
            self.entries.push(entry.clone());
            CartChange::Added(entry)
        };

        Some(self.event(change))
    }

    /// Add `delta` to the count of the entry for `id`.
    ///
    /// An entry whose count reaches zero (or would go below it) is removed.
    /// Unknown ids are ignored and return `None`.
    pub fn adjust_count(&mut self, id: &ProductId, delta: i32) -> Option<CartEvent> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        let entry = self.entries.get_mut(index)?;

        let next = i64::from(entry.count) + i64::from(delta);
        let change = if next <= 0 {
            CartChange::Removed(self.entries.remove(index))
        } else {
            entry.count = u32::try_from(next).unwrap_or(u32::MAX);
            CartChange::Updated(entry.clone())
        };

        Some(self.event(change))
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> CartEvent {
        self.entries.clear();
        self.event(CartChange::Cleared)
    }

    /// True iff the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Entry for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Sum of all entry counts.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |sum, entry| sum.saturating_add(entry.count))
    }

    /// Sum of `price * count` over all entries.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Both totals at once.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_count: self.total_count(),
            total_price: self.total_price(),
        }
    }

    fn entry_mut(&mut self, id: &ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    fn event(&self, change: CartChange) -> CartEvent {
        CartEvent {
            change,
            summary: self.summary(),
        }
    }
}
