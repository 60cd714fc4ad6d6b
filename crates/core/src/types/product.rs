//! Catalog product as seen by the cart.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A catalog product.
///
/// Products are owned by the catalog and immutable from the cart's point of
/// view; the cart shares them as `Arc<Product>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name. Catalog text, escaped at render time.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image file name, relative to the product image base path.
    pub image: String,
    /// Catalog category, if any.
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Create a product without a category.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category: None,
        }
    }
}
