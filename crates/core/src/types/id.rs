//! Newtype ID for catalog product references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Catalog ids are slugs (e.g. `laab-kai-chicken-salad`), so the wrapper is
/// string based. Two cart entries never share a `ProductId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_as_str() {
        let id = ProductId::new("tom-yam-kai");
        assert_eq!(id.as_str(), "tom-yam-kai");
        assert_eq!(id.to_string(), "tom-yam-kai");
    }

    #[test]
    fn test_conversions_compare_equal() {
        assert_eq!(ProductId::from("a"), ProductId::from("a".to_string()));
        assert_ne!(ProductId::from("a"), ProductId::from("b"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ProductId::new("som-tam");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"som-tam\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
