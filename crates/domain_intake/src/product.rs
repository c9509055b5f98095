//! Product catalog
//!
//! The set of valid product identifiers is owned by business configuration,
//! not by this crate: the form validates against whatever catalog was
//! injected. [`ProductCatalog::standard`] mirrors the product set the
//! simulator ships with; deployments override it via [`ProductCatalog::new`]
//! or [`ProductCatalog::from_json`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// A product identifier code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductType(String);

impl ProductType {
    /// Creates a product type from a code, trimming surrounding whitespace
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_string())
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductType {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A loan product offered by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier code
    pub code: ProductType,
    /// Localization key for the display label
    pub label_key: String,
    /// Shortest term this product may be taken over, if bounded
    #[serde(default)]
    pub min_term_months: Option<u32>,
    /// Longest term this product may be taken over, if bounded
    #[serde(default)]
    pub max_term_months: Option<u32>,
}

impl Product {
    /// Creates an unbounded product whose label key equals its code
    pub fn new(code: &str) -> Self {
        Self {
            code: ProductType::new(code),
            label_key: code.trim().to_string(),
            min_term_months: None,
            max_term_months: None,
        }
    }

    /// Sets the term bounds
    pub fn with_term_bounds(mut self, min_months: u32, max_months: u32) -> Self {
        self.min_term_months = Some(min_months);
        self.max_term_months = Some(max_months);
        self
    }
}

/// The injected list of valid products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Creates a catalog from a product list
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The product set the simulator ships with
    pub fn standard() -> Self {
        Self::new(vec![
            Product::new("personal"),
            Product::new("home"),
            Product::new("auto"),
            Product::new("business"),
        ])
    }

    /// Loads a catalog from JSON
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::CatalogParse` when the JSON does not describe a
    /// catalog.
    pub fn from_json(source: &str) -> Result<Self, IntakeError> {
        serde_json::from_str(source).map_err(|e| IntakeError::CatalogParse(e.to_string()))
    }

    /// Looks a product up by code
    pub fn get(&self, code: &str) -> Option<&Product> {
        let code = code.trim();
        self.products.iter().find(|p| p.code.as_str() == code)
    }

    /// Returns true if the code names a catalog product
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Iterates the catalog's product codes
    pub fn codes(&self) -> impl Iterator<Item = &ProductType> {
        self.products.iter().map(|p| &p.code)
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = ProductCatalog::standard();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.contains("personal"));
        assert!(catalog.contains("home"));
        assert!(!catalog.contains("payday"));
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        let catalog = ProductCatalog::standard();
        assert!(catalog.contains(" personal "));
    }

    #[test]
    fn test_from_json() {
        let source = r#"{
            "products": [
                {"code": "personal", "label_key": "personal"},
                {"code": "agri", "label_key": "agri", "max_term_months": 24}
            ]
        }"#;
        let catalog = ProductCatalog::from_json(source).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("agri").unwrap().max_term_months, Some(24));
        assert_eq!(catalog.get("agri").unwrap().min_term_months, None);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(ProductCatalog::from_json("not json").is_err());
    }

    #[test]
    fn test_term_bounds_builder() {
        let product = Product::new("home").with_term_bounds(12, 360);
        assert_eq!(product.min_term_months, Some(12));
        assert_eq!(product.max_term_months, Some(360));
    }
}
