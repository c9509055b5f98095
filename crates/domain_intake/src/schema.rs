//! Validation schema
//!
//! The schema is injected configuration: it carries the product catalog and
//! the optional global bounds the deployment imposes. The rules themselves
//! (required fields, email shape, numeric ranges, enumeration membership)
//! live in [`crate::validation`]; the schema only parameterizes them.

use rust_decimal::Decimal;

use crate::product::ProductCatalog;

/// Parameterization of the validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    products: ProductCatalog,
    max_term_months: Option<u32>,
    max_requested_amount: Option<Decimal>,
}

impl ValidationSchema {
    /// Creates a schema over the given product catalog with no global bounds
    pub fn new(products: ProductCatalog) -> Self {
        Self {
            products,
            max_term_months: None,
            max_requested_amount: None,
        }
    }

    /// A schema over the standard catalog
    pub fn standard() -> Self {
        Self::new(ProductCatalog::standard())
    }

    /// Caps the term across all products
    pub fn with_max_term_months(mut self, months: u32) -> Self {
        self.max_term_months = Some(months);
        self
    }

    /// Caps the requested amount across all products
    pub fn with_max_requested_amount(mut self, amount: Decimal) -> Self {
        self.max_requested_amount = Some(amount);
        self
    }

    /// The injected product catalog
    pub fn products(&self) -> &ProductCatalog {
        &self.products
    }

    /// The global term cap, if any
    pub fn max_term_months(&self) -> Option<u32> {
        self.max_term_months
    }

    /// The global requested-amount cap, if any
    pub fn max_requested_amount(&self) -> Option<Decimal> {
        self.max_requested_amount
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_schema_has_no_bounds() {
        let schema = ValidationSchema::standard();
        assert_eq!(schema.max_term_months(), None);
        assert_eq!(schema.max_requested_amount(), None);
        assert!(!schema.products().is_empty());
    }

    #[test]
    fn test_builder_sets_bounds() {
        let schema = ValidationSchema::standard()
            .with_max_term_months(120)
            .with_max_requested_amount(dec!(5000000));
        assert_eq!(schema.max_term_months(), Some(120));
        assert_eq!(schema.max_requested_amount(), Some(dec!(5000000)));
    }
}
