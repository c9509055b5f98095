//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common intake scenarios. These
//! fixtures are designed to be consistent and predictable for unit tests.

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use domain_intake::{ApplicationDraft, Field, Product, ProductCatalog, RawValue, ValidationSchema};

static STANDARD_SCHEMA: Lazy<ValidationSchema> = Lazy::new(ValidationSchema::standard);

/// Fixture for validation schemas
pub struct SchemaFixtures;

impl SchemaFixtures {
    /// The standard schema shared across tests
    pub fn standard() -> ValidationSchema {
        STANDARD_SCHEMA.clone()
    }

    /// A schema with tight global bounds for range testing
    pub fn bounded() -> ValidationSchema {
        ValidationSchema::standard()
            .with_max_term_months(120)
            .with_max_requested_amount(dec!(1000000))
    }

    /// A schema whose only product has term bounds
    pub fn single_bounded_product() -> ValidationSchema {
        ValidationSchema::new(ProductCatalog::new(vec![
            Product::new("personal").with_term_bounds(6, 48),
        ]))
    }
}

/// Fixture for application drafts
pub struct DraftFixtures;

impl DraftFixtures {
    /// An untouched draft holding only defaults
    pub fn pristine() -> ApplicationDraft {
        ApplicationDraft::default()
    }

    /// A complete, valid draft for a personal loan
    pub fn ana_silva() -> ApplicationDraft {
        let mut draft = ApplicationDraft::default();
        draft.apply(Field::FullName, &RawValue::text("Ana Silva"));
        draft.apply(Field::Email, &RawValue::text("ana@example.com"));
        draft.apply(Field::PhoneNumber, &RawValue::text("+258840000000"));
        draft.apply(Field::MonthlyIncome, &RawValue::text("30000"));
        draft.apply(Field::RequestedAmount, &RawValue::text("10000"));
        draft
    }

    /// A valid draft exercising every optional field
    pub fn full_home_loan() -> ApplicationDraft {
        let mut draft = Self::ana_silva();
        draft.apply(Field::OtherIncome, &RawValue::text("5000"));
        draft.apply(Field::RequestedAmount, &RawValue::text("2500000"));
        draft.apply(Field::ProductType, &RawValue::text("home"));
        draft.apply(Field::Term, &RawValue::text("240"));
        draft.apply(Field::IncludeInsurance, &RawValue::Flag(true));
        draft.apply(Field::InitialContribution, &RawValue::text("500000"));
        draft
    }

    /// A draft whose monthly income holds the unparseable sentinel
    pub fn garbled_income() -> ApplicationDraft {
        let mut draft = Self::ana_silva();
        draft.apply(Field::MonthlyIncome, &RawValue::text("abc"));
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_intake::{ApplicationValidator, NumericEntry};

    #[test]
    fn test_ana_silva_is_valid() {
        let result = ApplicationValidator::validate(&SchemaFixtures::standard(), &DraftFixtures::ana_silva());
        assert!(result.is_ok());
    }

    #[test]
    fn test_full_home_loan_is_valid() {
        let result =
            ApplicationValidator::validate(&SchemaFixtures::standard(), &DraftFixtures::full_home_loan());
        assert!(result.is_ok());
    }

    #[test]
    fn test_garbled_income_holds_sentinel() {
        let draft = DraftFixtures::garbled_income();
        assert!(matches!(draft.monthly_income, NumericEntry::Invalid(_)));
    }
}
