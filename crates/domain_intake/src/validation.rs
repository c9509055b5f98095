//! Application validation
//!
//! A single synchronous pass over the whole draft. Errors are aggregated,
//! one per offending field, rather than failing fast: the applicant sees
//! every problem at once and may correct and resubmit indefinitely.
//!
//! # Rules
//!
//! - `fullName`, `phoneNumber`: required, non-empty after trimming
//! - `email`: required, must be a valid email address
//! - `monthlyIncome`, `otherIncome`, `initialContribution`: numeric, zero or
//!   greater
//! - `requestedAmount`: numeric, greater than zero, within the schema cap
//! - `productType`: member of the injected catalog
//! - `term`: a positive whole number of months, within the product's term
//!   bounds and the schema cap
//! - `currency`: a supported ISO 4217 code
//!
//! Numeric fields holding the unparseable sentinel are rejected here, never
//! coerced.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;
use validator::ValidateEmail;

use core_kernel::Currency;

use crate::application::{ApplicationDraft, Field, LoanApplication, NumericEntry};
use crate::product::Product;
use crate::schema::ValidationSchema;

/// A validation failure on a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    /// The offending field
    pub field: Field,
    /// Stable machine-readable code
    pub code: &'static str,
    /// Human-readable reason
    pub message: String,
}

/// Aggregated validation failures, one per offending field
///
/// Iteration follows form order. Only the first failure detected for a
/// field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldValidationError>,
}

impl ValidationErrors {
    /// Creates an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for a field, keeping the first one reported
    pub fn add(&mut self, field: Field, code: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert(FieldValidationError {
            field,
            code,
            message: message.into(),
        });
    }

    /// Returns true if no field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the failure recorded for a field, if any
    pub fn get(&self, field: Field) -> Option<&FieldValidationError> {
        self.errors.get(&field)
    }

    /// Returns true if the field has a recorded failure
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterates failures in form order
    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.errors.values()
    }

    /// Iterates the failed fields in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Exports the map of wire field name to human-readable reason
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .values()
            .map(|e| (e.field.as_str(), e.message.clone()))
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in self.errors.values() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldValidationError;
    type IntoIter = std::collections::btree_map::Values<'a, Field, FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}

/// Validator for application drafts
///
/// # Examples
///
/// ```rust
/// use domain_intake::{ApplicationDraft, ApplicationValidator, Field, ValidationSchema};
///
/// let schema = ValidationSchema::standard();
/// let draft = ApplicationDraft::default();
///
/// // A pristine draft is not submittable: required fields are empty and the
/// // requested amount is still zero.
/// let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
/// assert!(errors.contains(Field::FullName));
/// assert!(errors.contains(Field::RequestedAmount));
/// ```
pub struct ApplicationValidator;

impl ApplicationValidator {
    /// Validates a draft against the schema
    ///
    /// # Returns
    ///
    /// The fully-typed application on success, or the aggregated per-field
    /// failures. The draft itself is never modified.
    pub fn validate(
        schema: &ValidationSchema,
        draft: &ApplicationDraft,
    ) -> Result<LoanApplication, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if draft.full_name.trim().is_empty() {
            errors.add(Field::FullName, "required", "is required");
        }

        let email = draft.email.trim();
        if email.is_empty() {
            errors.add(Field::Email, "required", "is required");
        } else if !email.validate_email() {
            errors.add(Field::Email, "invalid_email", "must be a valid email address");
        }

        if draft.phone_number.trim().is_empty() {
            errors.add(Field::PhoneNumber, "required", "is required");
        }

        let monthly_income = Self::non_negative(&mut errors, Field::MonthlyIncome, &draft.monthly_income);
        let other_income = Self::non_negative(&mut errors, Field::OtherIncome, &draft.other_income);
        let initial_contribution =
            Self::non_negative(&mut errors, Field::InitialContribution, &draft.initial_contribution);

        let requested_amount = Self::positive(&mut errors, Field::RequestedAmount, &draft.requested_amount);
        if let (Some(amount), Some(cap)) = (requested_amount, schema.max_requested_amount()) {
            if amount > cap {
                errors.add(
                    Field::RequestedAmount,
                    "out_of_range",
                    format!("cannot exceed {cap}"),
                );
            }
        }

        let product = match schema.products().get(&draft.product_type) {
            Some(product) => Some(product),
            None => {
                errors.add(Field::ProductType, "unknown_product", "is not an available product");
                None
            }
        };

        let term_months = Self::term(&mut errors, &draft.term);
        if let Some(months) = term_months {
            Self::check_term_bounds(&mut errors, months, product, schema.max_term_months());
        }

        let currency = match Currency::from_code(&draft.currency) {
            Ok(currency) => Some(currency),
            Err(_) => {
                errors.add(Field::Currency, "unknown_currency", "is not a supported currency");
                None
            }
        };

        match (
            monthly_income,
            other_income,
            requested_amount,
            initial_contribution,
            product,
            term_months,
            currency,
        ) {
            (
                Some(monthly_income),
                Some(other_income),
                Some(requested_amount),
                Some(initial_contribution),
                Some(product),
                Some(term_months),
                Some(currency),
            ) if errors.is_empty() => Ok(LoanApplication {
                full_name: draft.full_name.clone(),
                email: draft.email.trim().to_string(),
                phone_number: draft.phone_number.clone(),
                monthly_income,
                other_income,
                requested_amount,
                product_type: product.code.clone(),
                term_months,
                include_insurance: draft.include_insurance,
                initial_contribution,
                currency,
            }),
            _ => Err(errors),
        }
    }

    /// Checks a numeric entry that must be zero or greater
    fn non_negative(
        errors: &mut ValidationErrors,
        field: Field,
        entry: &NumericEntry,
    ) -> Option<Decimal> {
        match entry {
            NumericEntry::Invalid(_) => {
                errors.add(field, "not_a_number", "must be a number");
                None
            }
            NumericEntry::Value(value) if *value < Decimal::ZERO => {
                errors.add(field, "out_of_range", "must be zero or greater");
                None
            }
            NumericEntry::Value(value) => Some(*value),
        }
    }

    /// Checks a numeric entry that must be greater than zero
    fn positive(
        errors: &mut ValidationErrors,
        field: Field,
        entry: &NumericEntry,
    ) -> Option<Decimal> {
        match entry {
            NumericEntry::Invalid(_) => {
                errors.add(field, "not_a_number", "must be a number");
                None
            }
            NumericEntry::Value(value) if *value <= Decimal::ZERO => {
                errors.add(field, "out_of_range", "must be greater than zero");
                None
            }
            NumericEntry::Value(value) => Some(*value),
        }
    }

    /// Checks the term entry: a positive whole number of months
    fn term(errors: &mut ValidationErrors, entry: &NumericEntry) -> Option<u32> {
        let value = match entry {
            NumericEntry::Invalid(_) => {
                errors.add(Field::Term, "not_a_number", "must be a number");
                return None;
            }
            NumericEntry::Value(value) => *value,
        };

        if value <= Decimal::ZERO {
            errors.add(Field::Term, "out_of_range", "must be greater than zero");
            return None;
        }
        if !value.fract().is_zero() {
            errors.add(Field::Term, "not_an_integer", "must be a whole number of months");
            return None;
        }
        match value.to_u32() {
            Some(months) => Some(months),
            None => {
                errors.add(Field::Term, "out_of_range", "is too large");
                None
            }
        }
    }

    fn check_term_bounds(
        errors: &mut ValidationErrors,
        months: u32,
        product: Option<&Product>,
        schema_cap: Option<u32>,
    ) {
        if let Some(cap) = schema_cap {
            if months > cap {
                errors.add(Field::Term, "out_of_range", format!("cannot exceed {cap} months"));
                return;
            }
        }
        if let Some(product) = product {
            if let Some(min) = product.min_term_months {
                if months < min {
                    errors.add(
                        Field::Term,
                        "out_of_range",
                        format!("must be at least {min} months for this product"),
                    );
                    return;
                }
            }
            if let Some(max) = product.max_term_months {
                if months > max {
                    errors.add(
                        Field::Term,
                        "out_of_range",
                        format!("cannot exceed {max} months for this product"),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RawValue;
    use crate::product::{Product, ProductCatalog};
    use rust_decimal_macros::dec;

    fn valid_draft() -> ApplicationDraft {
        let mut draft = ApplicationDraft::default();
        draft.apply(Field::FullName, &RawValue::text("Ana Silva"));
        draft.apply(Field::Email, &RawValue::text("ana@example.com"));
        draft.apply(Field::PhoneNumber, &RawValue::text("+258840000000"));
        draft.apply(Field::MonthlyIncome, &RawValue::text("30000"));
        draft.apply(Field::RequestedAmount, &RawValue::text("10000"));
        draft
    }

    #[test]
    fn test_valid_draft_produces_typed_application() {
        let schema = ValidationSchema::standard();
        let application = ApplicationValidator::validate(&schema, &valid_draft()).unwrap();

        assert_eq!(application.full_name, "Ana Silva");
        assert_eq!(application.monthly_income, dec!(30000));
        assert_eq!(application.requested_amount, dec!(10000));
        assert_eq!(application.product_type.as_str(), "personal");
        assert_eq!(application.term_months, 12);
        assert_eq!(application.currency, Currency::MZN);
        // omitted fields carry their defaults
        assert_eq!(application.other_income, Decimal::ZERO);
        assert_eq!(application.initial_contribution, Decimal::ZERO);
        assert!(!application.include_insurance);
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let schema = ValidationSchema::standard();
        let draft = ApplicationDraft::default();
        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();

        assert!(errors.contains(Field::FullName));
        assert!(errors.contains(Field::Email));
        assert!(errors.contains(Field::PhoneNumber));
        // aggregated, not fail-fast
        assert!(errors.contains(Field::RequestedAmount));
        assert_eq!(errors.get(Field::FullName).unwrap().code, "required");
    }

    #[test]
    fn test_bad_email_fails_only_on_email() {
        let schema = ValidationSchema::standard();
        let mut draft = valid_draft();
        draft.apply(Field::Email, &RawValue::text("not-an-email"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email).unwrap().code, "invalid_email");
    }

    #[test]
    fn test_non_numeric_income_is_rejected_not_coerced() {
        let schema = ValidationSchema::standard();
        let mut draft = valid_draft();
        draft.apply(Field::MonthlyIncome, &RawValue::text("abc"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::MonthlyIncome).unwrap().code, "not_a_number");
    }

    #[test]
    fn test_negative_income_is_out_of_range() {
        let schema = ValidationSchema::standard();
        let mut draft = valid_draft();
        draft.apply(Field::MonthlyIncome, &RawValue::text("-100"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert_eq!(errors.get(Field::MonthlyIncome).unwrap().code, "out_of_range");
    }

    #[test]
    fn test_zero_requested_amount_is_rejected() {
        let schema = ValidationSchema::standard();
        let mut draft = valid_draft();
        draft.apply(Field::RequestedAmount, &RawValue::text("0"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert!(errors.contains(Field::RequestedAmount));
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let schema = ValidationSchema::standard();
        let mut draft = valid_draft();
        draft.apply(Field::ProductType, &RawValue::text("payday"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert_eq!(errors.get(Field::ProductType).unwrap().code, "unknown_product");
    }

    #[test]
    fn test_fractional_term_is_rejected() {
        let schema = ValidationSchema::standard();
        let mut draft = valid_draft();
        draft.apply(Field::Term, &RawValue::text("12.5"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert_eq!(errors.get(Field::Term).unwrap().code, "not_an_integer");
    }

    #[test]
    fn test_term_honors_product_bounds() {
        let catalog = ProductCatalog::new(vec![Product::new("personal").with_term_bounds(6, 48)]);
        let schema = ValidationSchema::new(catalog);

        let mut draft = valid_draft();
        draft.apply(Field::Term, &RawValue::text("60"));
        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert_eq!(errors.get(Field::Term).unwrap().code, "out_of_range");

        let mut draft = valid_draft();
        draft.apply(Field::Term, &RawValue::text("3"));
        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert!(errors.contains(Field::Term));
    }

    #[test]
    fn test_term_honors_schema_cap() {
        let schema = ValidationSchema::standard().with_max_term_months(120);
        let mut draft = valid_draft();
        draft.apply(Field::Term, &RawValue::text("240"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert!(errors.contains(Field::Term));
    }

    #[test]
    fn test_requested_amount_honors_schema_cap() {
        let schema = ValidationSchema::standard().with_max_requested_amount(dec!(50000));
        let mut draft = valid_draft();
        draft.apply(Field::RequestedAmount, &RawValue::text("100000"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert_eq!(errors.get(Field::RequestedAmount).unwrap().code, "out_of_range");
    }

    #[test]
    fn test_unsupported_currency_is_rejected() {
        let schema = ValidationSchema::standard();
        let mut draft = valid_draft();
        draft.apply(Field::Currency, &RawValue::text("BTC"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        assert_eq!(errors.get(Field::Currency).unwrap().code, "unknown_currency");
    }

    #[test]
    fn test_error_map_keys_are_wire_names() {
        let schema = ValidationSchema::standard();
        let mut draft = valid_draft();
        draft.apply(Field::MonthlyIncome, &RawValue::text("abc"));
        draft.apply(Field::Email, &RawValue::text("nope"));

        let errors = ApplicationValidator::validate(&schema, &draft).unwrap_err();
        let map = errors.to_map();
        assert!(map.contains_key("monthlyIncome"));
        assert!(map.contains_key("email"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Term, "not_a_number", "must be a number");
        errors.add(Field::Term, "out_of_range", "cannot exceed 120 months");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Term).unwrap().code, "not_a_number");
    }
}
