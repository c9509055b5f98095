//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for intake types that give
//! more meaningful error messages than standard assertions.

use domain_intake::{Field, LoanApplication, ValidationErrors};

/// Asserts that a submission result is a success
///
/// # Panics
///
/// Panics with the aggregated failures when validation failed
pub fn assert_valid(result: &Result<LoanApplication, ValidationErrors>) {
    if let Err(errors) = result {
        panic!("Expected valid application, got failures: {errors}");
    }
}

/// Asserts that validation failed and recorded a failure for the field
///
/// # Panics
///
/// Panics if validation succeeded or the field has no recorded failure
pub fn assert_fails_on(result: &Result<LoanApplication, ValidationErrors>, field: Field) {
    match result {
        Ok(application) => {
            panic!("Expected failure on {field}, but validation succeeded: {application:?}")
        }
        Err(errors) => assert!(
            errors.contains(field),
            "Expected failure on {field}, recorded failures: {errors}"
        ),
    }
}

/// Asserts that validation failed on exactly the given fields
///
/// # Panics
///
/// Panics if validation succeeded or the failed-field set differs
pub fn assert_fails_exactly_on(
    result: &Result<LoanApplication, ValidationErrors>,
    fields: &[Field],
) {
    match result {
        Ok(application) => {
            panic!("Expected failures on {fields:?}, but validation succeeded: {application:?}")
        }
        Err(errors) => {
            let failed: Vec<Field> = errors.fields().collect();
            let mut expected = fields.to_vec();
            expected.sort();
            assert_eq!(
                failed, expected,
                "Failed-field set mismatch, recorded failures: {errors}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{DraftFixtures, SchemaFixtures};
    use domain_intake::ApplicationValidator;

    #[test]
    fn test_assert_valid_accepts_valid_draft() {
        let result =
            ApplicationValidator::validate(&SchemaFixtures::standard(), &DraftFixtures::ana_silva());
        assert_valid(&result);
    }

    #[test]
    fn test_assert_fails_on_matches_recorded_field() {
        let result = ApplicationValidator::validate(
            &SchemaFixtures::standard(),
            &DraftFixtures::garbled_income(),
        );
        assert_fails_on(&result, Field::MonthlyIncome);
        assert_fails_exactly_on(&result, &[Field::MonthlyIncome]);
    }

    #[test]
    #[should_panic(expected = "Expected failure on monthlyIncome")]
    fn test_assert_fails_on_panics_for_valid_draft() {
        let result =
            ApplicationValidator::validate(&SchemaFixtures::standard(), &DraftFixtures::ana_silva());
        assert_fails_on(&result, Field::MonthlyIncome);
    }
}
