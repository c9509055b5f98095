//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use domain_intake::{ApplicationDraft, Field, RawValue};

/// Strategy for plausible applicant names
pub fn full_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,9} [A-Z][a-z]{2,9}"
}

/// Strategy for well-formed email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,10}@[a-z]{2,10}\\.(com|org|co\\.mz)"
}

/// Strategy for Mozambican mobile numbers
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "\\+2588[2-7][0-9]{7}"
}

/// Strategy for amounts that are zero or greater, two decimal places
pub fn non_negative_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for amounts strictly greater than zero, two decimal places
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for valid loan terms in months
pub fn term_strategy() -> impl Strategy<Value = u32> {
    1u32..=360u32
}

/// Strategy for codes drawn from the standard product catalog
pub fn product_code_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("personal"),
        Just("home"),
        Just("auto"),
        Just("business"),
    ]
}

/// Strategy for supported currency codes
pub fn currency_code_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("MZN"), Just("USD"), Just("EUR"), Just("ZAR")]
}

/// Strategy for text that fails decimal parsing
pub fn non_numeric_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{1,12}".prop_filter("must not parse as a decimal", |s| {
        Decimal::from_str(s.trim()).is_err()
    })
}

/// Strategy for complete drafts that satisfy every validation rule
pub fn valid_draft_strategy() -> impl Strategy<Value = ApplicationDraft> {
    (
        (full_name_strategy(), email_strategy(), phone_strategy()),
        (
            non_negative_amount_strategy(),
            non_negative_amount_strategy(),
            positive_amount_strategy(),
            non_negative_amount_strategy(),
        ),
        (
            product_code_strategy(),
            term_strategy(),
            currency_code_strategy(),
            any::<bool>(),
        ),
    )
        .prop_map(
            |(
                (name, email, phone),
                (monthly, other, requested, contribution),
                (product, term, currency, insurance),
            )| {
                let mut draft = ApplicationDraft::default();
                draft.apply(Field::FullName, &RawValue::text(name));
                draft.apply(Field::Email, &RawValue::text(email));
                draft.apply(Field::PhoneNumber, &RawValue::text(phone));
                draft.apply(Field::MonthlyIncome, &RawValue::text(monthly.to_string()));
                draft.apply(Field::OtherIncome, &RawValue::text(other.to_string()));
                draft.apply(Field::RequestedAmount, &RawValue::text(requested.to_string()));
                draft.apply(
                    Field::InitialContribution,
                    &RawValue::text(contribution.to_string()),
                );
                draft.apply(Field::ProductType, &RawValue::text(product));
                draft.apply(Field::Term, &RawValue::text(term.to_string()));
                draft.apply(Field::Currency, &RawValue::text(currency));
                draft.apply(Field::IncludeInsurance, &RawValue::Flag(insurance));
                draft
            },
        )
}
