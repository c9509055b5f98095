//! Application record and field model
//!
//! This module defines the two shapes of the loan application record:
//!
//! - [`ApplicationDraft`]: the working record owned by the form. Every field
//!   holds whatever the applicant typed; numeric fields are parsed eagerly
//!   into a [`NumericEntry`] so unparseable text is retained as a sentinel
//!   rather than coerced to zero.
//! - [`LoanApplication`]: the fully-typed record produced by a successful
//!   validation pass and handed to the simulation callback.
//!
//! [`Field`] enumerates the record's fields; its `as_str` names double as
//! error-map keys and localization keys.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::error::IntakeError;
use crate::product::ProductType;

/// A field of the application record
///
/// Ordering follows the form's visual order, so aggregated error maps
/// iterate top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    MonthlyIncome,
    OtherIncome,
    RequestedAmount,
    ProductType,
    Term,
    IncludeInsurance,
    InitialContribution,
    Currency,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 11] = [
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::MonthlyIncome,
        Field::OtherIncome,
        Field::RequestedAmount,
        Field::ProductType,
        Field::Term,
        Field::IncludeInsurance,
        Field::InitialContribution,
        Field::Currency,
    ];

    /// Returns the wire name of the field
    ///
    /// Used as the key in validation-error maps and as the localization key
    /// for display labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::MonthlyIncome => "monthlyIncome",
            Field::OtherIncome => "otherIncome",
            Field::RequestedAmount => "requestedAmount",
            Field::ProductType => "productType",
            Field::Term => "term",
            Field::IncludeInsurance => "includeInsurance",
            Field::InitialContribution => "initialContribution",
            Field::Currency => "currency",
        }
    }

    /// Returns the localization key for this field's display label
    pub fn label_key(&self) -> &'static str {
        self.as_str()
    }

    /// Returns true for fields that hold a numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Field::MonthlyIncome
                | Field::OtherIncome
                | Field::RequestedAmount
                | Field::Term
                | Field::InitialContribution
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| IntakeError::UnknownField(s.to_string()))
    }
}

/// Raw input delivered by an edit event
///
/// Text carries whatever the input widget produced; flags come from toggle
/// widgets. A flag sent to a text-backed field is stored as its textual
/// form, and truthy text (`true`/`1`/`on`/`yes`, case-insensitive) sets the
/// boolean field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Text(String),
    Flag(bool),
}

impl RawValue {
    /// Convenience constructor for text input
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }

    /// Renders the raw value as text
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Text(value) => value.clone(),
            RawValue::Flag(true) => "true".to_string(),
            RawValue::Flag(false) => "false".to_string(),
        }
    }

    fn truthy(&self) -> bool {
        match self {
            RawValue::Flag(value) => *value,
            RawValue::Text(value) => matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "on" | "yes"
            ),
        }
    }
}

/// A numeric field's stored state
///
/// Parsing happens at edit time; rejection happens at validation time.
/// Unparseable input keeps the raw text so diagnostics and re-display see
/// exactly what the applicant typed, and so validation can reject it instead
/// of silently coercing to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericEntry {
    /// Input parsed to a finite decimal
    Value(Decimal),
    /// Input that failed to parse, raw text retained
    Invalid(String),
}

impl NumericEntry {
    /// Parses raw text into an entry
    ///
    /// Whitespace is trimmed first; empty input is unparseable.
    pub fn parse(raw: &str) -> Self {
        match Decimal::from_str(raw.trim()) {
            Ok(value) => NumericEntry::Value(value),
            Err(_) => NumericEntry::Invalid(raw.to_string()),
        }
    }

    /// Returns the parsed value, if any
    pub fn value(&self) -> Option<Decimal> {
        match self {
            NumericEntry::Value(value) => Some(*value),
            NumericEntry::Invalid(_) => None,
        }
    }

    /// Returns true if the entry holds a parsed value
    pub fn is_parsed(&self) -> bool {
        matches!(self, NumericEntry::Value(_))
    }

    /// A parsed zero entry
    pub fn zero() -> Self {
        NumericEntry::Value(Decimal::ZERO)
    }
}

impl From<Decimal> for NumericEntry {
    fn from(value: Decimal) -> Self {
        NumericEntry::Value(value)
    }
}

impl fmt::Display for NumericEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericEntry::Value(value) => write!(f, "{value}"),
            NumericEntry::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

/// The working application record owned by the form
///
/// Holds current, possibly invalid, field values. Product type and currency
/// stay raw strings until validation checks them against the injected
/// catalog and the supported currency set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub monthly_income: NumericEntry,
    pub other_income: NumericEntry,
    pub requested_amount: NumericEntry,
    pub product_type: String,
    pub term: NumericEntry,
    pub include_insurance: bool,
    pub initial_contribution: NumericEntry,
    pub currency: String,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            monthly_income: NumericEntry::zero(),
            other_income: NumericEntry::zero(),
            requested_amount: NumericEntry::zero(),
            product_type: "personal".to_string(),
            term: NumericEntry::Value(Decimal::from(12)),
            include_insurance: false,
            initial_contribution: NumericEntry::zero(),
            currency: Currency::MZN.code().to_string(),
        }
    }
}

impl ApplicationDraft {
    /// Stores a raw edit into the addressed field
    ///
    /// Numeric fields parse immediately; no validation runs here.
    pub fn apply(&mut self, field: Field, value: &RawValue) {
        match field {
            Field::FullName => self.full_name = value.as_text(),
            Field::Email => self.email = value.as_text(),
            Field::PhoneNumber => self.phone_number = value.as_text(),
            Field::ProductType => self.product_type = value.as_text(),
            Field::Currency => self.currency = value.as_text(),
            Field::IncludeInsurance => self.include_insurance = value.truthy(),
            Field::MonthlyIncome => self.monthly_income = NumericEntry::parse(&value.as_text()),
            Field::OtherIncome => self.other_income = NumericEntry::parse(&value.as_text()),
            Field::RequestedAmount => {
                self.requested_amount = NumericEntry::parse(&value.as_text())
            }
            Field::Term => self.term = NumericEntry::parse(&value.as_text()),
            Field::InitialContribution => {
                self.initial_contribution = NumericEntry::parse(&value.as_text())
            }
        }
    }

    /// Renders the stored state of a field for display and diagnostics
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::Email => self.email.clone(),
            Field::PhoneNumber => self.phone_number.clone(),
            Field::ProductType => self.product_type.clone(),
            Field::Currency => self.currency.clone(),
            Field::IncludeInsurance => self.include_insurance.to_string(),
            Field::MonthlyIncome => self.monthly_income.to_string(),
            Field::OtherIncome => self.other_income.to_string(),
            Field::RequestedAmount => self.requested_amount.to_string(),
            Field::Term => self.term.to_string(),
            Field::InitialContribution => self.initial_contribution.to_string(),
        }
    }
}

/// A validated loan application
///
/// Produced only by a successful validation pass; every field is fully
/// typed. Ownership passes to the simulation callback on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub monthly_income: Decimal,
    pub other_income: Decimal,
    pub requested_amount: Decimal,
    pub product_type: ProductType,
    #[serde(rename = "term")]
    pub term_months: u32,
    pub include_insurance: bool,
    pub initial_contribution: Decimal,
    pub currency: Currency,
}

impl LoanApplication {
    /// Combined monthly income as money in the application's currency
    pub fn total_monthly_income(&self) -> Money {
        Money::new(self.monthly_income + self.other_income, self.currency)
    }

    /// The requested amount as money
    pub fn requested(&self) -> Money {
        Money::new(self.requested_amount, self.currency)
    }

    /// The initial contribution as money
    pub fn down_payment(&self) -> Money {
        Money::new(self.initial_contribution, self.currency)
    }

    /// The amount left to finance after the initial contribution
    pub fn financed_amount(&self) -> Money {
        Money::new(self.requested_amount - self.initial_contribution, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_field_wire_names() {
        assert_eq!(Field::FullName.as_str(), "fullName");
        assert_eq!(Field::MonthlyIncome.as_str(), "monthlyIncome");
        assert_eq!(Field::IncludeInsurance.as_str(), "includeInsurance");
    }

    #[test]
    fn test_field_from_str_round_trips() {
        for field in Field::ALL {
            let parsed: Field = field.as_str().parse().unwrap();
            assert_eq!(parsed, field);
        }
        assert!("notAField".parse::<Field>().is_err());
    }

    #[test]
    fn test_numeric_entry_parses_decimals() {
        assert_eq!(NumericEntry::parse("30000").value(), Some(dec!(30000)));
        assert_eq!(NumericEntry::parse(" 1500.75 ").value(), Some(dec!(1500.75)));
        assert_eq!(NumericEntry::parse("-5").value(), Some(dec!(-5)));
    }

    #[test]
    fn test_numeric_entry_keeps_unparseable_text() {
        let entry = NumericEntry::parse("abc");
        assert!(!entry.is_parsed());
        assert_eq!(entry.to_string(), "abc");
    }

    #[test]
    fn test_empty_input_is_unparseable() {
        assert!(!NumericEntry::parse("").is_parsed());
        assert!(!NumericEntry::parse("   ").is_parsed());
    }

    #[test]
    fn test_draft_defaults() {
        let draft = ApplicationDraft::default();
        assert_eq!(draft.full_name, "");
        assert_eq!(draft.monthly_income.value(), Some(Decimal::ZERO));
        assert_eq!(draft.requested_amount.value(), Some(Decimal::ZERO));
        assert_eq!(draft.product_type, "personal");
        assert_eq!(draft.term.value(), Some(dec!(12)));
        assert!(!draft.include_insurance);
        assert_eq!(draft.currency, "MZN");
    }

    #[test]
    fn test_apply_routes_to_the_addressed_field() {
        let mut draft = ApplicationDraft::default();
        draft.apply(Field::FullName, &RawValue::text("Ana Silva"));
        draft.apply(Field::RequestedAmount, &RawValue::text("5000"));
        draft.apply(Field::IncludeInsurance, &RawValue::Flag(true));

        assert_eq!(draft.full_name, "Ana Silva");
        assert_eq!(draft.requested_amount.value(), Some(dec!(5000)));
        assert!(draft.include_insurance);
        // untouched fields keep their defaults
        assert_eq!(draft.email, "");
    }

    #[test]
    fn test_truthy_text_sets_boolean_field() {
        let mut draft = ApplicationDraft::default();
        draft.apply(Field::IncludeInsurance, &RawValue::text("Yes"));
        assert!(draft.include_insurance);
        draft.apply(Field::IncludeInsurance, &RawValue::text("nope"));
        assert!(!draft.include_insurance);
    }

    #[test]
    fn test_application_money_accessors() {
        let application = LoanApplication {
            full_name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone_number: "+258840000000".to_string(),
            monthly_income: dec!(30000),
            other_income: dec!(2000),
            requested_amount: dec!(10000),
            product_type: ProductType::new("personal"),
            term_months: 12,
            include_insurance: false,
            initial_contribution: dec!(1000),
            currency: Currency::MZN,
        };

        assert_eq!(application.total_monthly_income().amount(), dec!(32000));
        assert_eq!(application.financed_amount().amount(), dec!(9000));
        assert_eq!(application.requested().currency(), Currency::MZN);
    }

    #[test]
    fn test_application_serializes_with_wire_names() {
        let application = LoanApplication {
            full_name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone_number: "+258840000000".to_string(),
            monthly_income: dec!(30000),
            other_income: Decimal::ZERO,
            requested_amount: dec!(10000),
            product_type: ProductType::new("personal"),
            term_months: 12,
            include_insurance: false,
            initial_contribution: Decimal::ZERO,
            currency: Currency::MZN,
        };

        let json = serde_json::to_value(&application).unwrap();
        assert_eq!(json["fullName"], "Ana Silva");
        assert_eq!(json["phoneNumber"], "+258840000000");
        assert_eq!(json["term"], 12);
        assert_eq!(json["currency"], "MZN");
        assert_eq!(json["productType"], "personal");
    }
}
