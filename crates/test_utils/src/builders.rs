//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rust_decimal::Decimal;

use domain_intake::{ApplicationDraft, Field, RawValue};

/// Builder for constructing application drafts
///
/// Starts from a complete, valid personal-loan draft; each `with_*` call
/// overrides one field.
pub struct DraftBuilder {
    draft: ApplicationDraft,
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftBuilder {
    /// Creates a builder seeded with a valid draft
    pub fn new() -> Self {
        let mut draft = ApplicationDraft::default();
        draft.apply(Field::FullName, &RawValue::text("Carlos Macamo"));
        draft.apply(Field::Email, &RawValue::text("carlos@example.com"));
        draft.apply(Field::PhoneNumber, &RawValue::text("+258821234567"));
        draft.apply(Field::MonthlyIncome, &RawValue::text("45000"));
        draft.apply(Field::RequestedAmount, &RawValue::text("200000"));
        Self { draft }
    }

    /// Creates a builder seeded with randomized applicant details
    pub fn randomized() -> Self {
        let mut builder = Self::new();
        let name: String = Name().fake();
        let email: String = FreeEmail().fake();
        let phone: String = PhoneNumber().fake();
        let income: u64 = (10_000u64..500_000u64).fake();
        let amount: u64 = (1_000u64..5_000_000u64).fake();

        builder.draft.apply(Field::FullName, &RawValue::text(name));
        builder.draft.apply(Field::Email, &RawValue::text(email));
        builder.draft.apply(Field::PhoneNumber, &RawValue::text(phone));
        builder
            .draft
            .apply(Field::MonthlyIncome, &RawValue::text(income.to_string()));
        builder
            .draft
            .apply(Field::RequestedAmount, &RawValue::text(amount.to_string()));
        builder
    }

    /// Sets the full name
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.draft.apply(Field::FullName, &RawValue::text(name.into()));
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.draft.apply(Field::Email, &RawValue::text(email.into()));
        self
    }

    /// Sets the phone number
    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.draft.apply(Field::PhoneNumber, &RawValue::text(phone.into()));
        self
    }

    /// Sets the monthly income
    pub fn with_monthly_income(mut self, income: Decimal) -> Self {
        self.draft
            .apply(Field::MonthlyIncome, &RawValue::text(income.to_string()));
        self
    }

    /// Sets the other income
    pub fn with_other_income(mut self, income: Decimal) -> Self {
        self.draft
            .apply(Field::OtherIncome, &RawValue::text(income.to_string()));
        self
    }

    /// Sets the requested amount
    pub fn with_requested_amount(mut self, amount: Decimal) -> Self {
        self.draft
            .apply(Field::RequestedAmount, &RawValue::text(amount.to_string()));
        self
    }

    /// Sets the product code
    pub fn with_product_type(mut self, code: impl Into<String>) -> Self {
        self.draft.apply(Field::ProductType, &RawValue::text(code.into()));
        self
    }

    /// Sets the term in months
    pub fn with_term(mut self, months: u32) -> Self {
        self.draft.apply(Field::Term, &RawValue::text(months.to_string()));
        self
    }

    /// Sets the insurance flag
    pub fn with_insurance(mut self, include: bool) -> Self {
        self.draft.apply(Field::IncludeInsurance, &RawValue::Flag(include));
        self
    }

    /// Sets the initial contribution
    pub fn with_initial_contribution(mut self, amount: Decimal) -> Self {
        self.draft
            .apply(Field::InitialContribution, &RawValue::text(amount.to_string()));
        self
    }

    /// Sets the currency code
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.draft.apply(Field::Currency, &RawValue::text(code.into()));
        self
    }

    /// Stores arbitrary raw text into a field, exactly as typed
    pub fn with_raw(mut self, field: Field, raw: impl Into<String>) -> Self {
        self.draft.apply(field, &RawValue::text(raw.into()));
        self
    }

    /// Builds the draft
    pub fn build(self) -> ApplicationDraft {
        self.draft
    }
}
