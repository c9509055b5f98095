//! Loan Application Intake Domain
//!
//! This crate implements the data model and submission protocol of the loan
//! simulator's intake form: a draft record mutated field-by-field as the
//! applicant types, a single synchronous validation pass on submission, and
//! delegation of the outcome to caller-supplied handlers.
//!
//! # Submission protocol
//!
//! The [`IntakeForm`] container owns the working [`ApplicationDraft`].
//! Edits go through [`IntakeForm::update_field`], which stores raw input
//! without validating it (numeric fields are parsed eagerly into a
//! [`NumericEntry`], retaining unparseable text as a sentinel). Submission
//! validates the whole draft against the injected [`ValidationSchema`] and
//! invokes exactly one of the two [`SubmissionHandler`] callbacks:
//!
//! - `on_simulation_complete` with the fully-typed [`LoanApplication`], or
//! - `on_validation_error` with one [`FieldValidationError`] per offending
//!   field, aggregated in a [`ValidationErrors`] map.
//!
//! Neither outcome clears or alters the draft; the applicant may correct
//! fields and resubmit indefinitely.
//!
//! # Examples
//!
//! ```rust
//! use domain_intake::{Field, IntakeForm, RawValue, ValidationSchema};
//!
//! let mut form = IntakeForm::new(ValidationSchema::standard());
//! form.update_field(Field::FullName, RawValue::text("Ana Silva"));
//! form.update_field(Field::Email, RawValue::text("ana@example.com"));
//! form.update_field(Field::PhoneNumber, RawValue::text("+258840000000"));
//! form.update_field(Field::MonthlyIncome, RawValue::text("30000"));
//! form.update_field(Field::RequestedAmount, RawValue::text("10000"));
//!
//! let application = form.try_submit().expect("draft is valid");
//! assert_eq!(application.full_name, "Ana Silva");
//! assert_eq!(application.term_months, 12);
//! ```

pub mod application;
pub mod product;
pub mod schema;
pub mod validation;
pub mod form;
pub mod observer;
pub mod config;
pub mod error;

pub use application::{ApplicationDraft, Field, LoanApplication, NumericEntry, RawValue};
pub use product::{Product, ProductCatalog, ProductType};
pub use schema::ValidationSchema;
pub use validation::{ApplicationValidator, FieldValidationError, ValidationErrors};
pub use form::{IntakeForm, SubmissionHandler};
pub use observer::{ChangeKind, FieldObserver, TracingObserver};
pub use config::IntakeConfig;
pub use error::IntakeError;
