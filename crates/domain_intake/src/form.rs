//! Form-state container
//!
//! [`IntakeForm`] owns the working draft and implements the submission
//! protocol: store raw edits without validating, validate everything in one
//! pass on submit, and hand the outcome to exactly one of the two
//! caller-supplied callbacks. Submission never clears or alters field
//! values; only [`IntakeForm::reset`] does, back to the form's defaults.
//!
//! Each field edit and the submit action run as independent, non-overlapping
//! synchronous calls; the container is owned by a single caller and nothing
//! here blocks or suspends.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::instrument;

use core_kernel::FormId;

use crate::application::{ApplicationDraft, Field, LoanApplication, RawValue};
use crate::observer::{ChangeKind, FieldObserver};
use crate::schema::ValidationSchema;
use crate::validation::{ApplicationValidator, ValidationErrors};

/// Receiver of submission outcomes
///
/// Exactly one of the two methods is invoked per submission attempt.
pub trait SubmissionHandler {
    /// Called with the validated application; ownership passes to the
    /// handler (typically the simulation function).
    fn on_simulation_complete(&mut self, application: LoanApplication);

    /// Called with the aggregated per-field failures.
    fn on_validation_error(&mut self, errors: &ValidationErrors);
}

/// The form-state container
///
/// Holds current (possibly invalid) field values, a per-field update
/// operation, and a validate-and-submit operation.
///
/// # Examples
///
/// ```rust
/// use domain_intake::{Field, IntakeForm, LoanApplication, RawValue, SubmissionHandler,
///     ValidationErrors, ValidationSchema};
///
/// struct Collect(Option<LoanApplication>);
///
/// impl SubmissionHandler for Collect {
///     fn on_simulation_complete(&mut self, application: LoanApplication) {
///         self.0 = Some(application);
///     }
///     fn on_validation_error(&mut self, _errors: &ValidationErrors) {}
/// }
///
/// let mut form = IntakeForm::new(ValidationSchema::standard());
/// form.update_field(Field::FullName, RawValue::text("Ana Silva"));
/// form.update_field(Field::Email, RawValue::text("ana@example.com"));
/// form.update_field(Field::PhoneNumber, RawValue::text("+258840000000"));
/// form.update_field(Field::MonthlyIncome, RawValue::text("30000"));
/// form.update_field(Field::RequestedAmount, RawValue::text("10000"));
///
/// let mut handler = Collect(None);
/// assert!(form.submit(&mut handler));
/// assert!(handler.0.is_some());
/// ```
pub struct IntakeForm {
    id: FormId,
    schema: ValidationSchema,
    defaults: ApplicationDraft,
    values: ApplicationDraft,
    observer: Option<Box<dyn FieldObserver>>,
    pristine: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl IntakeForm {
    /// Creates a form over the given schema with the standard defaults
    pub fn new(schema: ValidationSchema) -> Self {
        Self::with_defaults(schema, ApplicationDraft::default())
    }

    /// Creates a form whose reset state is the given draft
    pub fn with_defaults(schema: ValidationSchema, defaults: ApplicationDraft) -> Self {
        let now = Utc::now();
        Self {
            id: FormId::new(),
            schema,
            values: defaults.clone(),
            defaults,
            observer: None,
            pristine: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches the diagnostic observer
    pub fn with_observer(mut self, observer: Box<dyn FieldObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The form's log-correlation identifier
    pub fn id(&self) -> FormId {
        self.id
    }

    /// Current field values
    pub fn values(&self) -> &ApplicationDraft {
        &self.values
    }

    /// The injected validation schema
    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    /// Returns true until the first edit after creation or reset
    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    /// When this form was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When this form last changed
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Stores a raw edit into one field
    ///
    /// Numeric fields parse immediately (unparseable text is retained as a
    /// sentinel); no validation occurs here.
    pub fn update_field(&mut self, field: Field, value: RawValue) {
        self.values.apply(field, &value);
        self.pristine = false;
        self.updated_at = Utc::now();
        tracing::debug!(form_id = %self.id, field = field.as_str(), "field updated");
        self.notify(field, ChangeKind::Edit);
    }

    /// Runs the validation pass without invoking callbacks
    pub fn try_submit(&self) -> Result<LoanApplication, ValidationErrors> {
        ApplicationValidator::validate(&self.schema, &self.values)
    }

    /// Validates the draft and dispatches the outcome
    ///
    /// Invokes `on_simulation_complete` with the validated application, or
    /// `on_validation_error` with the per-field failures; never both. Field
    /// values are left untouched either way.
    ///
    /// # Returns
    ///
    /// `true` if validation succeeded
    #[instrument(skip_all, fields(form_id = %self.id))]
    pub fn submit<H: SubmissionHandler + ?Sized>(&self, handler: &mut H) -> bool {
        match self.try_submit() {
            Ok(application) => {
                tracing::info!(product = application.product_type.as_str(), "application validated");
                handler.on_simulation_complete(application);
                true
            }
            Err(errors) => {
                tracing::debug!(failed_fields = errors.len(), "validation failed");
                handler.on_validation_error(&errors);
                false
            }
        }
    }

    /// Restores every field to the form's defaults
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.pristine = true;
        self.updated_at = Utc::now();
        tracing::debug!(form_id = %self.id, "form reset");
        for field in Field::ALL {
            self.notify(field, ChangeKind::Reset);
        }
    }

    fn notify(&self, field: Field, change: ChangeKind) {
        if let Some(observer) = &self.observer {
            observer.on_field_change(field, &self.values.display_value(field), change);
        }
    }
}

impl fmt::Debug for IntakeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntakeForm")
            .field("id", &self.id)
            .field("pristine", &self.pristine)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
