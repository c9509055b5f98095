//! Field-change diagnostics
//!
//! Every edit and reset can be mirrored to an optional [`FieldObserver`].
//! The observer is a logging-only side channel: the form never reads
//! anything back from it, and disabling it cannot change form behavior.

use crate::application::Field;

/// What kind of change produced an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A single-field edit
    Edit,
    /// A form-wide reset to defaults
    Reset,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Edit => "edit",
            ChangeKind::Reset => "reset",
        }
    }
}

/// Observer hook for field changes
///
/// Implementations receive a display snapshot of the stored value, never
/// mutable access to the draft.
pub trait FieldObserver {
    fn on_field_change(&self, field: Field, value: &str, change: ChangeKind);
}

/// Observer that logs every change at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FieldObserver for TracingObserver {
    fn on_field_change(&self, field: Field, value: &str, change: ChangeKind) {
        tracing::debug!(
            target: "intake::watch",
            field = field.as_str(),
            value,
            change = change.as_str(),
            "field change"
        );
    }
}
