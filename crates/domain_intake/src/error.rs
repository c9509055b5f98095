//! Intake domain errors

use thiserror::Error;

/// Errors that can occur in the intake domain
///
/// Field-level validation failures are not errors in this sense; they are
/// aggregated into [`crate::ValidationErrors`] and reported through the
/// failure callback.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// A product catalog could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    /// A field name did not match any record field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Invalid intake configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl IntakeError {
    /// Creates a Configuration error with a message
    pub fn configuration(message: impl Into<String>) -> Self {
        IntakeError::Configuration(message.into())
    }
}
