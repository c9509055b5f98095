//! Intake configuration

use serde::Deserialize;

use rust_decimal::Decimal;

use crate::application::{ApplicationDraft, NumericEntry};

/// Intake configuration
///
/// Deployment-level defaults for new forms. Values come from the
/// environment with the `SIMULATOR_` prefix (e.g. `SIMULATOR_LOCALE=pt`).
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Default currency code for new drafts
    pub default_currency: String,
    /// Default loan term in months
    pub default_term_months: u32,
    /// Default product code
    pub default_product: String,
    /// Locale requested for display labels
    pub locale: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            default_currency: "MZN".to_string(),
            default_term_months: 12,
            default_product: "personal".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl IntakeConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("default_currency", "MZN")?
            .set_default("default_term_months", 12)?
            .set_default("default_product", "personal")?
            .set_default("locale", "en")?
            .add_source(config::Environment::with_prefix("SIMULATOR"))
            .build()?
            .try_deserialize()
    }

    /// Builds the draft new forms start from and reset to
    pub fn default_draft(&self) -> ApplicationDraft {
        ApplicationDraft {
            product_type: self.default_product.clone(),
            currency: self.default_currency.clone(),
            term: NumericEntry::from(Decimal::from(self.default_term_months)),
            ..ApplicationDraft::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_the_standard_draft() {
        let config = IntakeConfig::default();
        assert_eq!(config.default_draft(), ApplicationDraft::default());
    }

    #[test]
    fn test_configured_defaults_flow_into_the_draft() {
        let config = IntakeConfig {
            default_currency: "USD".to_string(),
            default_term_months: 24,
            default_product: "home".to_string(),
            locale: "pt".to_string(),
        };

        let draft = config.default_draft();
        assert_eq!(draft.currency, "USD");
        assert_eq!(draft.term.value(), Some(dec!(24)));
        assert_eq!(draft.product_type, "home");
    }

    #[test]
    fn test_from_env_with_empty_environment_uses_defaults() {
        let config = IntakeConfig::from_env().unwrap();
        assert_eq!(config.default_currency, "MZN");
        assert_eq!(config.default_term_months, 12);
        assert_eq!(config.locale, "en");
    }
}
