//! Localized display labels for form rendering
//!
//! The form itself never renders text; rendering layers look labels up by
//! key through a [`LabelCatalog`]. Catalogs are Fluent bundles, either built
//! from caller-supplied FTL source or from the built-in English and
//! Portuguese resources, with locale negotiation for the latter.
//!
//! Lookup is total: a missing key falls back to the key itself, so a stale
//! translation can never break rendering.

use fluent::{FluentBundle, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

use crate::error::CoreError;

/// Locales shipped with the built-in label resources
pub const SUPPORTED_LOCALES: &[&str] = &["en", "pt"];

const EN_LABELS: &str = r#"
fullName = Full name
fullNamePlaceholder = Enter your full name
email = Email
emailPlaceholder = you@example.com
phoneNumber = Phone number
phoneNumberPlaceholder = +258 84 000 0000
monthlyIncome = Monthly income
otherIncome = Other income
requestedAmount = Requested amount
productType = Product type
selectProductType = Select a product type
term = Term (months)
includeInsurance = Include insurance
includeInsuranceDescription = Covers the outstanding balance if the unexpected happens
initialContribution = Initial contribution
currency = Currency
simulate = Simulate
reset = Reset
personal = Personal loan
home = Home loan
auto = Auto loan
business = Business loan
"#;

const PT_LABELS: &str = r#"
fullName = Nome completo
fullNamePlaceholder = Introduza o seu nome completo
email = Email
emailPlaceholder = voce@exemplo.com
phoneNumber = Número de telefone
phoneNumberPlaceholder = +258 84 000 0000
monthlyIncome = Rendimento mensal
otherIncome = Outros rendimentos
requestedAmount = Montante solicitado
productType = Tipo de produto
selectProductType = Seleccione o tipo de produto
term = Prazo (meses)
includeInsurance = Incluir seguro
includeInsuranceDescription = Cobre o saldo em dívida em caso de imprevisto
initialContribution = Entrada inicial
currency = Moeda
simulate = Simular
reset = Limpar
personal = Crédito pessoal
home = Crédito habitação
auto = Crédito automóvel
business = Crédito empresarial
"#;

/// Lookup table mapping label keys to localized display strings
///
/// Wraps a Fluent bundle for a single negotiated locale. The catalog is an
/// external collaborator of the form: rendering layers own one, the form
/// never depends on it.
pub struct LabelCatalog {
    locale: LanguageIdentifier,
    bundle: FluentBundle<FluentResource>,
}

impl LabelCatalog {
    /// Builds a catalog from caller-supplied FTL source
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Localization` if the locale or the FTL source
    /// fails to parse.
    pub fn new(locale: &str, source: &str) -> Result<Self, CoreError> {
        let langid: LanguageIdentifier = locale
            .trim()
            .parse()
            .map_err(|_| CoreError::localization(format!("invalid locale: {locale}")))?;

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|_| CoreError::localization("label resource failed to parse"))?;

        let mut bundle = FluentBundle::new(vec![langid.clone()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|_| CoreError::localization("duplicate message ids in label resource"))?;

        Ok(Self {
            locale: langid,
            bundle,
        })
    }

    /// Builds a catalog for the built-in resources, negotiating the closest
    /// supported locale
    ///
    /// Requests like `pt-MZ` resolve to the Portuguese resource; anything
    /// unsupported falls back to English.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Localization` if the requested locale is not a
    /// valid language identifier.
    pub fn builtin(requested: &str) -> Result<Self, CoreError> {
        let requested_id: LanguageIdentifier = requested
            .trim()
            .parse()
            .map_err(|_| CoreError::localization(format!("invalid locale: {requested}")))?;

        let available: Vec<LanguageIdentifier> = SUPPORTED_LOCALES
            .iter()
            .filter_map(|l| l.parse().ok())
            .collect();
        let default = available
            .first()
            .cloned()
            .ok_or_else(|| CoreError::localization("no built-in locales available"))?;

        let negotiated = {
            let matches = negotiate_languages(
                &[requested_id],
                &available,
                Some(&default),
                NegotiationStrategy::Filtering,
            );
            matches.first().map(|l| (**l).clone())
        };
        let chosen = negotiated.unwrap_or(default);

        let source = if chosen.language.as_str() == "pt" {
            PT_LABELS
        } else {
            EN_LABELS
        };
        Self::new(&chosen.to_string(), source)
    }

    /// Returns the localized display string for a label key
    ///
    /// Falls back to the key itself when the key is unknown.
    pub fn label(&self, key: &str) -> String {
        let message = match self.bundle.get_message(key) {
            Some(message) => message,
            None => return key.to_string(),
        };
        let pattern = match message.value() {
            Some(pattern) => pattern,
            None => return key.to_string(),
        };

        let mut errors = Vec::new();
        let rendered = self.bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            rendered.into_owned()
        } else {
            key.to_string()
        }
    }

    /// Returns true if the catalog has a message for the key
    pub fn has(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    /// Returns the catalog's resolved locale
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }
}
