//! Locale type: Flexible, validated locale representation.
//!
//! This module provides the `Locale` type, a small value type that is
//! guaranteed to name a supported, enabled locale from the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A validated locale.
///
/// This type represents a locale that has been validated against the registry.
/// It ensures that only supported, enabled locales can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "cs")
    code: &'static str,
}

impl Locale {
    /// English, the default/fallback locale.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Czech.
    pub const CZECH: Locale = Locale { code: "cs" };

    /// German.
    pub const GERMAN: Locale = Locale { code: "de" };

    /// Ukrainian.
    pub const UKRAINIAN: Locale = Locale { code: "uk" };

    /// Create a Locale from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "cs")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is valid and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    ///
    /// # Example
    /// ```ignore
    /// let czech = Locale::from_code("cs")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Create a Locale from a language code, falling back to the default
    /// locale when the code is unknown or disabled.
    ///
    /// Unsupported languages are not an error for page rendering; they
    /// silently resolve to the default locale.
    pub fn from_code_or_default(code: &str) -> Locale {
        Locale::from_code(code).unwrap_or_else(|_| Locale::default_locale())
    }

    /// Get the default/fallback locale.
    ///
    /// This is the locale every unresolved translation lookup falls back to.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the English name of the locale.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the OpenGraph locale tag (e.g., "cs_CZ") for outbound metadata.
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    /// Get the hreflang code for alternate-language link tags.
    pub fn hreflang(&self) -> &'static str {
        self.config().hreflang
    }

    /// Check if this is the default/fallback locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}
