//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales the site is
//! published in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata and settings for a specific locale, including
/// its code, names, enabled status, and the outbound metadata tags the
/// SEO layer emits for it (OpenGraph locale, hreflang).
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "cs", "de")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Czech")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Čeština")
    pub native_name: &'static str,

    /// OpenGraph locale tag emitted in page metadata (e.g., "en_US")
    pub og_locale: &'static str,

    /// hreflang code emitted in alternate-language link tags
    pub hreflang: &'static str,

    /// Whether this is the default/fallback locale (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// This registry contains all supported locales and provides methods to query
/// and access them. It's initialized once on first access and remains immutable
/// thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    ///
    /// This method initializes the registry on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "cs")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales.
    ///
    /// # Returns
    /// A vector of references to all locale configurations where `enabled` is true.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is the fallback target for every unresolved
    /// translation lookup. There should be exactly one default locale.
    ///
    /// # Returns
    /// A reference to the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code to check
    ///
    /// # Returns
    /// `true` if the locale exists and is enabled, `false` otherwise.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// This function returns the set of locales the site is published in.
/// English is the default/fallback locale.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            hreflang: "en",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "cs",
            name: "Czech",
            native_name: "Čeština",
            og_locale: "cs_CZ",
            hreflang: "cs",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            og_locale: "de_DE",
            hreflang: "de",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "uk",
            name: "Ukrainian",
            native_name: "Українська",
            og_locale: "uk_UA",
            hreflang: "uk",
            is_default: false,
            enabled: true,
        },
    ]
}
