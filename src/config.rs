use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::consent::DEFAULT_STORAGE_KEY;
use crate::i18n::Locale;

#[derive(Debug, Clone)]
pub struct Config {
    // Consent persistence
    pub storage_path: PathBuf,
    pub storage_key: String,

    // Localization
    pub site_locale: Locale,

    // Presentation hint: how long the renderer waits before revealing the
    // first-visit banner. Not used by the controllers themselves.
    pub banner_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_locale_code =
            std::env::var("SITE_LOCALE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            // Consent persistence
            storage_path: std::env::var("CONSENT_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/consent.json")),
            storage_key: std::env::var("CONSENT_STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string()),

            // Localization
            site_locale: Locale::from_code(&site_locale_code)
                .with_context(|| format!("SITE_LOCALE '{}' is not supported", site_locale_code))?,

            // Presentation
            banner_delay_ms: std::env::var("BANNER_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(400),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Env vars are process-wide; keep these serial.

    #[test]
    #[serial]
    fn test_defaults() {
        std::env::remove_var("SITE_LOCALE");
        std::env::remove_var("CONSENT_STORAGE_PATH");
        std::env::remove_var("CONSENT_STORAGE_KEY");
        std::env::remove_var("BANNER_DELAY_MS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from("data/consent.json"));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.site_locale, Locale::ENGLISH);
        assert_eq!(config.banner_delay_ms, 400);
    }

    #[test]
    #[serial]
    fn test_site_locale_from_env() {
        std::env::set_var("SITE_LOCALE", "cs");
        let config = Config::from_env().unwrap();
        assert_eq!(config.site_locale, Locale::CZECH);
        std::env::remove_var("SITE_LOCALE");
    }

    #[test]
    #[serial]
    fn test_unsupported_site_locale_is_an_error() {
        std::env::set_var("SITE_LOCALE", "xx");
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("SITE_LOCALE"));
        std::env::remove_var("SITE_LOCALE");
    }

    #[test]
    #[serial]
    fn test_invalid_banner_delay_falls_back() {
        std::env::set_var("BANNER_DELAY_MS", "not-a-number");
        let config = Config::from_env().unwrap();
        assert_eq!(config.banner_delay_ms, 400);
        std::env::remove_var("BANNER_DELAY_MS");
    }
}
