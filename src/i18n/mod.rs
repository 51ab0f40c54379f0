//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized, extensible architecture for managing
//! the site's locales. All locale metadata, localized strings, and
//! resolution infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale value validated against the registry
//! - `strings`: Statically typed per-locale dictionaries
//! - `resolver`: Dotted-path resolution with locale fallback and interpolation
//! - `validator`: Dictionary completeness and placeholder validation
//! - `metrics`: Resolver observability
//!
//! # Example
//!
//! ```rust,ignore
//! use consent_core::i18n::{resolve, Locale};
//!
//! let locale = Locale::from_code_or_default("cs");
//! let label = resolve(locale, "cookies.banner.accept_all", None);
//! ```

mod locale;
mod metrics;
mod registry;
mod resolver;
mod strings;
mod validator;

pub use locale::Locale;
pub use metrics::{ResolverMetrics, ResolverReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::{dictionary, interpolate, resolve, resolve_code, resolve_list};
pub use strings::{
    strings_for, BannerStrings, CategoryCopy, CategoryStrings, CookieStrings, FooterStrings,
    LocaleStrings, ManagerStrings,
};
pub use validator::{DictionaryValidator, ValidationReport};
