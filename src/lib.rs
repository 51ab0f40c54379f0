//! Cookie-consent state and localization core for a multilingual
//! marketing site.
//!
//! The crate has two halves:
//!
//! - [`consent`]: the visitor's cookie decision — a durable store, a
//!   fail-closed gate for tracking clients, two headless UI controllers
//!   (first-visit banner, reopenable settings panel), and an in-process
//!   event bus keeping them consistent without coupling them.
//! - [`i18n`]: the supported locales and their dictionaries — typed
//!   per-locale strings, path-based resolution with fallback to the
//!   default locale, placeholder interpolation, and dictionary QA.
//!
//! Rendering, animation, and SEO tag emission live with the embedding
//! application; this crate only decides and resolves.

pub mod config;
pub mod consent;
pub mod i18n;
