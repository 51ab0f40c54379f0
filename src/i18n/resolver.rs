//! Path-based translation resolution with locale fallback.
//!
//! The typed dictionaries in `strings` are the source of truth; this module
//! projects them to JSON trees once per process so that callers holding only
//! a dotted key at runtime (templating, CMS-driven fragments) can still
//! resolve text. Resolution never fails: an unresolved or mistyped path
//! falls back to the default locale's tree, then to the caller-supplied
//! fallback, then to the empty string.

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::i18n::{strings_for, Locale, LocaleRegistry, ResolverMetrics};

/// JSON projections of the typed dictionaries, one per enabled locale
static DICTIONARIES: OnceLock<HashMap<&'static str, Value>> = OnceLock::new();

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn dictionaries() -> &'static HashMap<&'static str, Value> {
    DICTIONARIES.get_or_init(|| {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| {
                let locale =
                    Locale::from_code(config.code).expect("enabled locale should be valid");
                let tree = serde_json::to_value(strings_for(locale))
                    .expect("typed dictionaries should serialize");
                (config.code, tree)
            })
            .collect()
    })
}

/// Get the JSON dictionary tree for a locale.
pub fn dictionary(locale: Locale) -> &'static Value {
    dictionaries()
        .get(locale.code())
        .expect("every enabled locale has a dictionary")
}

/// Walk a dictionary tree along a dot-separated path.
fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

/// Resolve a dotted path to a localized string.
///
/// Resolution order:
/// 1. the requested locale's dictionary
/// 2. the default locale's dictionary
/// 3. the caller-supplied fallback (or the empty string)
///
/// Only string leaves resolve; a present-but-non-string leaf (e.g. an
/// array) is a miss for this scalar resolver — use [`resolve_list`] for
/// list-valued keys.
///
/// # Arguments
/// * `locale` - The locale to resolve in
/// * `path` - Dot-separated key (e.g., "cookies.types.analytics.title")
/// * `fallback` - Text returned when the path resolves nowhere
///
/// This function never panics and always returns a string.
pub fn resolve(locale: Locale, path: &str, fallback: Option<&str>) -> String {
    let metrics = ResolverMetrics::global();

    if let Some(Value::String(text)) = lookup(dictionary(locale), path) {
        metrics.record_exact_hit();
        return text.clone();
    }

    let default = Locale::default_locale();
    if locale != default {
        if let Some(Value::String(text)) = lookup(dictionary(default), path) {
            metrics.record_locale_fallback();
            debug!(
                "Key '{}' not found for locale '{}', using default locale",
                path,
                locale.code()
            );
            return text.clone();
        }
    }

    metrics.record_miss();
    debug!(
        "Missing translation key '{}' for locale '{}', using caller fallback",
        path,
        locale.code()
    );
    fallback.unwrap_or("").to_string()
}

/// Resolve a language code that may come from an untrusted source (URL
/// segment, Accept-Language header). Unsupported codes silently resolve
/// against the default locale.
pub fn resolve_code(code: &str, path: &str, fallback: Option<&str>) -> String {
    resolve(Locale::from_code_or_default(code), path, fallback)
}

/// Resolve a dotted path to a list of localized strings.
///
/// This is the array-aware entry point for list rendering. Non-string
/// elements are skipped. Falls back to the default locale's list; an
/// unresolved path yields an empty vector.
pub fn resolve_list(locale: Locale, path: &str) -> Vec<String> {
    if let Some(items) = lookup(dictionary(locale), path).and_then(Value::as_array) {
        return collect_strings(items);
    }

    let default = Locale::default_locale();
    if locale != default {
        if let Some(items) = lookup(dictionary(default), path).and_then(Value::as_array) {
            return collect_strings(items);
        }
    }

    debug!(
        "Missing list key '{}' for locale '{}'",
        path,
        locale.code()
    );
    Vec::new()
}

fn collect_strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// Substitute `{name}` placeholders in a resolved string.
///
/// Placeholders without a matching parameter are left intact so that a
/// missing value is visible in QA instead of silently disappearing.
///
/// # Arguments
/// * `template` - The resolved string, possibly containing `{name}` markers
/// * `params` - `(name, value)` pairs to substitute
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("valid placeholder regex"));

    regex
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
