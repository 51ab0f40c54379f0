//! Dictionary quality validation module.
//!
//! This module checks every enabled locale's dictionary against the default
//! locale's: a translated dictionary must cover the same keys, with the same
//! leaf types, and each translated string must carry the same `{placeholder}`
//! set as its default-locale counterpart.
//!
//! The typed dictionaries already make a missing struct field a compile
//! error; this validator guards the softer properties (placeholders,
//! accidentally emptied strings) and is wired into the CLI for QA runs.

use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::i18n::{dictionary, Locale, LocaleRegistry};

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems (missing keys, type mismatches)
    pub errors: Vec<String>,

    /// Non-critical problems (placeholder drift, empty strings)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for localized dictionaries.
pub struct DictionaryValidator;

// Regex pattern for placeholder extraction (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate one locale's dictionary against the default locale's.
    ///
    /// # Arguments
    /// * `locale` - The locale to check; validating the default locale
    ///   itself only runs the empty-string checks
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate_locale(locale: Locale) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference = Self::leaves(dictionary(Locale::default_locale()));
        let candidate = Self::leaves(dictionary(locale));

        for (path, reference_leaf) in &reference {
            match candidate.get(path) {
                None => {
                    report
                        .errors
                        .push(format!("{}: missing key '{}'", locale.code(), path));
                }
                Some(leaf) if !Self::same_kind(reference_leaf, leaf) => {
                    report.errors.push(format!(
                        "{}: type mismatch at '{}' (expected {}, found {})",
                        locale.code(),
                        path,
                        Self::kind(reference_leaf),
                        Self::kind(leaf)
                    ));
                }
                Some(leaf) => {
                    Self::check_string_leaf(locale, path, reference_leaf, leaf, &mut report);
                }
            }
        }

        for path in candidate.keys() {
            if !reference.contains_key(path) {
                report.warnings.push(format!(
                    "{}: extra key '{}' not present in default locale",
                    locale.code(),
                    path
                ));
            }
        }

        report
    }

    /// Validate every enabled locale's dictionary.
    ///
    /// # Returns
    /// A single merged `ValidationReport` across all locales.
    pub fn validate_all() -> ValidationReport {
        let mut report = ValidationReport::new();
        for config in LocaleRegistry::get().list_enabled() {
            let locale = Locale::from_code(config.code).expect("enabled locale should be valid");
            report.merge(Self::validate_locale(locale));
        }
        report
    }

    fn check_string_leaf(
        locale: Locale,
        path: &str,
        reference_leaf: &Value,
        leaf: &Value,
        report: &mut ValidationReport,
    ) {
        let (Some(reference_text), Some(text)) = (reference_leaf.as_str(), leaf.as_str()) else {
            return;
        };

        if text.trim().is_empty() && !reference_text.trim().is_empty() {
            report
                .warnings
                .push(format!("{}: empty string at '{}'", locale.code(), path));
        }

        let reference_placeholders = Self::extract_placeholders(reference_text);
        let placeholders = Self::extract_placeholders(text);
        if reference_placeholders != placeholders {
            report.warnings.push(format!(
                "{}: placeholder mismatch at '{}' (expected {:?}, found {:?})",
                locale.code(),
                path,
                reference_placeholders,
                placeholders
            ));
        }
    }

    /// Flatten a dictionary tree into dotted leaf paths.
    ///
    /// Arrays count as leaves; list content is locale-specific by design
    /// and only its presence and type are validated.
    fn leaves(tree: &Value) -> BTreeMap<String, &Value> {
        let mut out = BTreeMap::new();
        Self::collect_leaves(tree, String::new(), &mut out);
        out
    }

    fn collect_leaves<'a>(node: &'a Value, prefix: String, out: &mut BTreeMap<String, &'a Value>) {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    Self::collect_leaves(child, path, out);
                }
            }
            _ => {
                out.insert(prefix, node);
            }
        }
    }

    fn same_kind(a: &Value, b: &Value) -> bool {
        Self::kind(a) == Self::kind(b)
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Extract the sorted set of `{placeholder}` names from a string
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("valid placeholder regex"));

        let mut names: Vec<String> = regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let names = DictionaryValidator::extract_placeholders("Saved {date}");
        assert_eq!(names, vec!["date"]);
    }

    #[test]
    fn test_extract_placeholders_multiple_sorted_deduped() {
        let names = DictionaryValidator::extract_placeholders("{b} {a} {b}");
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        let names = DictionaryValidator::extract_placeholders("No placeholders");
        assert!(names.is_empty());
    }

    // ==================== Leaf Collection Tests ====================

    #[test]
    fn test_leaves_flattens_nested_objects() {
        let tree = json!({"a": {"b": "x", "c": ["y"]}, "d": "z"});
        let leaves = DictionaryValidator::leaves(&tree);
        let paths: Vec<&str> = leaves.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["a.b", "a.c", "d"]);
    }

    // ==================== Real Dictionary Tests ====================

    #[test]
    fn test_all_site_dictionaries_are_clean() {
        let report = DictionaryValidator::validate_all();
        assert!(
            report.is_clean(),
            "errors: {:?}, warnings: {:?}",
            report.errors,
            report.warnings
        );
    }

    #[test]
    fn test_default_locale_validates_against_itself() {
        let report = DictionaryValidator::validate_locale(Locale::default_locale());
        assert!(report.is_clean());
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_merge() {
        let mut a = ValidationReport::new();
        a.errors.push("e1".to_string());
        let mut b = ValidationReport::new();
        b.warnings.push("w1".to_string());

        a.merge(b);
        assert_eq!(a.errors.len(), 1);
        assert_eq!(a.warnings.len(), 1);
    }
}
