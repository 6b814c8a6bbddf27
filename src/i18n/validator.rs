//! Locale configuration and dictionary coverage validation.
//!
//! Lookups always terminate in the default locale, so every key used on the
//! site should exist there. This module reports keys that break that rule,
//! untranslated keys in other locales, and malformed locale codes.

use crate::i18n::service::TranslationService;
use regex::Regex;
use std::sync::OnceLock;

/// Findings about locale data, split by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems with the locale configuration itself
    pub errors: Vec<String>,

    /// Coverage gaps that degrade to fallback text
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validator for locale codes and dictionary coverage.
pub struct CoverageValidator;

// Language subtag followed by optional region/script/variant subtags
static LOCALE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

impl CoverageValidator {
    /// Validate the locale codes and dictionaries of `service`.
    ///
    /// Locales are checked in registry order and keys in sorted order, so the
    /// report is deterministic.
    pub fn validate(service: &TranslationService) -> ValidationReport {
        let mut report = ValidationReport::default();
        let registry = service.registry();
        let store = service.store();
        let default_code = registry.default_code();

        for code in registry.codes() {
            if !Self::is_valid_code(code) {
                report.errors.push(format!("Malformed locale code: '{}'", code));
            }
        }

        let Some(default_dict) = store.get(default_code) else {
            return report;
        };
        let default_keys = default_dict.leaf_keys();

        for code in registry.codes().filter(|code| *code != default_code) {
            let Some(dict) = store.get(code) else {
                continue;
            };

            for key in dict.leaf_keys() {
                if !default_dict.contains(&key) {
                    report.warnings.push(format!(
                        "Key '{}' in locale '{}' is missing from default locale '{}'",
                        key, code, default_code
                    ));
                }
            }

            let untranslated: Vec<_> = default_keys
                .iter()
                .filter(|key| !dict.contains(key))
                .map(String::as_str)
                .collect();
            if !untranslated.is_empty() {
                report.warnings.push(format!(
                    "Locale '{}' is missing {} keys (falls back to '{}'): {}",
                    code,
                    untranslated.len(),
                    default_code,
                    untranslated.join(", ")
                ));
            }
        }

        report
    }

    /// Check a locale code against the `xx` / `xx-YY` shape used in routes.
    fn is_valid_code(code: &str) -> bool {
        let regex = LOCALE_CODE_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap());

        regex.is_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionary, DictionaryStore, LocaleDescriptor, LocaleRegistry};
    use serde_json::json;

    fn dictionary(value: serde_json::Value) -> Dictionary {
        serde_json::from_value(value).expect("valid dictionary")
    }

    fn service(locales: &[(&str, serde_json::Value)]) -> TranslationService {
        let descriptors = locales
            .iter()
            .map(|(code, _)| LocaleDescriptor::new(*code, code.to_uppercase()))
            .collect();
        let registry = LocaleRegistry::new(descriptors, locales[0].0).unwrap();
        let store = locales
            .iter()
            .fold(DictionaryStore::new(), |store, (code, value)| {
                store.with(*code, dictionary(value.clone()))
            });

        TranslationService::new(registry, store).unwrap()
    }

    // ==================== Locale Code Tests ====================

    #[test]
    fn test_valid_codes() {
        assert!(CoverageValidator::is_valid_code("en"));
        assert!(CoverageValidator::is_valid_code("fil"));
        assert!(CoverageValidator::is_valid_code("pt-BR"));
        assert!(CoverageValidator::is_valid_code("zh-Hant-TW"));
    }

    #[test]
    fn test_invalid_codes() {
        assert!(!CoverageValidator::is_valid_code(""));
        assert!(!CoverageValidator::is_valid_code("e"));
        assert!(!CoverageValidator::is_valid_code("en/fr"));
        assert!(!CoverageValidator::is_valid_code("en-"));
        assert!(!CoverageValidator::is_valid_code("english"));
    }

    #[test]
    fn test_malformed_code_is_error() {
        let service = service(&[("en", json!({})), ("en_US", json!({}))]);
        let report = CoverageValidator::validate(&service);

        assert!(report.has_errors());
        assert!(report.errors[0].contains("en_US"));
    }

    // ==================== Coverage Tests ====================

    #[test]
    fn test_full_coverage_is_clean() {
        let service = service(&[
            ("en", json!({ "nav": { "home": "Home" } })),
            ("fr", json!({ "nav.home": "Accueil" })),
        ]);

        let report = CoverageValidator::validate(&service);
        assert!(report.is_clean(), "unexpected report: {:?}", report);
    }

    #[test]
    fn test_key_missing_from_default() {
        let service = service(&[
            ("en", json!({ "nav": { "home": "Home" } })),
            ("fr", json!({ "nav": { "home": "Accueil", "blog": "Blog" } })),
        ]);

        let report = CoverageValidator::validate(&service);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'nav.blog'"));
        assert!(report.warnings[0].contains("missing from default locale 'en'"));
    }

    #[test]
    fn test_untranslated_keys_listed() {
        let service = service(&[
            ("en", json!({ "nav": { "home": "Home", "about": "About" }, "title": "Site" })),
            ("fr", json!({ "nav.home": "Accueil" })),
        ]);

        let report = CoverageValidator::validate(&service);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Locale 'fr' is missing 2 keys"));
        assert!(report.warnings[0].contains("nav.about, title"));
    }

    #[test]
    fn test_unreachable_nested_entries_not_reported() {
        let service = service(&[
            ("en", json!({ "nav.sub": { "x": "X" }, "title": "Site" })),
            ("fr", json!({ "nav.sub": { "x": "X" }, "title": "Site" })),
        ]);

        let report = CoverageValidator::validate(&service);
        assert!(report.is_clean(), "unexpected report: {:?}", report);
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::default();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
    }
}
