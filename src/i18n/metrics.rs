//! Per-locale dictionary coverage metrics.
//!
//! Coverage is measured against the default locale's dictionary, since that is
//! where unresolved keys fall back to.

use crate::i18n::service::TranslationService;
use serde::Serialize;

/// Coverage statistics for a single locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    /// Locale code
    pub code: String,

    /// Number of addressable keys in this locale's dictionary
    pub keys: usize,

    /// Number of default-locale keys this locale does not translate
    pub missing: usize,

    /// Translated share of default-locale keys as a percentage (0-100)
    pub coverage: f64,
}

/// Coverage report for every registered locale.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Code of the default locale coverage is measured against
    pub default_locale: String,

    /// Number of keys in the default dictionary
    pub default_keys: usize,

    /// One entry per registered locale, in registry order
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Collect coverage for all locales of `service`.
    pub fn collect(service: &TranslationService) -> CoverageReport {
        let registry = service.registry();
        let store = service.store();
        let default_code = registry.default_code();

        let default_keys = store
            .get(default_code)
            .map(|dict| dict.leaf_keys())
            .unwrap_or_default();
        let total = default_keys.len();

        let locales = registry
            .codes()
            .filter_map(|code| store.get(code).map(|dict| (code, dict)))
            .map(|(code, dict)| {
                let missing = default_keys.iter().filter(|key| !dict.contains(key)).count();
                let coverage = if total > 0 {
                    ((total - missing) as f64 / total as f64) * 100.0
                } else {
                    100.0
                };

                LocaleCoverage {
                    code: code.to_string(),
                    keys: dict.leaf_keys().len(),
                    missing,
                    coverage,
                }
            })
            .collect();

        CoverageReport {
            default_locale: default_code.to_string(),
            default_keys: total,
            locales,
        }
    }

    /// Coverage entry for `code`.
    pub fn get(&self, code: &str) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|locale| locale.code == code)
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

    fn service(en: serde_json::Value, fr: serde_json::Value) -> TranslationService {
        let registry = LocaleRegistry::new(
            vec![
                LocaleDescriptor::new("en", "English"),
                LocaleDescriptor::new("fr", "Français"),
            ],
            "en",
        )
        .unwrap();
        let store = DictionaryStore::new()
            .with("en", dictionary(en))
            .with("fr", dictionary(fr));

        TranslationService::new(registry, store).unwrap()
    }

    #[test]
    fn test_default_locale_fully_covered() {
        let service = service(json!({ "a": "A", "b": "B" }), json!({}));
        let report = CoverageReport::collect(&service);

        let en = report.get("en").unwrap();
        assert_eq!(en.keys, 2);
        assert_eq!(en.missing, 0);
        assert_eq!(en.coverage, 100.0);
    }

    #[test]
    fn test_partial_coverage() {
        // 3 of 4 keys translated = 75% coverage
        let service = service(
            json!({ "nav": { "home": "Home", "about": "About", "blog": "Blog" }, "title": "Site" }),
            json!({ "nav.home": "Accueil", "nav": { "about": "À propos" }, "title": "Site" }),
        );
        let report = CoverageReport::collect(&service);

        let fr = report.get("fr").unwrap();
        assert_eq!(report.default_keys, 4);
        assert_eq!(fr.keys, 3);
        assert_eq!(fr.missing, 1);
        assert_eq!(fr.coverage, 75.0);
    }

    #[test]
    fn test_zero_coverage() {
        let service = service(json!({ "a": "A" }), json!({}));
        let report = CoverageReport::collect(&service);

        assert_eq!(report.get("fr").unwrap().coverage, 0.0);
    }

    #[test]
    fn test_empty_default_dictionary() {
        let service = service(json!({}), json!({ "extra": "Extra" }));
        let report = CoverageReport::collect(&service);

        assert_eq!(report.default_keys, 0);
        assert_eq!(report.get("fr").unwrap().coverage, 100.0);
    }

    #[test]
    fn test_unreachable_nested_entries_do_not_lower_coverage() {
        let shape = json!({ "nav.sub": { "x": "X" }, "title": "Site" });
        let service = service(shape.clone(), shape);
        let report = CoverageReport::collect(&service);

        let en = report.get("en").unwrap();
        assert_eq!(report.default_keys, 1);
        assert_eq!(en.missing, 0);
        assert_eq!(en.coverage, 100.0);
        assert_eq!(report.get("fr").unwrap().coverage, 100.0);
    }

    #[test]
    fn test_report_preserves_registry_order() {
        let service = service(json!({}), json!({}));
        let report = CoverageReport::collect(&service);

        let codes: Vec<_> = report.locales.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "fr"]);
        assert_eq!(report.default_locale, "en");
    }

    #[test]
    fn test_report_serializes() {
        let service = service(json!({ "a": "A" }), json!({ "a": "A" }));
        let json = serde_json::to_value(CoverageReport::collect(&service)).unwrap();

        assert_eq!(json["default_locale"], "en");
        assert_eq!(json["locales"][1]["coverage"], 100.0);
    }
}
