//! Locale registry: the ordered set of locales a site is published in.
//!
//! The registry is built once from static configuration (the built-in set or a
//! `locales.json` manifest) and is immutable thereafter. Registration order is
//! preserved because it drives the order of generated locale routes.

use crate::i18n::error::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display metadata for a registered locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDescriptor {
    /// Locale code used in URLs and dictionary file names (e.g., "en", "fr")
    pub code: String,

    /// Display name shown in locale pickers (e.g., "English", "Français")
    pub name: String,

    /// Optional short flag/region tag (e.g., "gb", "fr")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl LocaleDescriptor {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            flag: None,
        }
    }

    /// Attach a flag/region tag
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }
}

/// On-disk shape of `locales.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleManifest {
    /// Code of the fallback locale
    pub default: String,

    /// Registered locales, in display order
    pub locales: Vec<LocaleDescriptor>,
}

/// Ordered locale registry with a designated default locale.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleDescriptor>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Build a registry from descriptors and the default locale code.
    ///
    /// # Errors
    /// * `EmptyRegistry` if no locales are given
    /// * `DuplicateLocale` if a code appears twice
    /// * `UnknownDefaultLocale` if `default_code` is not among the descriptors
    pub fn new(locales: Vec<LocaleDescriptor>, default_code: &str) -> Result<Self> {
        if locales.is_empty() {
            return Err(I18nError::EmptyRegistry);
        }

        let mut seen = HashSet::with_capacity(locales.len());
        for locale in &locales {
            if !seen.insert(locale.code.as_str()) {
                return Err(I18nError::DuplicateLocale(locale.code.clone()));
            }
        }

        let default_index = locales
            .iter()
            .position(|locale| locale.code == default_code)
            .ok_or_else(|| I18nError::UnknownDefaultLocale(default_code.to_string()))?;

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Build a registry from a parsed manifest.
    pub fn from_manifest(manifest: LocaleManifest) -> Result<Self> {
        Self::new(manifest.locales, &manifest.default)
    }

    /// Look up a locale descriptor by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleDescriptor> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Check whether a code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All registered locales in registration order.
    pub fn list_all(&self) -> &[LocaleDescriptor] {
        &self.locales
    }

    /// Registered codes in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|locale| locale.code.as_str())
    }

    /// The fallback locale.
    pub fn default_locale(&self) -> &LocaleDescriptor {
        &self.locales[self.default_index]
    }

    /// Code of the fallback locale.
    pub fn default_code(&self) -> &str {
        &self.default_locale().code
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locales() -> Vec<LocaleDescriptor> {
        vec![
            LocaleDescriptor::new("en", "English").with_flag("gb"),
            LocaleDescriptor::new("fr", "Français").with_flag("fr"),
            LocaleDescriptor::new("it", "Italiano"),
        ]
    }

    #[test]
    fn test_new_sets_default() {
        let registry = LocaleRegistry::new(sample_locales(), "fr").expect("valid registry");
        assert_eq!(registry.default_code(), "fr");
        assert_eq!(registry.default_locale().name, "Français");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_get_by_code() {
        let registry = LocaleRegistry::new(sample_locales(), "en").unwrap();

        let config = registry.get_by_code("en").expect("en registered");
        assert_eq!(config.name, "English");
        assert_eq!(config.flag.as_deref(), Some("gb"));

        assert!(registry.get_by_code("it").unwrap().flag.is_none());
        assert!(registry.get_by_code("de").is_none());
    }

    #[test]
    fn test_contains() {
        let registry = LocaleRegistry::new(sample_locales(), "en").unwrap();
        assert!(registry.contains("fr"));
        assert!(!registry.contains("FR"));
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_codes_preserve_registration_order() {
        let registry = LocaleRegistry::new(sample_locales(), "it").unwrap();
        let codes: Vec<_> = registry.codes().collect();
        assert_eq!(codes, vec!["en", "fr", "it"]);
    }

    #[test]
    fn test_empty_registry_rejected() {
        let result = LocaleRegistry::new(Vec::new(), "en");
        assert!(matches!(result, Err(I18nError::EmptyRegistry)));
    }

    #[test]
    fn test_duplicate_locale_rejected() {
        let mut locales = sample_locales();
        locales.push(LocaleDescriptor::new("fr", "French again"));

        let result = LocaleRegistry::new(locales, "en");
        match result {
            Err(I18nError::DuplicateLocale(code)) => assert_eq!(code, "fr"),
            other => panic!("expected DuplicateLocale, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_default_rejected() {
        let result = LocaleRegistry::new(sample_locales(), "de");
        assert!(matches!(result, Err(I18nError::UnknownDefaultLocale(code)) if code == "de"));
    }

    #[test]
    fn test_manifest_deserialize() {
        let json = r#"{
            "default": "en",
            "locales": [
                { "code": "en", "name": "English", "flag": "gb" },
                { "code": "fr", "name": "Français" }
            ]
        }"#;

        let manifest: LocaleManifest = serde_json::from_str(json).expect("valid manifest");
        let registry = LocaleRegistry::from_manifest(manifest).unwrap();

        assert_eq!(registry.default_code(), "en");
        assert_eq!(registry.list_all()[1].flag, None);
    }
}
