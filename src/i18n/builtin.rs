//! Locales and dictionaries embedded in the binary.
//!
//! The same files live under `locales/` so the built-in set can also be loaded
//! with [`TranslationService::from_dir`](crate::i18n::TranslationService::from_dir).

use crate::i18n::dictionary::Dictionary;
use crate::i18n::error::{I18nError, Result};
use crate::i18n::registry::{LocaleManifest, LocaleRegistry};
use crate::i18n::service::TranslationService;
use crate::i18n::store::DictionaryStore;

const MANIFEST: &str = include_str!("../../locales/locales.json");

/// Embedded dictionaries as (locale code, JSON source)
const DICTIONARIES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("fr", include_str!("../../locales/fr.json")),
    ("it", include_str!("../../locales/it.json")),
];

pub(crate) fn load() -> Result<TranslationService> {
    let manifest: LocaleManifest =
        serde_json::from_str(MANIFEST).map_err(|source| I18nError::Parse {
            origin: "built-in locales.json".to_string(),
            source,
        })?;
    let registry = LocaleRegistry::from_manifest(manifest)?;

    let mut store = DictionaryStore::new();
    for (code, json) in DICTIONARIES {
        let origin = format!("built-in {}.json", code);
        store.insert(*code, Dictionary::from_json_str(&origin, json)?);
    }

    TranslationService::new(registry, store)
}
