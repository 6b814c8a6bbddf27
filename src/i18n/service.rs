//! Translation service: a co-validated locale registry and dictionary store.
//!
//! The service is immutable once built and is `Send + Sync`, so it can be
//! shared freely between request handlers. A process-wide instance is
//! available through [`TranslationService::global`]; components that prefer
//! explicit wiring can own a service and pass `&TranslationService` around.

use crate::i18n::builtin;
use crate::i18n::error::{I18nError, Result};
use crate::i18n::path;
use crate::i18n::registry::{LocaleDescriptor, LocaleManifest, LocaleRegistry};
use crate::i18n::routes::{self, LocaleRoute};
use crate::i18n::store::DictionaryStore;
use crate::i18n::translator::Translator;
use crate::i18n::validator::CoverageValidator;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};
use url::Url;

/// Name of the locale manifest inside a locales directory.
pub const MANIFEST_FILE: &str = "locales.json";

/// Global service instance (initialized lazily or via `install`)
static SERVICE: OnceLock<TranslationService> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct TranslationService {
    registry: LocaleRegistry,
    store: DictionaryStore,
}

impl TranslationService {
    /// Combine a registry and a store.
    ///
    /// # Errors
    /// * `MissingDictionary` if a registered locale has no dictionary
    /// * `UnregisteredDictionary` if a dictionary has no registered locale
    pub fn new(registry: LocaleRegistry, store: DictionaryStore) -> Result<Self> {
        if let Some(code) = registry.codes().find(|code| !store.contains(code)) {
            return Err(I18nError::MissingDictionary(code.to_string()));
        }

        let mut unregistered: Vec<_> = store
            .locales()
            .filter(|code| !registry.contains(code))
            .collect();
        unregistered.sort_unstable();
        if let Some(code) = unregistered.first() {
            return Err(I18nError::UnregisteredDictionary(code.to_string()));
        }

        Ok(Self { registry, store })
    }

    /// Load a service from a directory holding `locales.json` and one
    /// `<code>.json` dictionary per registered locale.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let manifest_path = dir.join(MANIFEST_FILE);

        let contents = std::fs::read_to_string(&manifest_path).map_err(|source| I18nError::Io {
            path: manifest_path.clone(),
            source,
        })?;
        let manifest: LocaleManifest =
            serde_json::from_str(&contents).map_err(|source| I18nError::Parse {
                origin: manifest_path.display().to_string(),
                source,
            })?;

        let registry = LocaleRegistry::from_manifest(manifest)?;
        let store = DictionaryStore::load_dir(dir, &[MANIFEST_FILE])?;
        let service = Self::new(registry, store)?;

        info!(
            "Loaded {} locales from {} (default: {})",
            service.registry.len(),
            dir.display(),
            service.registry.default_code()
        );
        service.log_coverage_issues();

        Ok(service)
    }

    /// The locales and dictionaries shipped with the crate.
    pub fn builtin() -> Result<Self> {
        builtin::load()
    }

    /// Get the process-wide service.
    ///
    /// Initializes to the built-in data set on first call unless a service was
    /// installed before.
    ///
    /// # Panics
    /// Panics if the built-in data set is invalid, which indicates a packaging
    /// error rather than a runtime condition.
    pub fn global() -> &'static TranslationService {
        SERVICE.get_or_init(|| {
            Self::builtin().expect("Built-in translations should always be valid")
        })
    }

    /// Install `service` as the process-wide instance.
    ///
    /// Must happen before the first call to [`TranslationService::global`].
    pub fn install(service: TranslationService) -> Result<&'static TranslationService> {
        SERVICE
            .set(service)
            .map_err(|_| I18nError::AlreadyInstalled)?;
        Ok(Self::global())
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// The fallback locale.
    pub fn default_locale(&self) -> &LocaleDescriptor {
        self.registry.default_locale()
    }

    /// Lookups bound to `locale`; unregistered locales resolve in the default.
    pub fn translator(&self, locale: &str) -> Translator<'_> {
        Translator::new(self, Some(locale))
    }

    /// Lookups bound to the default locale.
    pub fn default_translator(&self) -> Translator<'_> {
        Translator::new(self, None)
    }

    /// Active locale for a request path such as `/fr/about`.
    pub fn locale_from_path(&self, request_path: &str) -> &str {
        path::locale_from_path(&self.registry, request_path)
    }

    /// Active locale for a full request URL.
    pub fn locale_from_url(&self, url: &Url) -> &str {
        path::locale_from_url(&self.registry, url)
    }

    /// One route entry per registered locale.
    pub fn locale_routes(&self) -> Vec<LocaleRoute> {
        routes::locale_routes(&self.registry)
    }

    fn log_coverage_issues(&self) {
        let report = CoverageValidator::validate(self);
        for error in &report.errors {
            warn!("Locale configuration error: {}", error);
        }
        for warning in &report.warnings {
            warn!("{}", warning);
        }
    }
}
