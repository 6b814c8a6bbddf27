//! Translation lookups bound to a single locale.

use crate::i18n::service::TranslationService;
use tracing::trace;

/// Key-to-text lookup closed over a locale and a shared [`TranslationService`].
///
/// Obtained from [`TranslationService::translator`]. Resolution order for a key:
///
/// 1. exact key, then dotted path, in the translator's locale
/// 2. exact key, then dotted path, in the registry's default locale
/// 3. the key itself, unchanged
///
/// An unregistered locale skips straight to step 2.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    service: &'a TranslationService,
    /// Registered code borrowed from the registry; `None` if the requested
    /// locale is not registered.
    locale: Option<&'a str>,
}

impl<'a> Translator<'a> {
    pub(crate) fn new(service: &'a TranslationService, requested: Option<&str>) -> Self {
        let locale = requested
            .and_then(|code| service.registry().get_by_code(code))
            .map(|descriptor| descriptor.code.as_str());

        if locale.is_none() {
            if let Some(code) = requested {
                trace!("Locale '{}' is not registered, using default locale", code);
            }
        }

        Self { service, locale }
    }

    /// The locale lookups are attempted in first.
    ///
    /// Falls back to the default locale when the requested one is not registered.
    pub fn locale(&self) -> &'a str {
        self.locale.unwrap_or_else(|| self.service.registry().default_code())
    }

    /// Resolve `key` to text, or `None` if neither the locale nor the default has it.
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        let store = self.service.store();
        let default_code = self.service.registry().default_code();

        if let Some(code) = self.locale {
            if let Some(text) = store.get(code).and_then(|dict| dict.lookup(key)) {
                return Some(text);
            }
            if code == default_code {
                trace!("Unresolved translation key '{}' in '{}'", key, code);
                return None;
            }
            trace!(
                "Key '{}' missing in '{}', falling back to '{}'",
                key,
                code,
                default_code
            );
        }

        let text = store.get(default_code).and_then(|dict| dict.lookup(key));
        if text.is_none() {
            trace!("Unresolved translation key '{}'", key);
        }
        text
    }

    /// Translate `key`, returning the key itself when it cannot be resolved.
    ///
    /// An empty key is returned as-is.
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        if key.is_empty() {
            return key;
        }
        self.lookup(key).unwrap_or(key)
    }

    /// Like [`Translator::t`], passing an absent key through unchanged.
    pub fn resolve<'k>(&self, key: Option<&'k str>) -> Option<&'k str>
    where
        'a: 'k,
    {
        key.map(|key| self.t(key))
    }
}
