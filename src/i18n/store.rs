//! Dictionary store: one dictionary per locale code.

use crate::i18n::dictionary::Dictionary;
use crate::i18n::error::{I18nError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Dictionaries keyed by locale code.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    dictionaries: HashMap<String, Dictionary>,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the dictionary for `code`, replacing any previous one.
    pub fn insert(&mut self, code: impl Into<String>, dictionary: Dictionary) {
        self.dictionaries.insert(code.into(), dictionary);
    }

    /// Builder-style variant of [`DictionaryStore::insert`].
    pub fn with(mut self, code: impl Into<String>, dictionary: Dictionary) -> Self {
        self.insert(code, dictionary);
        self
    }

    /// Dictionary for `code`, if one was loaded.
    pub fn get(&self, code: &str) -> Option<&Dictionary> {
        self.dictionaries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.dictionaries.contains_key(code)
    }

    /// Codes of all loaded dictionaries (unordered).
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    /// Load every `*.json` file in `dir` as a dictionary named after its file stem.
    ///
    /// Files listed in `skip` (by file name) are ignored, which keeps the
    /// locale manifest out of the store.
    pub fn load_dir(dir: &Path, skip: &[&str]) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|source| I18nError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut store = Self::new();
        for entry in entries {
            let entry = entry.map_err(|source| I18nError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            let file_name = path.file_name().and_then(|name| name.to_str());
            if file_name.map_or(false, |name| skip.contains(&name)) {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let dictionary = load_file(&path)?;
            debug!(
                "Loaded dictionary '{}' ({} entries) from {}",
                code,
                dictionary.len(),
                path.display()
            );
            store.insert(code, dictionary);
        }

        Ok(store)
    }
}

fn load_file(path: &Path) -> Result<Dictionary> {
    let contents = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Dictionary::from_json_str(&path.display().to_string(), &contents)
}
