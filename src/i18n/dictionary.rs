//! Per-locale dictionaries of translation keys.
//!
//! A dictionary maps keys either to literal text or to a nested dictionary, so
//! the same entry can be authored flat (`"nav.home": "Home"`) or nested
//! (`"nav": { "home": "Home" }`). Lookup tries the exact key first and only
//! then walks the dotted path.

use crate::i18n::error::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Separator between key path segments.
pub const KEY_DELIMITER: char = '.';

/// A dictionary entry: literal text or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Translated text
    Leaf(String),
    /// Nested entries addressed by further key segments
    Node(HashMap<String, Value>),
}

impl Value {
    /// The text of a leaf, `None` for a nested node.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Value::Leaf(text) => Some(text.as_str()),
            Value::Node(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Leaf(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Leaf(text)
    }
}

/// Translation entries for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: HashMap<String, Value>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from JSON text.
    ///
    /// `origin` names the source (file path or built-in name) in error messages.
    pub fn from_json_str(origin: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| I18nError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Insert a top-level entry, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Resolve `key` to text within this dictionary.
    ///
    /// An exact top-level leaf wins over path traversal, so a flat
    /// `"nav.home"` entry shadows a nested `nav` → `home` entry. Traversal
    /// fails on a missing segment, on a leaf reached before the last segment,
    /// and on a path that ends at a nested node.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(Value::Leaf(text)) = self.entries.get(key) {
            return Some(text.as_str());
        }

        let mut segments = key.split(KEY_DELIMITER);
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Node(children) => children.get(segment)?,
                Value::Leaf(_) => return None,
            };
        }

        current.as_leaf()
    }

    /// Check whether `key` resolves to text in this dictionary.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Every key [`Dictionary::lookup`] resolves, as dotted paths.
    ///
    /// Leaves nested under a dotted top-level key (`{"nav.sub": {"x": ..}}`)
    /// are unreachable and therefore left out.
    pub fn leaf_keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        collect_leaf_keys(&self.entries, None, &mut keys);
        keys.retain(|key| self.contains(key));
        keys
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn collect_leaf_keys(
    entries: &HashMap<String, Value>,
    prefix: Option<&str>,
    keys: &mut BTreeSet<String>,
) {
    for (segment, value) in entries {
        let path = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, KEY_DELIMITER, segment),
            None => segment.clone(),
        };

        match value {
            Value::Leaf(_) => {
                keys.insert(path);
            }
            Value::Node(children) => collect_leaf_keys(children, Some(&path), keys),
        }
    }
}
