//! Errors raised while building or loading translation data.
//!
//! Lookups never fail; only construction does.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Locale registry is empty")]
    EmptyRegistry,

    #[error("Locale '{0}' is registered more than once")]
    DuplicateLocale(String),

    #[error("Default locale '{0}' is not registered")]
    UnknownDefaultLocale(String),

    #[error("Locale '{0}' is registered but has no dictionary")]
    MissingDictionary(String),

    #[error("Dictionary '{0}' has no matching registered locale")]
    UnregisteredDictionary(String),

    #[error("Translation service is already installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, I18nError>;
