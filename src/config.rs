use crate::i18n::TranslationService;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory with `locales.json` and per-locale dictionaries.
    /// `None` uses the built-in locales.
    pub locales_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let locales_dir = std::env::var("SITE_I18N_LOCALES_DIR")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Some(dir) = &locales_dir {
            if !dir.is_dir() {
                bail!(
                    "SITE_I18N_LOCALES_DIR is not a directory: {}",
                    dir.display()
                );
            }
        }

        Ok(Self { locales_dir })
    }

    /// Build the translation service this configuration points at.
    pub fn load_service(&self) -> Result<TranslationService> {
        match &self.locales_dir {
            Some(dir) => TranslationService::from_dir(dir)
                .with_context(|| format!("Failed to load locales from {}", dir.display())),
            None => TranslationService::builtin().context("Failed to load built-in locales"),
        }
    }
}
