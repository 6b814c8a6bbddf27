//! Translation resolution for statically generated multilingual sites.
//!
//! See [`i18n`] for the locale registry, dictionaries and lookup rules.

pub mod config;
pub mod i18n;
