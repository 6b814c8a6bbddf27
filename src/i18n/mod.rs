//! Internationalization (i18n) core for localized site pages.
//!
//! This module holds the locale registry, the per-locale dictionaries and the
//! lookup logic used by page rendering.
//!
//! # Architecture
//!
//! - `registry`: ordered set of published locales and the default locale
//! - `dictionary`: flat-or-nested translation entries for one locale
//! - `store`: dictionaries keyed by locale code
//! - `service`: registry and store validated together, plus the global instance
//! - `translator`: key lookups bound to a locale, with default-locale fallback
//! - `path`: active locale from a request path
//! - `routes`: one static route per locale
//! - `validator` / `metrics`: dictionary coverage checks and statistics
//!
//! # Example
//!
//! ```rust
//! use site_i18n::i18n::TranslationService;
//!
//! let service = TranslationService::global();
//!
//! let locale = service.locale_from_path("/fr/about");
//! let t = service.translator(locale);
//! assert_eq!(t.t("nav.home"), "Accueil");
//!
//! // Missing in French, resolved from English
//! assert_eq!(t.t("nav.twitter"), "Twitter");
//!
//! // Unknown keys come back unchanged
//! assert_eq!(t.t("nav.unknown"), "nav.unknown");
//! ```

mod builtin;
mod dictionary;
mod error;
mod metrics;
mod path;
mod registry;
mod routes;
mod service;
mod store;
mod translator;
mod validator;

pub use dictionary::{Dictionary, Value, KEY_DELIMITER};
pub use error::{I18nError, Result};
pub use metrics::{CoverageReport, LocaleCoverage};
pub use path::{locale_from_path, locale_from_url};
pub use registry::{LocaleDescriptor, LocaleManifest, LocaleRegistry};
pub use routes::{locale_routes, LocaleRoute, RouteParams};
pub use service::{TranslationService, MANIFEST_FILE};
pub use store::DictionaryStore;
pub use translator::Translator;
pub use validator::{CoverageValidator, ValidationReport};
