//! Locale route enumeration for static page generation.

use crate::i18n::registry::LocaleRegistry;
use serde::Serialize;

/// Route parameters for a single locale page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParams {
    /// Locale code used as the `[lang]` route segment
    pub lang: String,
}

/// One generated route per registered locale.
///
/// Serializes as `{"params":{"lang":"fr"},"label":"Français"}`, with `flag`
/// included only when the locale has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleRoute {
    pub params: RouteParams,

    /// Display name of the locale (not its code)
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

/// One route per registered locale, in registration order.
pub fn locale_routes(registry: &LocaleRegistry) -> Vec<LocaleRoute> {
    registry
        .list_all()
        .iter()
        .map(|locale| LocaleRoute {
            params: RouteParams {
                lang: locale.code.clone(),
            },
            label: locale.name.clone(),
            flag: locale.flag.clone(),
        })
        .collect()
}
