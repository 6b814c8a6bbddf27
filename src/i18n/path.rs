//! Active-locale detection from request paths.
//!
//! Site routes are prefixed with the locale code (`/fr/about`), so the first
//! path segment selects the locale. Anything that is not a registered code
//! selects the default locale.

use crate::i18n::registry::LocaleRegistry;
use url::Url;

/// Determine the locale for a request path such as `/fr/about`.
///
/// Query strings and fragments are ignored, as is a single leading `/`. An
/// empty first segment (`/`, `""`, `//fr`) counts as no locale.
pub fn locale_from_path<'a>(registry: &'a LocaleRegistry, path: &str) -> &'a str {
    let candidate = first_segment(path);

    registry
        .get_by_code(candidate)
        .map(|descriptor| descriptor.code.as_str())
        .unwrap_or_else(|| registry.default_code())
}

/// Determine the locale for a full URL, using its path.
pub fn locale_from_url<'a>(registry: &'a LocaleRegistry, url: &Url) -> &'a str {
    locale_from_path(registry, url.path())
}

fn first_segment(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = path.strip_prefix('/').unwrap_or(path);

    path.split('/').next().unwrap_or("")
}
