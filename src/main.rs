//! Command-line access to the site's translation data.
//!
//! Usage:
//!   site-i18n routes                    # Print locale routes as JSON
//!   site-i18n resolve <locale> <key>    # Print the translation for a key
//!   site-i18n locale <path-or-url>      # Print the locale selected by a path
//!   site-i18n check                     # Validate dictionaries, print coverage
//!
//! Optional environment variables:
//! - SITE_I18N_LOCALES_DIR (defaults to the built-in locales)
//! - RUST_LOG (log filter)

use anyhow::{bail, Context, Result};
use site_i18n::config::Config;
use site_i18n::i18n::{CoverageReport, CoverageValidator, TranslationService};
use tracing::{info, warn};
use url::Url;

const USAGE: &str =
    "Usage: site-i18n <routes | resolve <locale> <key> | locale <path-or-url> | check>";

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!(USAGE);
    };

    let config = Config::from_env()?;
    let service = TranslationService::install(config.load_service()?)
        .context("Failed to install translation service")?;

    match (command.as_str(), &args[1..]) {
        ("routes", []) => {
            let routes = service.locale_routes();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        ("resolve", [locale, key]) => {
            let t = service.translator(locale);
            if t.lookup(key).is_none() {
                warn!("Key '{}' is not translated in '{}' or the default locale", key, locale);
            }
            println!("{}", t.t(key));
        }
        ("locale", [target]) => {
            let locale = match Url::parse(target) {
                Ok(url) => service.locale_from_url(&url),
                Err(_) => service.locale_from_path(target),
            };
            println!("{}", locale);
        }
        // Directory loads already logged their coverage warnings
        ("check", []) => return check(service, config.locales_dir.is_none()),
        _ => bail!(USAGE),
    }

    Ok(())
}

fn check(service: &TranslationService, log_warnings: bool) -> Result<()> {
    let report = CoverageValidator::validate(service);
    if log_warnings {
        for warning in &report.warnings {
            warn!("{}", warning);
        }
    }

    let coverage = CoverageReport::collect(service);
    println!("{}", serde_json::to_string_pretty(&coverage)?);

    if report.has_errors() {
        bail!("Locale validation failed:\n{}", report.errors.join("\n"));
    }

    info!(
        "Checked {} locales ({} warnings)",
        coverage.locales.len(),
        report.warnings.len()
    );
    Ok(())
}
