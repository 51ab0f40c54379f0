//! Consent CLI - inspect and drive the consent subsystem from a terminal
//!
//! Usage:
//!   cargo run -- status                   # Decision, gate results, last-saved
//!   cargo run -- accept-all               # Banner flow: accept everything
//!   cargo run -- reject-all               # Banner flow: reject optional categories
//!   cargo run -- set analytics=on marketing=off
//!   cargo run -- reset                    # Back to the undecided state
//!   cargo run -- strings [locale]         # Dump the consent copy for a locale
//!   cargo run -- validate                 # Check every dictionary against the default
//!
//! Optional environment variables:
//! - CONSENT_STORAGE_PATH (defaults to data/consent.json)
//! - CONSENT_STORAGE_KEY (defaults to cookieConsent)
//! - SITE_LOCALE (defaults to en)
//! - BANNER_DELAY_MS (defaults to 400)

use anyhow::{bail, Result};
use std::sync::Arc;
use tracing::info;

use consent_core::config::Config;
use consent_core::consent::{
    BannerController, ConsentCategory, ConsentEvent, ConsentGate, ConsentStore, EventBus,
    FileStorage, ManagerController,
};
use consent_core::i18n::{resolve, resolve_list, DictionaryValidator, Locale};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("consent_core=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("status");

    let bus = EventBus::new();
    let _log_changes = bus.subscribe(ConsentEvent::ConsentChanged, |event| {
        info!("Notification: {}", event.as_str());
    });

    let store = Arc::new(ConsentStore::open(
        Box::new(FileStorage::open(&config.storage_path)),
        config.storage_key.clone(),
        bus,
    ));

    if !store.is_decided() {
        info!(
            "No decision on record; the banner would reveal after {} ms",
            config.banner_delay_ms
        );
    }

    match command {
        "status" => print_status(&store, config.site_locale),
        "accept-all" => {
            let mut banner = BannerController::mount(Arc::clone(&store));
            banner.accept_all();
            print_status(&store, config.site_locale);
        }
        "reject-all" => {
            let mut banner = BannerController::mount(Arc::clone(&store));
            banner.reject_all();
            print_status(&store, config.site_locale);
        }
        "set" => {
            set_preferences(&store, &args[1..])?;
            print_status(&store, config.site_locale);
        }
        "reset" => {
            let mut manager = ManagerController::new(Arc::clone(&store));
            manager.open();
            manager.reset_to_defaults();
            print_status(&store, config.site_locale);
        }
        "strings" => {
            let locale = match args.get(1) {
                Some(code) => Locale::from_code_or_default(code),
                None => config.site_locale,
            };
            print_strings(locale);
        }
        "validate" => {
            let report = DictionaryValidator::validate_all();
            for warning in &report.warnings {
                println!("warning: {}", warning);
            }
            for error in &report.errors {
                println!("error: {}", error);
            }
            if report.has_errors() {
                bail!("dictionary validation failed with {} error(s)", report.errors.len());
            }
            println!("All dictionaries are consistent with the default locale.");
        }
        other => {
            bail!(
                "Unknown command '{}'. Commands: status, accept-all, reject-all, set, reset, strings, validate",
                other
            );
        }
    }

    Ok(())
}

/// Apply `analytics=on|off marketing=on|off` pairs through the settings
/// panel, exactly as the footer-link flow would.
fn set_preferences(store: &Arc<ConsentStore>, pairs: &[String]) -> Result<()> {
    if pairs.is_empty() {
        bail!("Usage: set analytics=on|off marketing=on|off");
    }

    let mut manager = ManagerController::new(Arc::clone(store));
    manager.open();

    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("Invalid argument '{}'. Expected category=on|off", pair);
        };
        let category = match name {
            "analytics" => ConsentCategory::Analytics,
            "marketing" => ConsentCategory::Marketing,
            "necessary" => bail!("The necessary category is always on"),
            other => bail!("Unknown category '{}'", other),
        };
        let granted = match value {
            "on" | "true" => true,
            "off" | "false" => false,
            other => bail!("Invalid value '{}'. Expected on or off", other),
        };
        manager.set_category(category, granted);
    }

    manager.save();
    Ok(())
}

fn print_status(store: &Arc<ConsentStore>, locale: Locale) {
    let gate = ConsentGate::new(Arc::clone(store));

    match store.load() {
        Some(state) => {
            println!("Decision recorded:");
            for category in ConsentCategory::all() {
                let title = resolve(
                    locale,
                    &format!("cookies.types.{}.title", category.as_str()),
                    Some(category.as_str()),
                );
                println!(
                    "  {:<22} granted={:<5} allowed={}",
                    title,
                    state.grants(category),
                    gate.is_allowed(category)
                );
            }
            let manager = ManagerController::new(Arc::clone(store));
            if let Some(notice) = manager.last_saved_notice(locale) {
                println!("  {}", notice);
            }
        }
        None => {
            println!("No decision yet; the banner would show.");
            println!(
                "  analytics allowed={}  marketing allowed={}",
                gate.is_allowed(ConsentCategory::Analytics),
                gate.is_allowed(ConsentCategory::Marketing)
            );
        }
    }
}

fn print_strings(locale: Locale) {
    println!(
        "Consent copy for '{}' ({})",
        locale.code(),
        locale.native_name()
    );
    println!("  og_locale={} hreflang={}", locale.og_locale(), locale.hreflang());

    for path in [
        "cookies.banner.title",
        "cookies.banner.message",
        "cookies.banner.accept_all",
        "cookies.banner.reject_all",
        "cookies.banner.customize",
        "cookies.manager.title",
        "cookies.manager.intro",
        "cookies.manager.save",
        "cookies.manager.reset",
    ] {
        println!("  {:<34} {}", path, resolve(locale, path, None));
    }

    for category in ConsentCategory::all() {
        let base = format!("cookies.types.{}", category.as_str());
        println!(
            "  {:<34} {}",
            format!("{}.title", base),
            resolve(locale, &format!("{}.title", base), None)
        );
        let examples = resolve_list(locale, &format!("{}.examples", base));
        println!("  {:<34} {}", format!("{}.examples", base), examples.join(", "));
    }
}
