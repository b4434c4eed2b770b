//! Better Smithing host binary.
//!
//! Plays the part of the plugin runtime: it provides the item catalog of the
//! configured server version, loads the operator's `config.yml`, and runs the
//! registration pass against a datapack host that writes one recipe file per
//! upgrade.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load host settings from the environment
//! 3. Save the default `config.yml` if the data folder has none, then load it
//! 4. Build the vanilla item catalog for the server version
//! 5. Prepare the datapack host
//! 6. Run the registration pass
//! 7. Log the result

mod catalog;
mod datapack;
mod error;
mod settings;
mod version;

use std::path::Path;

use smithing_core::{DEFAULT_CONFIG_YAML, PluginConfig, PluginContext, register_upgrades};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::datapack::DatapackHost;
use crate::error::PluginError;
use crate::settings::HostSettings;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if settings, configuration, or the datapack directory
/// cannot be prepared. Problems inside the registration pass are logged and
/// never surface here.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    init_logging();
    info!("better-smithing starting");

    // 2. Load host settings.
    let settings = HostSettings::from_env()?;
    info!(
        data_dir = %settings.data_dir.display(),
        output_dir = %settings.output_dir.display(),
        server_version = %settings.server_version,
        namespace = settings.namespace,
        "Host settings loaded"
    );

    // 3. Load configuration.
    let config = load_config(&settings.config_path())?;
    info!(
        template = config.template,
        configured_tiers = config.tiers.len(),
        "Configuration loaded"
    );

    // 4. Build the item catalog.
    let catalog = catalog::vanilla_catalog(settings.server_version);
    info!(items = catalog.len(), "Item catalog built");

    // 5. Prepare the datapack host.
    let mut host = DatapackHost::create(
        &settings.output_dir,
        settings.server_version,
        &settings.namespace,
        settings.pack_format,
    )?;

    // 6. Run the registration pass.
    let report = {
        let mut ctx = PluginContext {
            catalog: &catalog,
            config: &config,
            host: &mut host,
            namespace: &settings.namespace,
        };
        register_upgrades(&mut ctx)
    };

    // 7. Log the result.
    info!(
        mode = ?report.mode,
        registered = report.registered_count(),
        files = host.len(),
        warnings = report.warnings.len(),
        rejections = report.rejections.len(),
        "better-smithing finished"
    );
    if host.is_empty() {
        warn!("No smithing recipes were written; check config.yml and the warnings above");
    } else if !report.is_clean() {
        warn!("Some smithing upgrades were skipped; see the warnings above");
    }
    Ok(())
}

/// Set up the tracing subscriber.
///
/// `RUST_LOG` sets the filter (default `info`); `SMITHING_LOG_FORMAT=json`
/// switches to JSON lines for log collectors.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("SMITHING_LOG_FORMAT").is_ok_and(|format| format == "json");
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Load `config.yml`, writing the bundled default first if it is missing.
fn load_config(path: &Path) -> Result<PluginConfig, PluginError> {
    if !path.exists() {
        save_default_config(path)?;
        info!(path = %path.display(), "Saved default config");
    }
    Ok(PluginConfig::from_file(path)?)
}

/// Write the bundled `config.yml` to `path`, creating its folder.
fn save_default_config(path: &Path) -> Result<(), PluginError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PluginError::io(parent, e))?;
    }
    std::fs::write(path, DEFAULT_CONFIG_YAML).map_err(|e| PluginError::io(path, e))
}
