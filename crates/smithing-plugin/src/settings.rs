//! Host settings for the plugin binary.
//!
//! Everything the host decides (where the data folder is, which server
//! version is running, where recipes go) is loaded from environment
//! variables. What the operator decides lives in `config.yml` instead.

use std::path::PathBuf;

use smithing_types::DEFAULT_NAMESPACE;

use crate::error::PluginError;
use crate::version::ServerVersion;

const DEFAULT_DATA_DIR: &str = "plugins/BetterSmithing";
const DEFAULT_OUTPUT_DIR: &str = "datapacks/better_smithing";
const DEFAULT_SERVER_VERSION: ServerVersion = ServerVersion::new(1, 21, 4);
const CONFIG_FILE_NAME: &str = "config.yml";

/// Complete host configuration loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    /// The plugin's data folder, holding `config.yml`.
    pub data_dir: PathBuf,
    /// Root directory of the generated datapack.
    pub output_dir: PathBuf,
    /// Version of the server the recipes are generated for.
    pub server_version: ServerVersion,
    /// Namespace for recipe keys.
    pub namespace: String,
    /// Explicit datapack format, overriding the one derived from the version.
    pub pack_format: Option<u32>,
}

impl HostSettings {
    /// Load settings from environment variables.
    ///
    /// Optional variables:
    /// - `SMITHING_DATA_DIR` -- data folder (default `plugins/BetterSmithing`)
    /// - `SMITHING_OUTPUT_DIR` -- datapack root (default `datapacks/better_smithing`)
    /// - `SMITHING_SERVER_VERSION` -- server version (default `1.21.4`)
    /// - `SMITHING_NAMESPACE` -- recipe namespace (default `bettersmithing`)
    /// - `SMITHING_PACK_FORMAT` -- datapack format override
    pub fn from_env() -> Result<Self, PluginError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PluginError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("SMITHING_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let output_dir = lookup("SMITHING_OUTPUT_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

        let server_version = match lookup("SMITHING_SERVER_VERSION") {
            Some(raw) => raw
                .parse()
                .map_err(|e| PluginError::Settings(format!("SMITHING_SERVER_VERSION: {e}")))?,
            None => DEFAULT_SERVER_VERSION,
        };

        let namespace = lookup("SMITHING_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned());
        if !is_valid_namespace(&namespace) {
            return Err(PluginError::Settings(format!(
                "invalid SMITHING_NAMESPACE '{namespace}': use lower-case letters, digits, '_', '-' or '.'"
            )));
        }

        let pack_format = lookup("SMITHING_PACK_FORMAT")
            .map(|raw| {
                raw.trim()
                    .parse::<u32>()
                    .map_err(|e| PluginError::Settings(format!("invalid SMITHING_PACK_FORMAT: {e}")))
            })
            .transpose()?;

        Ok(Self {
            data_dir,
            output_dir,
            server_version,
            namespace,
            pack_format,
        })
    }

    /// Path of `config.yml` inside the data folder.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }
}

fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.'))
}
