//! Configuration loading and typed config structures for the plugin.
//!
//! The operator-facing configuration lives in `config.yml` inside the
//! plugin's data folder. The bundled default ([`DEFAULT_CONFIG_YAML`]) is what
//! gets written there on first start and what is used when no file exists.
//!
//! Values are kept as the raw strings the operator typed. Resolving them
//! against the item catalog and the known tiers happens in the registration
//! pass, where unresolvable names become warnings instead of load failures.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use smithing_types::AIR;

/// The bundled default configuration file.
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../config.yml");

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level plugin configuration.
///
/// Mirrors the structure of `config.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Item name for the smithing template slot. `AIR` means none; a blank
    /// or null value reads as `AIR`.
    #[serde(default = "default_template", deserialize_with = "template_or_air")]
    pub template: String,

    /// Upgrade rules keyed by source tier name.
    #[serde(default)]
    pub tiers: BTreeMap<String, TierRuleConfig>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            tiers: BTreeMap::new(),
        }
    }
}

impl PluginConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// The configuration shipped with the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the bundled file is malformed.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CONFIG_YAML)
    }

    /// The rule configured for `tier`, if any. Tier names match case-insensitively.
    pub fn rule(&self, tier: &str) -> Option<&TierRuleConfig> {
        self.tiers
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(tier))
            .map(|(_, rule)| rule)
    }
}

/// The `tiers.<tier>` section: where this tier's tools upgrade to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRuleConfig {
    /// Name of the tier the tools upgrade into.
    #[serde(default)]
    pub upgrade_to: Option<String>,

    /// Item name of the catalyst consumed by the upgrade.
    #[serde(default)]
    pub upgrade_item: Option<String>,
}

fn default_template() -> String {
    String::from(AIR)
}

fn template_or_air<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(default_template))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
