//! Tier classification, recipe matching, and recipe registration for the
//! Better Smithing plugin.
//!
//! The crate is independent of any particular server: the item catalog is
//! injected, the host is reached through [`RecipeHost`], and configuration
//! arrives as an already loaded [`PluginConfig`].
//!
//! # Modules
//!
//! - [`config`] -- `config.yml` structure, loader, and bundled defaults.
//! - [`error`] -- Build and host error types.
//! - [`classifier`] -- Partitioning the catalog into tier buckets.
//! - [`matcher`] -- Pairing same-tool-type items across two tiers.
//! - [`builder`] -- Mode negotiation and recipe construction.
//! - [`host`] -- The [`RecipeHost`] seam and the in-memory [`MemoryHost`].
//! - [`registrar`] -- The startup registration pass and its report.

pub mod builder;
pub mod classifier;
pub mod config;
pub mod error;
pub mod host;
pub mod matcher;
pub mod registrar;

// Re-export primary types at crate root.
pub use builder::{RecipeBuilder, negotiate_mode};
pub use classifier::{TierBuckets, classify_tier};
pub use config::{ConfigError, DEFAULT_CONFIG_YAML, PluginConfig, TierRuleConfig};
pub use error::{BuildError, HostError};
pub use host::{HostCapabilities, MemoryHost, RecipeHost};
pub use matcher::{UpgradePair, match_pairs};
pub use registrar::{
    PluginContext, RecipeRejection, RegistrationReport, RegistrationWarning, register_upgrades,
    reload_upgrades,
};
