//! Error types for the plugin binary.
//!
//! [`PluginError`] covers everything that can stop the plugin before the
//! registration pass starts. The pass itself never fails.

/// Top-level error for the plugin binary.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: smithing_core::ConfigError,
    },

    /// A host setting from the environment is invalid.
    #[error("settings error: {0}")]
    Settings(String),

    /// Preparing the data folder or the datapack failed.
    #[error("filesystem error at {path}: {source}")]
    Io {
        /// The path being written or created.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Encoding the datapack metadata failed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl PluginError {
    /// Wrap an I/O error with the path it happened at.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
