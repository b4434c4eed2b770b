//! Error types for the smithing-core crate.
//!
//! None of these errors abort a registration pass. A [`BuildError`] skips one
//! recipe before it reaches the host, a [`HostError`] records one recipe the
//! host refused. The pass carries on with the rest either way.

use smithing_types::{ItemId, RecipeKey};

/// Reasons a recipe could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The host only accepts template-gated recipes and no template is set.
    #[error(
        "recipe {key} needs a smithing template on this server; set a valid 'template' item in config.yml"
    )]
    TemplateRequired {
        /// The recipe that was skipped.
        key: RecipeKey,
    },

    /// The host supports neither smithing recipe variant.
    #[error("recipe {key} skipped: smithing recipes are not available on this server")]
    Unsupported {
        /// The recipe that was skipped.
        key: RecipeKey,
    },

    /// Base and result do not name the same tool type.
    #[error("cannot upgrade {base} into {result}: tool types differ")]
    MismatchedToolType {
        /// The item being upgraded.
        base: ItemId,
        /// The item it would become.
        result: ItemId,
    },
}

/// Reasons the host refused to register a recipe.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A recipe with the same key is already registered.
    #[error("a recipe named {0} is already registered")]
    DuplicateKey(RecipeKey),

    /// The host rejected the recipe for its own reasons.
    #[error("host rejected recipe {key}: {reason}")]
    Rejected {
        /// The rejected recipe.
        key: RecipeKey,
        /// Description supplied by the host.
        reason: String,
    },

    /// Persisting the recipe failed.
    #[error("failed to store recipe {key}: {source}")]
    Io {
        /// The recipe being stored.
        key: RecipeKey,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Serializing the recipe failed.
    #[error("failed to encode recipe {key}: {message}")]
    Encode {
        /// The recipe being encoded.
        key: RecipeKey,
        /// Description of the encoding failure.
        message: String,
    },
}
