//! Shared type definitions for the Better Smithing plugin.
//!
//! Everything the registration pass reads or produces lives here: item
//! identifiers and the host catalog they come from, tool tiers, and the
//! declarative smithing recipe records handed to the host.
//!
//! # Modules
//!
//! - [`items`] -- [`ItemId`] and the immutable, host-provided [`ItemCatalog`]
//! - [`tiers`] -- Tool tiers, their naming prefixes, and the tool-type suffixes
//! - [`recipe`] -- Recipe keys, recipe records, and the negotiated [`RecipeMode`]

pub mod items;
pub mod recipe;
pub mod tiers;

// Re-export all public types at crate root for convenience.
pub use items::{AIR, ItemCatalog, ItemId};
pub use recipe::{DEFAULT_NAMESPACE, RecipeKey, RecipeMode, SmithingRecipe};
pub use tiers::{KNOWN_TIERS, TOOL_TYPES, Tier};
