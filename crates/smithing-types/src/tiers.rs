//! Tool tiers and tool-type suffixes.
//!
//! A tier groups the items that share a material prefix (`IRON_`), and a
//! tool type is the suffix that names what the item is (`PICKAXE`). An item
//! belongs to a tier only when its remainder after the prefix is exactly one
//! of [`TOOL_TYPES`], which keeps `IRON_INGOT` or `STONE_BRICKS` out.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tool-type suffixes recognized when classifying items into tiers.
pub const TOOL_TYPES: [&str; 10] = [
    "SWORD",
    "SPEAR",
    "SHOVEL",
    "PICKAXE",
    "AXE",
    "HOE",
    "HELMET",
    "CHESTPLATE",
    "LEGGINGS",
    "BOOTS",
];

/// Tiers the plugin knows about, in processing order.
pub const KNOWN_TIERS: [&str; 7] = [
    "leather", "wooden", "copper", "stone", "iron", "golden", "diamond",
];

/// A tool tier, identified by its lower-case name (`wooden`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(String);

impl Tier {
    /// Create a tier from its name. The name is lower-cased.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_lowercase())
    }

    /// All tiers in [`KNOWN_TIERS`], in processing order.
    pub fn known() -> Vec<Self> {
        KNOWN_TIERS.iter().map(Self::new).collect()
    }

    /// The tier name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this tier is one of [`KNOWN_TIERS`].
    pub fn is_known(&self) -> bool {
        KNOWN_TIERS.contains(&self.0.as_str())
    }

    /// The item-name prefix shared by this tier's tools, e.g. `WOODEN_`.
    pub fn prefix(&self) -> String {
        format!("{}_", self.0.to_ascii_uppercase())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
