//! Item identifiers and the host-provided item catalog.
//!
//! The catalog is a fixed enumeration owned by the host runtime. The plugin
//! never invents items: every identifier it uses is either read from the
//! catalog or resolved against it with [`ItemCatalog::match_item`].

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the empty item. Configuring it as a template means "none".
pub const AIR: &str = "AIR";

/// Namespace prefix accepted (and ignored) when resolving item names.
const MINECRAFT_NAMESPACE: &str = "minecraft:";

// ---------------------------------------------------------------------------
// ItemId
// ---------------------------------------------------------------------------

/// Identifier of a game item, in upper-case catalog form (`WOODEN_SWORD`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an identifier from a catalog name. The name is upper-cased.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_ascii_uppercase())
    }

    /// The identifier in catalog form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-case form, used in recipe keys and namespaced identifiers.
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Namespaced resource location, e.g. `minecraft:wooden_sword`.
    pub fn namespaced(&self) -> String {
        format!("{MINECRAFT_NAMESPACE}{}", self.to_lowercase())
    }

    /// The remainder of the identifier after `prefix`, if it starts with it.
    pub fn strip_prefix(&self, prefix: &str) -> Option<&str> {
        self.0.strip_prefix(prefix)
    }

    /// Whether this is the empty item.
    pub fn is_air(&self) -> bool {
        self.0 == AIR
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ItemCatalog
// ---------------------------------------------------------------------------

/// The immutable set of items known to the host, in host order.
///
/// Built once by the host integration layer and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<ItemId>,
    index: BTreeSet<ItemId>,
}

impl ItemCatalog {
    /// Build a catalog from item names. Duplicates keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = Vec::new();
        let mut index = BTreeSet::new();
        for name in names {
            let id = ItemId::new(name);
            if index.insert(id.clone()) {
                items.push(id);
            }
        }
        Self { items, index }
    }

    /// All items, in host order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the exact identifier is in the catalog.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains(id)
    }

    /// Resolve a user-supplied item name against the catalog.
    ///
    /// Matching is lenient the way server operators expect: an optional
    /// `minecraft:` namespace is dropped, runs of whitespace become `_`,
    /// any other non-word character is removed, and case is ignored.
    pub fn match_item(&self, name: &str) -> Option<&ItemId> {
        let normalized = normalize_item_name(name);
        if normalized.is_empty() {
            return None;
        }
        self.index.get(&ItemId(normalized))
    }
}

impl<'a> IntoIterator for &'a ItemCatalog {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Normalize a free-form item name into catalog form.
fn normalize_item_name(name: &str) -> String {
    let trimmed = name.trim();
    let without_namespace = if trimmed
        .get(..MINECRAFT_NAMESPACE.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(MINECRAFT_NAMESPACE))
    {
        trimmed.get(MINECRAFT_NAMESPACE.len()..).unwrap_or_default()
    } else {
        trimmed
    };

    without_namespace
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
