//! Declarative smithing recipe records.
//!
//! A [`SmithingRecipe`] is built once, handed to the host, and never touched
//! again. Construction goes through [`SmithingRecipe::legacy`] or
//! [`SmithingRecipe::transform`] so that a legacy recipe can never carry a
//! template slot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::items::ItemId;

/// Namespace used for recipe keys when the host does not provide one.
pub const DEFAULT_NAMESPACE: &str = "bettersmithing";

// ---------------------------------------------------------------------------
// RecipeKey
// ---------------------------------------------------------------------------

/// Namespaced recipe identifier, rendered as `namespace:key`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecipeKey {
    namespace: String,
    key: String,
}

impl RecipeKey {
    /// Create a key. Both parts are lower-cased.
    pub fn new(namespace: impl AsRef<str>, key: impl AsRef<str>) -> Self {
        Self {
            namespace: namespace.as_ref().to_ascii_lowercase(),
            key: key.as_ref().to_ascii_lowercase(),
        }
    }

    /// Key for the upgrade of `base` into `result`: `{base}_to_{result}`.
    pub fn upgrade(namespace: &str, base: &ItemId, result: &ItemId) -> Self {
        Self::new(
            namespace,
            format!("{}_to_{}", base.to_lowercase(), result.to_lowercase()),
        )
    }

    /// The namespace part.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The key part, without namespace.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

// ---------------------------------------------------------------------------
// RecipeMode
// ---------------------------------------------------------------------------

/// Which recipe variant the host accepts, negotiated once per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeMode {
    /// Two-ingredient recipe: base + addition, no template slot.
    Legacy,
    /// Template-gated transform recipe: template + base + addition.
    Transform,
}

impl RecipeMode {
    /// Whether recipes built in this mode carry a template.
    pub const fn uses_template(self) -> bool {
        matches!(self, Self::Transform)
    }
}

impl fmt::Display for RecipeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Transform => f.write_str("transform"),
        }
    }
}

// ---------------------------------------------------------------------------
// SmithingRecipe
// ---------------------------------------------------------------------------

/// A smithing recipe turning `base` plus `addition` into `result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmithingRecipe {
    key: RecipeKey,
    result: ItemId,
    template: Option<ItemId>,
    base: ItemId,
    addition: ItemId,
}

impl SmithingRecipe {
    /// A legacy two-ingredient recipe.
    pub const fn legacy(key: RecipeKey, result: ItemId, base: ItemId, addition: ItemId) -> Self {
        Self {
            key,
            result,
            template: None,
            base,
            addition,
        }
    }

    /// A template-gated transform recipe.
    pub const fn transform(
        key: RecipeKey,
        result: ItemId,
        template: ItemId,
        base: ItemId,
        addition: ItemId,
    ) -> Self {
        Self {
            key,
            result,
            template: Some(template),
            base,
            addition,
        }
    }

    /// The recipe identifier.
    pub const fn key(&self) -> &RecipeKey {
        &self.key
    }

    /// The produced item.
    pub const fn result(&self) -> &ItemId {
        &self.result
    }

    /// The template item, present only for transform recipes.
    pub const fn template(&self) -> Option<&ItemId> {
        self.template.as_ref()
    }

    /// The item being upgraded.
    pub const fn base(&self) -> &ItemId {
        &self.base
    }

    /// The catalyst consumed alongside the base.
    pub const fn addition(&self) -> &ItemId {
        &self.addition
    }

    /// The variant this recipe was built as.
    pub const fn mode(&self) -> RecipeMode {
        if self.template.is_some() {
            RecipeMode::Transform
        } else {
            RecipeMode::Legacy
        }
    }
}
