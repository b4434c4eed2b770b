//! The seam between the registration pass and the host server.
//!
//! A host reports which smithing recipe variants it understands and accepts
//! recipes one at a time. [`MemoryHost`] keeps registered recipes in memory;
//! it backs the tests and any embedding that wants to inspect the result
//! before handing it on.

use std::collections::BTreeMap;

use smithing_types::{RecipeKey, SmithingRecipe};

use crate::error::HostError;

/// Smithing recipe variants a host can register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HostCapabilities {
    /// Template-gated transform recipes.
    pub transform_recipes: bool,
    /// Two-ingredient legacy smithing recipes.
    pub legacy_recipes: bool,
}

impl HostCapabilities {
    /// A host with template-gated transform recipes only.
    pub const TRANSFORM: Self = Self {
        transform_recipes: true,
        legacy_recipes: false,
    };

    /// A host with legacy smithing recipes only.
    pub const LEGACY: Self = Self {
        transform_recipes: false,
        legacy_recipes: true,
    };

    /// A host without any smithing recipes.
    pub const NONE: Self = Self {
        transform_recipes: false,
        legacy_recipes: false,
    };
}

/// A server that accepts smithing recipes.
pub trait RecipeHost {
    /// Which recipe variants this host supports.
    fn capabilities(&self) -> HostCapabilities;

    /// Register one recipe.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host refuses or cannot store the recipe.
    fn register(&mut self, recipe: SmithingRecipe) -> Result<(), HostError>;

    /// Remove a previously registered recipe. Returns whether it existed.
    fn unregister(&mut self, key: &RecipeKey) -> bool;
}

/// In-memory recipe registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    capabilities: HostCapabilities,
    recipes: BTreeMap<RecipeKey, SmithingRecipe>,
}

impl MemoryHost {
    /// An empty registry reporting the given capabilities.
    pub const fn new(capabilities: HostCapabilities) -> Self {
        Self {
            capabilities,
            recipes: BTreeMap::new(),
        }
    }

    /// The recipe registered under `key`.
    pub fn get(&self, key: &RecipeKey) -> Option<&SmithingRecipe> {
        self.recipes.get(key)
    }

    /// All registered recipes, ordered by key.
    pub fn recipes(&self) -> impl Iterator<Item = &SmithingRecipe> {
        self.recipes.values()
    }

    /// Number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether no recipes are registered.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeHost for MemoryHost {
    fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    fn register(&mut self, recipe: SmithingRecipe) -> Result<(), HostError> {
        if self.recipes.contains_key(recipe.key()) {
            return Err(HostError::DuplicateKey(recipe.key().clone()));
        }
        self.recipes.insert(recipe.key().clone(), recipe);
        Ok(())
    }

    fn unregister(&mut self, key: &RecipeKey) -> bool {
        self.recipes.remove(key).is_some()
    }
}
