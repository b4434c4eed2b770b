//! Recipe construction for the negotiated host mode.
//!
//! The host's recipe variant is decided once per pass by
//! [`negotiate_mode`]; the resulting [`RecipeBuilder`] carries that decision
//! and never probes the host again.

use smithing_types::{ItemId, RecipeKey, RecipeMode, SmithingRecipe};

use crate::error::BuildError;
use crate::host::HostCapabilities;
use crate::matcher::UpgradePair;

/// Pick the recipe variant for a host.
///
/// Transform recipes are preferred whenever the host has them. `None` means
/// the host has no smithing recipes at all.
pub const fn negotiate_mode(capabilities: HostCapabilities) -> Option<RecipeMode> {
    if capabilities.transform_recipes {
        Some(RecipeMode::Transform)
    } else if capabilities.legacy_recipes {
        Some(RecipeMode::Legacy)
    } else {
        None
    }
}

/// Builds upgrade recipes for one registration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeBuilder {
    mode: Option<RecipeMode>,
    namespace: String,
    template: Option<ItemId>,
}

impl RecipeBuilder {
    /// A builder for `mode`. A `template` of `None` is the "no template"
    /// sentinel; an `AIR` template is treated the same way.
    pub fn new(mode: Option<RecipeMode>, namespace: impl Into<String>, template: Option<ItemId>) -> Self {
        Self {
            mode,
            namespace: namespace.into(),
            template: template.filter(|item| !item.is_air()),
        }
    }

    /// The key a recipe for `pair` will be registered under.
    pub fn key_for(&self, pair: &UpgradePair) -> RecipeKey {
        RecipeKey::upgrade(&self.namespace, &pair.base, &pair.result)
    }

    /// Build the recipe upgrading `pair.base` into `pair.result` with `addition`.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MismatchedToolType`] if base and result are different tools.
    /// - [`BuildError::Unsupported`] if the host has no smithing recipes.
    /// - [`BuildError::TemplateRequired`] in transform mode without a template.
    pub fn build(&self, pair: &UpgradePair, addition: &ItemId) -> Result<SmithingRecipe, BuildError> {
        let tool_suffix = format!("_{}", pair.tool_type);
        if !pair.base.as_str().ends_with(&tool_suffix)
            || !pair.result.as_str().ends_with(&tool_suffix)
        {
            return Err(BuildError::MismatchedToolType {
                base: pair.base.clone(),
                result: pair.result.clone(),
            });
        }

        let key = self.key_for(pair);
        let Some(mode) = self.mode else {
            return Err(BuildError::Unsupported { key });
        };
        if !mode.uses_template() {
            return Ok(SmithingRecipe::legacy(
                key,
                pair.result.clone(),
                pair.base.clone(),
                addition.clone(),
            ));
        }
        match &self.template {
            Some(template) => Ok(SmithingRecipe::transform(
                key,
                pair.result.clone(),
                template.clone(),
                pair.base.clone(),
                addition.clone(),
            )),
            None => Err(BuildError::TemplateRequired { key }),
        }
    }
}
