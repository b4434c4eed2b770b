//! A [`RecipeHost`] that writes recipes as datapack JSON files.
//!
//! Each registered recipe becomes
//! `<root>/data/<namespace>/<recipe dir>/<key>.json`. The JSON shape and the
//! directory name follow the data format of the target server version, and
//! the capabilities reported to the registration pass are derived from that
//! same version.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use smithing_core::{HostCapabilities, HostError, RecipeHost};
use smithing_types::{ItemId, RecipeKey, RecipeMode, SmithingRecipe};
use tracing::{debug, info, warn};

use crate::error::PluginError;
use crate::version::ServerVersion;

/// Smithing tables (and legacy smithing recipes) appear.
const SMITHING_INTRODUCED: ServerVersion = ServerVersion::new(1, 16, 0);
/// Template-gated transform recipes replace legacy smithing recipes.
const TRANSFORM_INTRODUCED: ServerVersion = ServerVersion::new(1, 20, 0);
/// Results are written as `{"id": ...}` instead of `{"item": ...}`.
const RESULT_ID_FORMAT: ServerVersion = ServerVersion::new(1, 20, 5);
/// The recipe folder is renamed from `recipes` to `recipe`.
const SINGULAR_RECIPE_DIR: ServerVersion = ServerVersion::new(1, 21, 0);
/// Ingredients may be written as a bare item id.
const BARE_INGREDIENTS: ServerVersion = ServerVersion::new(1, 21, 2);

/// Datapack format per version, newest first.
const PACK_FORMATS: &[(ServerVersion, u32)] = &[
    (ServerVersion::new(1, 21, 9), 88),
    (ServerVersion::new(1, 21, 7), 81),
    (ServerVersion::new(1, 21, 6), 80),
    (ServerVersion::new(1, 21, 5), 71),
    (ServerVersion::new(1, 21, 4), 61),
    (ServerVersion::new(1, 21, 2), 57),
    (ServerVersion::new(1, 21, 0), 48),
    (ServerVersion::new(1, 20, 5), 41),
    (ServerVersion::new(1, 20, 3), 26),
    (ServerVersion::new(1, 20, 2), 18),
    (ServerVersion::new(1, 20, 0), 15),
    (ServerVersion::new(1, 19, 4), 12),
    (ServerVersion::new(1, 19, 0), 10),
    (ServerVersion::new(1, 18, 2), 9),
    (ServerVersion::new(1, 18, 0), 8),
    (ServerVersion::new(1, 17, 0), 7),
    (ServerVersion::new(1, 16, 2), 6),
    (ServerVersion::new(1, 16, 0), 5),
];

/// Datapack format for `version`, or `None` before smithing existed.
pub fn pack_format_for(version: ServerVersion) -> Option<u32> {
    PACK_FORMATS
        .iter()
        .find(|(since, _)| version.at_least(*since))
        .map(|(_, format)| *format)
}

/// Host capabilities of a server running `version`.
pub fn capabilities_for(version: ServerVersion) -> HostCapabilities {
    HostCapabilities {
        transform_recipes: version.at_least(TRANSFORM_INTRODUCED),
        legacy_recipes: version.at_least(SMITHING_INTRODUCED)
            && !version.at_least(TRANSFORM_INTRODUCED),
    }
}

/// Writes registered recipes into a datapack directory.
#[derive(Debug)]
pub struct DatapackHost {
    root: PathBuf,
    version: ServerVersion,
    written: BTreeSet<RecipeKey>,
}

impl DatapackHost {
    /// Prepare the datapack at `root` for recipes in `namespace`.
    ///
    /// Writes `pack.mcmeta` and clears recipes left over from a previous
    /// start, so every start rebuilds the same recipe set.
    pub fn create(
        root: &Path,
        version: ServerVersion,
        namespace: &str,
        pack_format: Option<u32>,
    ) -> Result<Self, PluginError> {
        let host = Self {
            root: root.to_path_buf(),
            version,
            written: BTreeSet::new(),
        };

        let recipe_dir = host.recipe_dir(namespace);
        if recipe_dir.exists() {
            fs::remove_dir_all(&recipe_dir).map_err(|e| PluginError::io(&recipe_dir, e))?;
            debug!(path = %recipe_dir.display(), "Cleared previously generated recipes");
        }
        fs::create_dir_all(&recipe_dir).map_err(|e| PluginError::io(&recipe_dir, e))?;

        let format = pack_format.or_else(|| pack_format_for(version));
        let mut pack = json!({ "description": "Better Smithing upgrade recipes" });
        if let (Some(format), Some(fields)) = (format, pack.as_object_mut()) {
            fields.insert(String::from("pack_format"), Value::from(format));
        }
        let meta = json!({ "pack": pack });
        let meta_path = root.join("pack.mcmeta");
        fs::write(&meta_path, serde_json::to_vec_pretty(&meta)?)
            .map_err(|e| PluginError::io(&meta_path, e))?;

        info!(
            root = %root.display(),
            %version,
            pack_format = ?format,
            "Datapack prepared"
        );
        Ok(host)
    }

    /// Number of recipes written by this host.
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// Whether no recipes have been written yet.
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    fn recipe_dir(&self, namespace: &str) -> PathBuf {
        let folder = if self.version.at_least(SINGULAR_RECIPE_DIR) {
            "recipe"
        } else {
            "recipes"
        };
        self.root.join("data").join(namespace).join(folder)
    }

    fn recipe_path(&self, key: &RecipeKey) -> PathBuf {
        self.recipe_dir(key.namespace())
            .join(format!("{}.json", key.key()))
    }

    fn ingredient(&self, item: &ItemId) -> Value {
        if self.version.at_least(BARE_INGREDIENTS) {
            Value::from(item.namespaced())
        } else {
            json!({ "item": item.namespaced() })
        }
    }

    fn result(&self, item: &ItemId) -> Value {
        if self.version.at_least(RESULT_ID_FORMAT) {
            json!({ "id": item.namespaced() })
        } else {
            json!({ "item": item.namespaced() })
        }
    }

    /// The JSON document for `recipe` in this version's data format.
    pub fn encode(&self, recipe: &SmithingRecipe) -> Value {
        match recipe.template() {
            Some(template) => json!({
                "type": "minecraft:smithing_transform",
                "template": self.ingredient(template),
                "base": self.ingredient(recipe.base()),
                "addition": self.ingredient(recipe.addition()),
                "result": self.result(recipe.result()),
            }),
            None => json!({
                "type": "minecraft:smithing",
                "base": self.ingredient(recipe.base()),
                "addition": self.ingredient(recipe.addition()),
                "result": self.result(recipe.result()),
            }),
        }
    }
}

impl RecipeHost for DatapackHost {
    fn capabilities(&self) -> HostCapabilities {
        capabilities_for(self.version)
    }

    fn register(&mut self, recipe: SmithingRecipe) -> Result<(), HostError> {
        let key = recipe.key().clone();
        if self.written.contains(&key) {
            return Err(HostError::DuplicateKey(key));
        }

        let capabilities = self.capabilities();
        let supported = match recipe.mode() {
            RecipeMode::Transform => capabilities.transform_recipes,
            RecipeMode::Legacy => capabilities.legacy_recipes,
        };
        if !supported {
            return Err(HostError::Rejected {
                key,
                reason: format!("{} recipes are not supported on {}", recipe.mode(), self.version),
            });
        }

        let path = self.recipe_path(&key);
        let bytes = serde_json::to_vec_pretty(&self.encode(&recipe)).map_err(|e| {
            HostError::Encode {
                key: key.clone(),
                message: e.to_string(),
            }
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| HostError::Io {
                key: key.clone(),
                source,
            })?;
        }
        fs::write(&path, bytes).map_err(|source| HostError::Io {
            key: key.clone(),
            source,
        })?;

        debug!(key = %key, path = %path.display(), "Wrote recipe file");
        self.written.insert(key);
        Ok(())
    }

    fn unregister(&mut self, key: &RecipeKey) -> bool {
        if !self.written.remove(key) {
            return false;
        }
        let path = self.recipe_path(key);
        match fs::remove_file(&path) {
            Ok(()) => debug!(key = %key, path = %path.display(), "Removed recipe file"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key = %key, "Recipe file was already missing");
            }
            Err(e) => warn!(
                key = %key,
                path = %path.display(),
                error = %e,
                "Failed to remove recipe file"
            ),
        }
        true
    }
}
