//! The startup registration pass.
//!
//! [`register_upgrades`] runs once when the plugin is enabled: it resolves
//! the configured template, negotiates the recipe mode with the host,
//! classifies the catalog into tiers, and registers one recipe per matched
//! tool pair of every configured upgrade rule.
//!
//! Nothing in the pass is fatal. Configuration problems drop the offending
//! rule, host incompatibilities drop the affected recipe, and host
//! rejections are recorded while the remaining recipes are still attempted.
//! Everything that was skipped ends up in the [`RegistrationReport`] and in
//! the log.

use smithing_types::{ItemCatalog, ItemId, RecipeKey, RecipeMode, TOOL_TYPES, Tier};
use tracing::{debug, error, info, warn};

use crate::builder::{RecipeBuilder, negotiate_mode};
use crate::classifier::TierBuckets;
use crate::config::{PluginConfig, TierRuleConfig};
use crate::error::{BuildError, HostError};
use crate::host::RecipeHost;
use crate::matcher::match_pairs;

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Everything a registration pass reads from or writes to.
#[derive(Debug)]
pub struct PluginContext<'a, H: RecipeHost + ?Sized> {
    /// Items known to the host.
    pub catalog: &'a ItemCatalog,
    /// The loaded configuration.
    pub config: &'a PluginConfig,
    /// Where recipes are registered.
    pub host: &'a mut H,
    /// Namespace for recipe keys.
    pub namespace: &'a str,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A condition that made the pass skip part of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationWarning {
    /// The configured template is not an item on this server.
    #[error("template item '{name}' is not valid for this server version; using AIR instead")]
    UnknownTemplate {
        /// The configured template name.
        name: String,
    },

    /// A known tier has no tools on this server.
    #[error("tier '{tier}' has no compatible tools for this server version; skipping")]
    TierHasNoTools {
        /// The empty tier.
        tier: Tier,
    },

    /// The configuration names a source tier the plugin does not know.
    #[error("unknown tier '{tier}' in config; skipping")]
    UnknownSourceTier {
        /// The configured tier name.
        tier: String,
    },

    /// A tier rule lacks one of its fields.
    #[error("tier '{tier}' is missing '{field}' in config; skipping")]
    MissingField {
        /// The tier whose rule is incomplete.
        tier: Tier,
        /// The missing field name.
        field: &'static str,
    },

    /// A rule upgrades into a tier the plugin does not know.
    #[error("unknown upgrade target tier '{target}' in config; skipping tier '{tier}'")]
    UnknownTargetTier {
        /// The source tier.
        tier: Tier,
        /// The configured target name.
        target: String,
    },

    /// A rule upgrades into a tier that has no tools on this server.
    #[error(
        "upgrade target tier '{target}' has no compatible tools for this server version; skipping tier '{tier}'"
    )]
    TargetTierHasNoTools {
        /// The source tier.
        tier: Tier,
        /// The empty target tier.
        target: Tier,
    },

    /// A rule's catalyst is not an item on this server.
    #[error("unknown upgrade item '{item}' in config; skipping tier '{tier}'")]
    UnknownUpgradeItem {
        /// The source tier.
        tier: Tier,
        /// The configured item name.
        item: String,
    },

    /// A recipe could not be built for the negotiated mode.
    #[error("{0}")]
    RecipeNotBuilt(BuildError),
}

/// A recipe the host refused.
#[derive(Debug)]
pub struct RecipeRejection {
    /// The refused recipe.
    pub key: RecipeKey,
    /// Why the host refused it.
    pub error: HostError,
}

/// Outcome of one registration pass.
#[derive(Debug, Default)]
pub struct RegistrationReport {
    /// The negotiated recipe mode, `None` if the host has no smithing recipes.
    pub mode: Option<RecipeMode>,
    /// Keys the host accepted, in registration order.
    pub registered: Vec<RecipeKey>,
    /// Configuration and compatibility problems that were skipped.
    pub warnings: Vec<RegistrationWarning>,
    /// Recipes the host refused.
    pub rejections: Vec<RecipeRejection>,
}

impl RegistrationReport {
    /// Number of recipes the host accepted.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Whether the pass completed without warnings or rejections.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.rejections.is_empty()
    }

    fn warn(&mut self, warning: RegistrationWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

// ---------------------------------------------------------------------------
// Pass
// ---------------------------------------------------------------------------

/// Register every configured tier upgrade with the host.
pub fn register_upgrades<H: RecipeHost + ?Sized>(
    ctx: &mut PluginContext<'_, H>,
) -> RegistrationReport {
    let mut report = RegistrationReport::default();

    let template = resolve_template(ctx.catalog, &ctx.config.template, &mut report);
    report.mode = negotiate_mode(ctx.host.capabilities());
    match report.mode {
        Some(mode) => debug!(%mode, "Negotiated smithing recipe mode"),
        None => warn!("Smithing recipes are not available on this server version"),
    }
    let builder = RecipeBuilder::new(report.mode, ctx.namespace, template);

    let tiers = Tier::known();
    let buckets = TierBuckets::classify(ctx.catalog, &tiers, &TOOL_TYPES);

    for name in ctx.config.tiers.keys() {
        if !Tier::new(name).is_known() {
            report.warn(RegistrationWarning::UnknownSourceTier { tier: name.clone() });
        }
    }

    for tier in &tiers {
        let tools = buckets.get(tier).unwrap_or_default();
        if tools.is_empty() {
            report.warn(RegistrationWarning::TierHasNoTools { tier: tier.clone() });
            continue;
        }

        let Some(rule) = ctx.config.rule(tier.name()) else {
            continue;
        };
        let Some(plan) = resolve_rule(tier, rule, ctx.catalog, &buckets, &mut report) else {
            continue;
        };

        let pairs = match_pairs(tools, &tier.prefix(), plan.target_tools, &plan.target.prefix());
        debug!(
            tier = %tier,
            target = %plan.target,
            addition = %plan.addition,
            pairs = pairs.len(),
            "Matched upgrade pairs"
        );

        for pair in &pairs {
            let recipe = match builder.build(pair, &plan.addition) {
                Ok(recipe) => recipe,
                Err(err) => {
                    report.warn(RegistrationWarning::RecipeNotBuilt(err));
                    continue;
                }
            };
            let key = recipe.key().clone();
            match ctx.host.register(recipe) {
                Ok(()) => {
                    debug!(key = %key, "Registered smithing recipe");
                    report.registered.push(key);
                }
                Err(err) => {
                    error!(key = %key, error = %err, "Failed to register smithing recipe");
                    report.rejections.push(RecipeRejection { key, error: err });
                }
            }
        }
    }

    info!(
        registered = report.registered.len(),
        warnings = report.warnings.len(),
        rejections = report.rejections.len(),
        "Smithing upgrade registration complete"
    );
    report
}

/// Remove the recipes of a previous pass and register everything again.
///
/// Running this with an unchanged catalog and configuration yields the same
/// recipe set as the previous pass.
pub fn reload_upgrades<H: RecipeHost + ?Sized>(
    ctx: &mut PluginContext<'_, H>,
    previous: &RegistrationReport,
) -> RegistrationReport {
    let mut removed: usize = 0;
    for key in &previous.registered {
        if ctx.host.unregister(key) {
            removed = removed.saturating_add(1);
        } else {
            debug!(key = %key, "Recipe was already gone before reload");
        }
    }
    info!(removed, "Removed previously registered smithing recipes");
    register_upgrades(ctx)
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// A fully resolved upgrade rule.
struct RulePlan<'b> {
    target: Tier,
    target_tools: &'b [ItemId],
    addition: ItemId,
}

/// Resolve the configured template, falling back to "no template".
///
/// A blank name reads as `AIR`.
fn resolve_template(
    catalog: &ItemCatalog,
    name: &str,
    report: &mut RegistrationReport,
) -> Option<ItemId> {
    if name.trim().is_empty() {
        return None;
    }
    match catalog.match_item(name) {
        Some(item) if item.is_air() => None,
        Some(item) => Some(item.clone()),
        None if ItemId::new(name.trim()).is_air() => None,
        None => {
            report.warn(RegistrationWarning::UnknownTemplate {
                name: name.to_owned(),
            });
            None
        }
    }
}

/// Check a tier's rule against the known tiers and the catalog.
///
/// Returns `None` (after recording every applicable warning) if any part of
/// the rule does not resolve.
fn resolve_rule<'b>(
    tier: &Tier,
    rule: &TierRuleConfig,
    catalog: &ItemCatalog,
    buckets: &'b TierBuckets,
    report: &mut RegistrationReport,
) -> Option<RulePlan<'b>> {
    let Some(upgrade_to) = rule.upgrade_to.as_deref() else {
        report.warn(RegistrationWarning::MissingField {
            tier: tier.clone(),
            field: "upgrade_to",
        });
        return None;
    };
    let Some(upgrade_item) = rule.upgrade_item.as_deref() else {
        report.warn(RegistrationWarning::MissingField {
            tier: tier.clone(),
            field: "upgrade_item",
        });
        return None;
    };

    let target = Tier::new(upgrade_to);
    let target_tools = buckets.get(&target);
    let addition = catalog.match_item(upgrade_item).cloned();

    match target_tools {
        None => report.warn(RegistrationWarning::UnknownTargetTier {
            tier: tier.clone(),
            target: upgrade_to.to_owned(),
        }),
        Some([]) => report.warn(RegistrationWarning::TargetTierHasNoTools {
            tier: tier.clone(),
            target: target.clone(),
        }),
        Some(_) => {}
    }
    if addition.is_none() {
        report.warn(RegistrationWarning::UnknownUpgradeItem {
            tier: tier.clone(),
            item: upgrade_item.to_owned(),
        });
    }

    match (target_tools, addition) {
        (Some(target_tools), Some(addition)) if !target_tools.is_empty() => Some(RulePlan {
            target,
            target_tools,
            addition,
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
