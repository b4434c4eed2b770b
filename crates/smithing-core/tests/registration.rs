//! Integration tests for the startup registration pass.
//!
//! Each test runs a full pass against an in-memory host and checks what
//! ended up registered and what was reported as skipped.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use smithing_core::{
    BuildError, HostCapabilities, HostError, MemoryHost, PluginConfig, PluginContext,
    RecipeHost, RegistrationReport, RegistrationWarning, TierRuleConfig, register_upgrades,
    reload_upgrades,
};
use smithing_types::{
    DEFAULT_NAMESPACE, ItemCatalog, ItemId, RecipeKey, RecipeMode, SmithingRecipe, Tier,
};

const TEMPLATE: &str = "NETHERITE_UPGRADE_SMITHING_TEMPLATE";

fn small_catalog() -> ItemCatalog {
    ItemCatalog::from_names([
        "AIR",
        "WOODEN_SWORD",
        "WOODEN_AXE",
        "STONE_SWORD",
        "STONE_AXE",
        "COBBLESTONE",
        TEMPLATE,
    ])
}

fn full_catalog() -> ItemCatalog {
    ItemCatalog::from_names([
        "AIR",
        "WOODEN_SWORD",
        "WOODEN_SHOVEL",
        "WOODEN_PICKAXE",
        "WOODEN_AXE",
        "WOODEN_HOE",
        "STONE_SWORD",
        "STONE_SHOVEL",
        "STONE_PICKAXE",
        "STONE_AXE",
        "STONE_HOE",
        "IRON_SWORD",
        "IRON_SHOVEL",
        "IRON_PICKAXE",
        "IRON_AXE",
        "IRON_HOE",
        "IRON_HELMET",
        "IRON_CHESTPLATE",
        "IRON_LEGGINGS",
        "IRON_BOOTS",
        "LEATHER_HELMET",
        "LEATHER_CHESTPLATE",
        "LEATHER_LEGGINGS",
        "LEATHER_BOOTS",
        "GOLDEN_SWORD",
        "DIAMOND_SWORD",
        "DIAMOND_PICKAXE",
        "COBBLESTONE",
        "IRON_INGOT",
        "DIAMOND",
        TEMPLATE,
    ])
}

fn rule(to: &str, item: &str) -> TierRuleConfig {
    TierRuleConfig {
        upgrade_to: Some(to.to_owned()),
        upgrade_item: Some(item.to_owned()),
    }
}

fn config_with(template: &str, rules: &[(&str, TierRuleConfig)]) -> PluginConfig {
    PluginConfig {
        template: template.to_owned(),
        tiers: rules
            .iter()
            .map(|(tier, rule)| ((*tier).to_owned(), rule.clone()))
            .collect(),
    }
}

fn run<H: RecipeHost>(catalog: &ItemCatalog, config: &PluginConfig, host: &mut H) -> RegistrationReport {
    let mut ctx = PluginContext {
        catalog,
        config,
        host,
        namespace: DEFAULT_NAMESPACE,
    };
    register_upgrades(&mut ctx)
}

fn key(base: &str, result: &str) -> RecipeKey {
    RecipeKey::upgrade(DEFAULT_NAMESPACE, &ItemId::new(base), &ItemId::new(result))
}

/// Host that refuses one specific key and accepts the rest.
struct PickyHost {
    inner: MemoryHost,
    refuse: RecipeKey,
}

impl RecipeHost for PickyHost {
    fn capabilities(&self) -> HostCapabilities {
        self.inner.capabilities()
    }

    fn register(&mut self, recipe: SmithingRecipe) -> Result<(), HostError> {
        if recipe.key() == &self.refuse {
            return Err(HostError::Rejected {
                key: recipe.key().clone(),
                reason: String::from("refused for test"),
            });
        }
        self.inner.register(recipe)
    }

    fn unregister(&mut self, key: &RecipeKey) -> bool {
        self.inner.unregister(key)
    }
}

#[test]
fn wooden_to_stone_produces_two_recipes() {
    let catalog = small_catalog();
    let config = config_with("AIR", &[("wooden", rule("stone", "COBBLESTONE"))]);
    let mut host = MemoryHost::new(HostCapabilities::LEGACY);

    let report = run(&catalog, &config, &mut host);

    assert_eq!(report.registered_count(), 2);
    let sword = host.get(&key("WOODEN_SWORD", "STONE_SWORD")).unwrap();
    assert_eq!(sword.base(), &ItemId::new("WOODEN_SWORD"));
    assert_eq!(sword.result(), &ItemId::new("STONE_SWORD"));
    assert_eq!(sword.addition(), &ItemId::new("COBBLESTONE"));

    let axe = host.get(&key("WOODEN_AXE", "STONE_AXE")).unwrap();
    assert_eq!(axe.base(), &ItemId::new("WOODEN_AXE"));
    assert_eq!(axe.result(), &ItemId::new("STONE_AXE"));
    assert_eq!(axe.addition(), &ItemId::new("COBBLESTONE"));
}

#[test]
fn empty_tiers_warn_and_produce_nothing() {
    let catalog = small_catalog();
    let config = config_with("AIR", &[("golden", rule("stone", "COBBLESTONE"))]);
    let mut host = MemoryHost::new(HostCapabilities::LEGACY);

    let report = run(&catalog, &config, &mut host);

    assert!(host.is_empty());
    assert!(report.warnings.contains(&RegistrationWarning::TierHasNoTools {
        tier: Tier::new("golden"),
    }));
    // Every known tier missing from the small catalog is reported.
    for tier in ["leather", "copper", "iron", "diamond"] {
        assert!(report.warnings.contains(&RegistrationWarning::TierHasNoTools {
            tier: Tier::new(tier),
        }));
    }
}

#[test]
fn empty_target_tier_drops_rule() {
    let catalog = small_catalog();
    let config = config_with("AIR", &[("wooden", rule("diamond", "COBBLESTONE"))]);
    let mut host = MemoryHost::new(HostCapabilities::LEGACY);

    let report = run(&catalog, &config, &mut host);

    assert!(host.is_empty());
    assert!(report.warnings.contains(&RegistrationWarning::TargetTierHasNoTools {
        tier: Tier::new("wooden"),
        target: Tier::new("diamond"),
    }));
}

#[test]
fn invalid_rules_do_not_block_valid_ones() {
    let catalog = full_catalog();
    let config = config_with(
        "AIR",
        &[
            ("wooden", rule("obsidian", "COBBLESTONE")),
            ("stone", rule("iron", "UNOBTAINIUM")),
            ("iron", rule("diamond", "DIAMOND")),
        ],
    );
    let mut host = MemoryHost::new(HostCapabilities::LEGACY);

    let report = run(&catalog, &config, &mut host);

    assert!(report.warnings.contains(&RegistrationWarning::UnknownTargetTier {
        tier: Tier::new("wooden"),
        target: String::from("obsidian"),
    }));
    assert!(report.warnings.contains(&RegistrationWarning::UnknownUpgradeItem {
        tier: Tier::new("stone"),
        item: String::from("UNOBTAINIUM"),
    }));

    let registered: BTreeSet<String> = report
        .registered
        .iter()
        .map(|k| k.key().to_owned())
        .collect();
    let expected: BTreeSet<String> = [
        "iron_sword_to_diamond_sword",
        "iron_pickaxe_to_diamond_pickaxe",
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect();
    assert_eq!(registered, expected);
    assert!(host.recipes().all(|r| r.base().as_str().starts_with("IRON_")));
}

#[test]
fn recipe_keys_are_unique_across_a_run() {
    let catalog = full_catalog();
    let config = config_with(
        TEMPLATE,
        &[
            ("wooden", rule("stone", "COBBLESTONE")),
            ("stone", rule("iron", "IRON_INGOT")),
            ("leather", rule("iron", "IRON_INGOT")),
            ("iron", rule("diamond", "DIAMOND")),
            ("golden", rule("diamond", "DIAMOND")),
        ],
    );
    let mut host = MemoryHost::new(HostCapabilities::TRANSFORM);

    let report = run(&catalog, &config, &mut host);

    // 5 wooden + 5 stone + 4 leather + 2 iron + 1 golden
    assert_eq!(report.registered_count(), 17);
    let unique: BTreeSet<&RecipeKey> = report.registered.iter().collect();
    assert_eq!(unique.len(), report.registered_count());
    assert!(report.rejections.is_empty());
}

#[test]
fn every_recipe_keeps_its_tool_type() {
    let catalog = full_catalog();
    let config = config_with("AIR", &[("leather", rule("iron", "IRON_INGOT"))]);
    let mut host = MemoryHost::new(HostCapabilities::LEGACY);

    run(&catalog, &config, &mut host);

    assert_eq!(host.len(), 4);
    for recipe in host.recipes() {
        let base_type = recipe.base().strip_prefix("LEATHER_").unwrap();
        let result_type = recipe.result().strip_prefix("IRON_").unwrap();
        assert_eq!(base_type, result_type);
    }
}

#[test]
fn legacy_mode_never_has_template() {
    let catalog = small_catalog();
    for template in ["AIR", TEMPLATE, "NOT_AN_ITEM"] {
        let config = config_with(template, &[("wooden", rule("stone", "COBBLESTONE"))]);
        let mut host = MemoryHost::new(HostCapabilities::LEGACY);

        let report = run(&catalog, &config, &mut host);

        assert_eq!(report.mode, Some(RecipeMode::Legacy));
        assert_eq!(host.len(), 2);
        assert!(host.recipes().all(|r| r.template().is_none()));
    }
}

#[test]
fn transform_mode_uses_configured_template() {
    let catalog = small_catalog();
    let config = config_with(
        "minecraft:netherite_upgrade_smithing_template",
        &[("wooden", rule("stone", "cobblestone"))],
    );
    let mut host = MemoryHost::new(HostCapabilities::TRANSFORM);

    let report = run(&catalog, &config, &mut host);

    assert_eq!(report.mode, Some(RecipeMode::Transform));
    assert_eq!(host.len(), 2);
    assert!(host
        .recipes()
        .all(|r| r.template() == Some(&ItemId::new(TEMPLATE))));
}

#[test]
fn transform_mode_without_template_skips_recipes() {
    let catalog = small_catalog();
    let config = config_with("AIR", &[("wooden", rule("stone", "COBBLESTONE"))]);
    let mut host = MemoryHost::new(HostCapabilities::TRANSFORM);

    let report = run(&catalog, &config, &mut host);

    assert!(host.is_empty());
    let skipped = report
        .warnings
        .iter()
        .filter(|w| {
            matches!(
                w,
                RegistrationWarning::RecipeNotBuilt(BuildError::TemplateRequired { .. })
            )
        })
        .count();
    assert_eq!(skipped, 2);
}

#[test]
fn unknown_template_falls_back_and_warns() {
    let catalog = small_catalog();
    let config = config_with("ECHO_TEMPLATE", &[("wooden", rule("stone", "COBBLESTONE"))]);
    let mut host = MemoryHost::new(HostCapabilities::TRANSFORM);

    let report = run(&catalog, &config, &mut host);

    assert!(host.is_empty());
    assert!(report.warnings.contains(&RegistrationWarning::UnknownTemplate {
        name: String::from("ECHO_TEMPLATE"),
    }));
}

#[test]
fn host_rejection_is_isolated_per_recipe() {
    let catalog = small_catalog();
    let config = config_with("AIR", &[("wooden", rule("stone", "COBBLESTONE"))]);
    let mut host = PickyHost {
        inner: MemoryHost::new(HostCapabilities::LEGACY),
        refuse: key("WOODEN_SWORD", "STONE_SWORD"),
    };

    let report = run(&catalog, &config, &mut host);

    assert_eq!(report.rejections.len(), 1);
    assert_eq!(
        report.rejections.first().map(|r| r.key.clone()),
        Some(key("WOODEN_SWORD", "STONE_SWORD"))
    );
    assert_eq!(report.registered, vec![key("WOODEN_AXE", "STONE_AXE")]);
    assert_eq!(host.inner.len(), 1);
}

#[test]
fn second_pass_without_reload_is_rejected_as_duplicate() {
    let catalog = small_catalog();
    let config = config_with("AIR", &[("wooden", rule("stone", "COBBLESTONE"))]);
    let mut host = MemoryHost::new(HostCapabilities::LEGACY);

    run(&catalog, &config, &mut host);
    let again = run(&catalog, &config, &mut host);

    assert_eq!(again.registered_count(), 0);
    assert_eq!(again.rejections.len(), 2);
    assert!(again
        .rejections
        .iter()
        .all(|r| matches!(r.error, HostError::DuplicateKey(_))));
    assert_eq!(host.len(), 2);
}

#[test]
fn reload_rebuilds_the_same_recipes() {
    let catalog = full_catalog();
    let config = config_with(
        "AIR",
        &[
            ("wooden", rule("stone", "COBBLESTONE")),
            ("stone", rule("iron", "IRON_INGOT")),
        ],
    );
    let mut host = MemoryHost::new(HostCapabilities::LEGACY);

    let first = run(&catalog, &config, &mut host);
    let before: Vec<SmithingRecipe> = host.recipes().cloned().collect();

    let second = {
        let mut ctx = PluginContext {
            catalog: &catalog,
            config: &config,
            host: &mut host,
            namespace: DEFAULT_NAMESPACE,
        };
        reload_upgrades(&mut ctx, &first)
    };
    let after: Vec<SmithingRecipe> = host.recipes().cloned().collect();

    assert!(second.rejections.is_empty());
    assert_eq!(first.registered, second.registered);
    assert_eq!(before, after);
}

#[test]
fn bundled_config_registers_against_full_catalog() {
    let catalog = full_catalog();
    let config = PluginConfig::bundled().unwrap();
    let mut host = MemoryHost::new(HostCapabilities::LEGACY);

    let report = run(&catalog, &config, &mut host);

    assert!(report.registered_count() > 0);
    assert!(report.rejections.is_empty());
    assert!(host.get(&key("WOODEN_PICKAXE", "STONE_PICKAXE")).is_some());
    assert!(host.get(&key("IRON_PICKAXE", "DIAMOND_PICKAXE")).is_some());
}
