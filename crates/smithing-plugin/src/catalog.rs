//! The vanilla item catalog, as seen by a given server version.
//!
//! Only the items the plugin can ever care about are listed: every tiered
//! tool and armor piece, the usual upgrade catalysts, smithing templates, and
//! a handful of look-alikes (`IRON_INGOT`, `STONE_BRICKS`, horse armor) that
//! share a tier prefix without being tools. Each entry carries the version
//! that introduced it under its current name, so older servers see a smaller
//! catalog and the affected tiers come out empty.

use smithing_types::ItemCatalog;

use crate::version::ServerVersion;

/// One catalog entry and the first version that has it.
#[derive(Debug, Clone, Copy)]
struct VanillaItem {
    name: &'static str,
    since: ServerVersion,
}

const fn item(name: &'static str, minor: u16, patch: u16) -> VanillaItem {
    VanillaItem {
        name,
        since: ServerVersion::new(1, minor, patch),
    }
}

/// Items ordered roughly the way the server enumerates them.
const VANILLA_ITEMS: &[VanillaItem] = &[
    item("AIR", 13, 0),
    item("STONE", 13, 0),
    item("COBBLESTONE", 13, 0),
    item("COBBLED_DEEPSLATE", 17, 0),
    item("BLACKSTONE", 16, 0),
    item("STONE_BRICKS", 13, 0),
    item("OAK_PLANKS", 13, 0),
    item("IRON_BARS", 13, 0),
    item("IRON_DOOR", 13, 0),
    item("DIAMOND_BLOCK", 13, 0),
    item("STICK", 13, 0),
    item("LEATHER", 13, 0),
    item("COPPER_INGOT", 17, 0),
    item("IRON_INGOT", 13, 0),
    item("GOLD_INGOT", 13, 0),
    item("DIAMOND", 13, 0),
    item("EMERALD", 13, 0),
    item("AMETHYST_SHARD", 17, 0),
    item("NETHERITE_INGOT", 16, 0),
    // Wooden
    item("WOODEN_SWORD", 13, 0),
    item("WOODEN_SHOVEL", 13, 0),
    item("WOODEN_PICKAXE", 13, 0),
    item("WOODEN_AXE", 13, 0),
    item("WOODEN_HOE", 13, 0),
    item("WOODEN_SPEAR", 21, 11),
    // Stone
    item("STONE_SWORD", 13, 0),
    item("STONE_SHOVEL", 13, 0),
    item("STONE_PICKAXE", 13, 0),
    item("STONE_AXE", 13, 0),
    item("STONE_HOE", 13, 0),
    item("STONE_SPEAR", 21, 11),
    // Copper
    item("COPPER_SWORD", 21, 9),
    item("COPPER_SHOVEL", 21, 9),
    item("COPPER_PICKAXE", 21, 9),
    item("COPPER_AXE", 21, 9),
    item("COPPER_HOE", 21, 9),
    item("COPPER_SPEAR", 21, 11),
    item("COPPER_HELMET", 21, 9),
    item("COPPER_CHESTPLATE", 21, 9),
    item("COPPER_LEGGINGS", 21, 9),
    item("COPPER_BOOTS", 21, 9),
    // Iron
    item("IRON_SWORD", 13, 0),
    item("IRON_SHOVEL", 13, 0),
    item("IRON_PICKAXE", 13, 0),
    item("IRON_AXE", 13, 0),
    item("IRON_HOE", 13, 0),
    item("IRON_SPEAR", 21, 11),
    item("IRON_HELMET", 13, 0),
    item("IRON_CHESTPLATE", 13, 0),
    item("IRON_LEGGINGS", 13, 0),
    item("IRON_BOOTS", 13, 0),
    // Golden
    item("GOLDEN_SWORD", 13, 0),
    item("GOLDEN_SHOVEL", 13, 0),
    item("GOLDEN_PICKAXE", 13, 0),
    item("GOLDEN_AXE", 13, 0),
    item("GOLDEN_HOE", 13, 0),
    item("GOLDEN_SPEAR", 21, 11),
    item("GOLDEN_HELMET", 13, 0),
    item("GOLDEN_CHESTPLATE", 13, 0),
    item("GOLDEN_LEGGINGS", 13, 0),
    item("GOLDEN_BOOTS", 13, 0),
    item("GOLDEN_APPLE", 13, 0),
    // Diamond
    item("DIAMOND_SWORD", 13, 0),
    item("DIAMOND_SHOVEL", 13, 0),
    item("DIAMOND_PICKAXE", 13, 0),
    item("DIAMOND_AXE", 13, 0),
    item("DIAMOND_HOE", 13, 0),
    item("DIAMOND_SPEAR", 21, 11),
    item("DIAMOND_HELMET", 13, 0),
    item("DIAMOND_CHESTPLATE", 13, 0),
    item("DIAMOND_LEGGINGS", 13, 0),
    item("DIAMOND_BOOTS", 13, 0),
    // Netherite
    item("NETHERITE_SWORD", 16, 0),
    item("NETHERITE_SHOVEL", 16, 0),
    item("NETHERITE_PICKAXE", 16, 0),
    item("NETHERITE_AXE", 16, 0),
    item("NETHERITE_HOE", 16, 0),
    item("NETHERITE_SPEAR", 21, 11),
    item("NETHERITE_HELMET", 16, 0),
    item("NETHERITE_CHESTPLATE", 16, 0),
    item("NETHERITE_LEGGINGS", 16, 0),
    item("NETHERITE_BOOTS", 16, 0),
    // Armor without a tool set
    item("LEATHER_HELMET", 13, 0),
    item("LEATHER_CHESTPLATE", 13, 0),
    item("LEATHER_LEGGINGS", 13, 0),
    item("LEATHER_BOOTS", 13, 0),
    item("CHAINMAIL_HELMET", 13, 0),
    item("CHAINMAIL_CHESTPLATE", 13, 0),
    item("CHAINMAIL_LEGGINGS", 13, 0),
    item("CHAINMAIL_BOOTS", 13, 0),
    item("TURTLE_HELMET", 13, 0),
    item("LEATHER_HORSE_ARMOR", 14, 0),
    item("IRON_HORSE_ARMOR", 13, 0),
    item("GOLDEN_HORSE_ARMOR", 13, 0),
    item("DIAMOND_HORSE_ARMOR", 13, 0),
    // Smithing templates
    item("NETHERITE_UPGRADE_SMITHING_TEMPLATE", 20, 0),
    item("COAST_ARMOR_TRIM_SMITHING_TEMPLATE", 20, 0),
    item("SENTRY_ARMOR_TRIM_SMITHING_TEMPLATE", 20, 0),
    item("WILD_ARMOR_TRIM_SMITHING_TEMPLATE", 20, 0),
];

/// The catalog a server running `version` exposes.
pub fn vanilla_catalog(version: ServerVersion) -> ItemCatalog {
    ItemCatalog::from_names(
        VANILLA_ITEMS
            .iter()
            .filter(|item| version.at_least(item.since))
            .map(|item| item.name),
    )
}
