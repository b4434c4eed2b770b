//! Partitioning of the item catalog into tier buckets.
//!
//! Classification is pure string matching: an item belongs to a tier when
//! its identifier starts with the tier prefix and the remainder is exactly a
//! recognized tool type. `WOODEN_SWORD` is a wooden tool, `WOODEN_DOOR` and
//! `STONE_BRICKS` are not.

use std::collections::BTreeMap;

use smithing_types::{ItemCatalog, ItemId, Tier};

/// The tool-type suffix of `item` under `prefix`, if it is a recognized tool.
pub fn tool_suffix<'a>(item: &'a ItemId, prefix: &str, tool_types: &[&str]) -> Option<&'a str> {
    item.strip_prefix(prefix)
        .filter(|suffix| tool_types.contains(suffix))
}

/// Catalog entries that are tools of the tier with the given prefix.
///
/// Items are returned in catalog order. An empty result is valid.
pub fn classify_tier(catalog: &ItemCatalog, prefix: &str, tool_types: &[&str]) -> Vec<ItemId> {
    catalog
        .iter()
        .filter(|item| tool_suffix(item, prefix, tool_types).is_some())
        .cloned()
        .collect()
}

/// Tool lists for a set of tiers, computed once per registration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierBuckets {
    buckets: BTreeMap<Tier, Vec<ItemId>>,
}

impl TierBuckets {
    /// Classify every tier in `tiers` against the catalog.
    pub fn classify(catalog: &ItemCatalog, tiers: &[Tier], tool_types: &[&str]) -> Self {
        let buckets = tiers
            .iter()
            .map(|tier| (tier.clone(), classify_tier(catalog, &tier.prefix(), tool_types)))
            .collect();
        Self { buckets }
    }

    /// Tools of `tier`, or `None` if the tier was never classified.
    pub fn get(&self, tier: &Tier) -> Option<&[ItemId]> {
        self.buckets.get(tier).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smithing_types::TOOL_TYPES;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_names([
            "WOODEN_SWORD",
            "WOODEN_DOOR",
            "WOODEN_AXE",
            "STONE",
            "STONE_SWORD",
            "STONE_BRICKS",
            "STONE_AXE",
            "IRON_INGOT",
            "IRON_PICKAXE",
            "CHAINMAIL_HELMET",
        ])
    }

    #[test]
    fn classify_keeps_only_tools() {
        let wooden = classify_tier(&catalog(), "WOODEN_", &TOOL_TYPES);
        assert_eq!(
            wooden,
            vec![ItemId::new("WOODEN_SWORD"), ItemId::new("WOODEN_AXE")]
        );
    }

    #[test]
    fn classify_ignores_material_blocks() {
        let stone = classify_tier(&catalog(), "STONE_", &TOOL_TYPES);
        assert_eq!(
            stone,
            vec![ItemId::new("STONE_SWORD"), ItemId::new("STONE_AXE")]
        );
    }

    #[test]
    fn classify_empty_tier() {
        let golden = classify_tier(&catalog(), "GOLDEN_", &TOOL_TYPES);
        assert!(golden.is_empty());
    }

    #[test]
    fn classify_respects_tool_type_list() {
        let swords_only = classify_tier(&catalog(), "WOODEN_", &["SWORD"]);
        assert_eq!(swords_only, vec![ItemId::new("WOODEN_SWORD")]);
    }

    #[test]
    fn tool_suffix_requires_exact_tool_type() {
        let item = ItemId::new("IRON_PICKAXE");
        assert_eq!(tool_suffix(&item, "IRON_", &TOOL_TYPES), Some("PICKAXE"));
        let ingot = ItemId::new("IRON_INGOT");
        assert_eq!(tool_suffix(&ingot, "IRON_", &TOOL_TYPES), None);
    }

    #[test]
    fn buckets_cover_requested_tiers() {
        let tiers = vec![Tier::new("wooden"), Tier::new("golden")];
        let buckets = TierBuckets::classify(&catalog(), &tiers, &TOOL_TYPES);
        assert_eq!(buckets.get(&Tier::new("wooden")).map(<[ItemId]>::len), Some(2));
        assert_eq!(buckets.get(&Tier::new("golden")).map(<[ItemId]>::len), Some(0));
        assert!(buckets.get(&Tier::new("stone")).is_none());
    }
}
