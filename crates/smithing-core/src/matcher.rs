//! Pairing of same-tool-type items across two tiers.

use smithing_types::ItemId;

/// One upgrade: `base` of the source tier becomes `result` of the target tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradePair {
    /// Source-tier item.
    pub base: ItemId,
    /// Target-tier item with the same tool type.
    pub result: ItemId,
    /// The shared tool-type suffix (`SWORD`).
    pub tool_type: String,
}

/// Pair each source item with the target item of the same tool type.
///
/// The suffix of each item is taken after stripping its own tier prefix.
/// The first matching target wins; source items with no counterpart in the
/// target tier are skipped. Output follows source order.
pub fn match_pairs(
    source: &[ItemId],
    source_prefix: &str,
    target: &[ItemId],
    target_prefix: &str,
) -> Vec<UpgradePair> {
    source
        .iter()
        .filter_map(|base| {
            let suffix = base.strip_prefix(source_prefix)?;
            let result = target
                .iter()
                .find(|candidate| candidate.strip_prefix(target_prefix) == Some(suffix))?;
            Some(UpgradePair {
                base: base.clone(),
                result: result.clone(),
                tool_type: suffix.to_owned(),
            })
        })
        .collect()
}
