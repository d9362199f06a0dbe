//! Reference table mapping canonical item labels to disposal guidance.

use std::collections::HashMap;

use crate::model::MaterialCategory;
use crate::normalize::normalize_key;

#[derive(Debug, Clone)]
/// One row of the guidance reference table.
pub struct ReferenceEntry {
    /// Canonical label, normalized to `[a-z0-9_]`.
    pub key: String,
    /// Whether items with this label are recyclable.
    pub recyclable: bool,
    /// Material class of the item.
    pub category: MaterialCategory,
    /// Disposal instructions shown to the user.
    pub instructions: String,
}

/// Immutable, order-preserving guidance table.
///
/// Iteration order is the declaration order of the entries, which the
/// resolver relies on to break fuzzy-match ties deterministically. Exact
/// lookups go through a separate index so they stay O(1).
pub struct GuidanceCatalog {
    entries: Vec<ReferenceEntry>,
    index: HashMap<String, usize>,
}

impl GuidanceCatalog {
    /// Build a catalog from the provided entries.
    ///
    /// Keys are re-normalized on the way in; when two entries collapse to
    /// the same key, the first declaration wins and later ones are
    /// discarded, keeping keys unique.
    #[must_use]
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        let mut unique = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            let key = normalize_key(&entry.key);
            if key.is_empty() || index.contains_key(&key) {
                continue;
            }
            index.insert(key.clone(), unique.len());
            unique.push(ReferenceEntry { key, ..entry });
        }

        Self {
            entries: unique,
            index,
        }
    }

    /// Look up an entry by its normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ReferenceEntry> {
        self.index
            .get(key)
            .and_then(|position| self.entries.get(*position))
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in item table covering common household recyclables.
    #[must_use]
    pub fn builtin() -> Self {
        use MaterialCategory::{Electronics, Glass, Hazardous, Metal, Paper, Plastic};

        let rows = vec![
            // Bottles and containers
            entry(
                "bottle",
                true,
                Plastic,
                "Remove cap, rinse thoroughly, and place in recycling bin. \
                 Check bottom for recycling number.",
            ),
            entry(
                "plastic_bottle",
                true,
                Plastic,
                "Remove cap, rinse thoroughly, and place in recycling bin. \
                 Most plastic bottles are recyclable (types 1 & 2).",
            ),
            entry(
                "glass_bottle",
                true,
                Glass,
                "Rinse thoroughly. Remove caps or lids. Sort by color if \
                 required in your area.",
            ),
            // Paper products
            entry(
                "paper",
                true,
                Paper,
                "Keep dry and clean. Remove any plastic windows or metal \
                 fasteners. Flatten if possible.",
            ),
            entry(
                "newspaper",
                true,
                Paper,
                "Keep dry and clean. Remove any plastic bags or rubber bands.",
            ),
            entry(
                "cardboard",
                true,
                Paper,
                "Break down boxes, remove tape and staples. Keep dry and \
                 clean. Flatten to save space.",
            ),
            entry(
                "box",
                true,
                Paper,
                "Break down the box, remove any tape or staples. Must be \
                 clean and dry.",
            ),
            // Metal items
            entry(
                "can",
                true,
                Metal,
                "Rinse thoroughly. Both aluminum and steel cans are widely \
                 recyclable. Labels can stay on.",
            ),
            entry(
                "aluminum_can",
                true,
                Metal,
                "Rinse clean. Crush if possible to save space. Always recyclable.",
            ),
            entry(
                "tin_can",
                true,
                Metal,
                "Rinse thoroughly. Remove paper labels if possible. Flatten \
                 to save space.",
            ),
            // Glass items
            entry(
                "glass",
                true,
                Glass,
                "Rinse thoroughly. Remove lids and caps. Sort by color if \
                 required in your area.",
            ),
            entry(
                "glass_jar",
                true,
                Glass,
                "Remove lid, rinse thoroughly. Labels can stay on. Sort by \
                 color if required.",
            ),
            // Plastic items
            entry(
                "plastic_container",
                true,
                Plastic,
                "Check recycling number on bottom. Rinse clean. Remove lid \
                 if different material.",
            ),
            entry(
                "plastic_bag",
                false,
                Plastic,
                "Most curbside programs don't accept plastic bags. Return to \
                 grocery stores for specialized recycling.",
            ),
            // Electronics
            entry(
                "cell_phone",
                true,
                Electronics,
                "Do not place in regular recycling. Take to electronics \
                 recycling center or retailer.",
            ),
            entry(
                "computer",
                true,
                Electronics,
                "Requires special handling. Take to electronics recycling \
                 center or manufacturer recycling program.",
            ),
            // Common household items
            entry(
                "battery",
                true,
                Hazardous,
                "Do not place in regular recycling. Take to battery \
                 recycling location or hardware store.",
            ),
            entry(
                "light_bulb",
                true,
                Hazardous,
                "LED and CFL bulbs require special recycling. Take to \
                 hardware store or recycling center.",
            ),
        ];

        Self::new(rows)
    }
}

fn entry(
    key: &str,
    recyclable: bool,
    category: MaterialCategory,
    instructions: &str,
) -> ReferenceEntry {
    ReferenceEntry {
        key: key.to_owned(),
        recyclable,
        category,
        instructions: instructions.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_are_already_normalized() {
        let catalog = GuidanceCatalog::builtin();
        for row in catalog.iter() {
            assert_eq!(normalize_key(&row.key), row.key, "key {:?}", row.key);
        }
    }

    #[test]
    fn builtin_covers_expected_labels() {
        let catalog = GuidanceCatalog::builtin();
        assert_eq!(catalog.len(), 18);
        assert!(catalog.get("plastic_bottle").is_some());
        assert!(catalog.get("light_bulb").is_some());
        assert!(catalog.get("toothbrush").is_none());
    }

    #[test]
    fn duplicate_keys_keep_first_declaration() {
        let catalog = GuidanceCatalog::new(vec![
            entry("jar", true, MaterialCategory::Glass, "first"),
            entry("Jar", false, MaterialCategory::Plastic, "second"),
        ]);

        assert_eq!(catalog.len(), 1);
        let kept = catalog.get("jar").expect("jar entry");
        assert_eq!(kept.instructions, "first");
        assert!(kept.recyclable);
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let catalog = GuidanceCatalog::new(vec![
            entry("zebra_bin", true, MaterialCategory::Metal, "z"),
            entry("apple_bin", true, MaterialCategory::Metal, "a"),
        ]);

        let keys: Vec<&str> = catalog.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, vec!["zebra_bin", "apple_bin"]);
    }
}
