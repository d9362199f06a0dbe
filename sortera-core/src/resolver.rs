//! Maps noisy classifier labels to disposal guidance.
//!
//! Resolution is exact-match first, fuzzy fallback second, and a fixed
//! unknown-category result last. The resolver is total: any input,
//! including garbage that normalizes to an empty string, yields a result.

use crate::catalog::{GuidanceCatalog, ReferenceEntry};
use crate::model::{GuidanceResult, MaterialCategory};
use crate::normalize::normalize_key;

/// Similarity a fuzzy match must strictly exceed to be accepted.
pub const FUZZY_ACCEPT_THRESHOLD: f64 = 0.6;
/// Similarity awarded when one label contains the other.
pub const SUBSTRING_SCORE: f64 = 0.8;
/// Similarity of identical labels, and the confidence of exact hits.
pub const EXACT_SCORE: f64 = 1.0;

/// Instructions returned when no catalog entry matches.
pub const FALLBACK_INSTRUCTIONS: &str = "Unable to determine recycling status. \
    Please check your local recycling guidelines or contact your waste \
    management provider.";

/// Stateless resolver over an immutable guidance catalog.
pub struct GuidanceResolver {
    catalog: GuidanceCatalog,
}

impl GuidanceResolver {
    /// Create a resolver over the given catalog.
    #[must_use]
    pub fn new(catalog: GuidanceCatalog) -> Self {
        Self { catalog }
    }

    /// Create a resolver over the built-in item table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(GuidanceCatalog::builtin())
    }

    /// The catalog this resolver consults.
    #[must_use]
    pub fn catalog(&self) -> &GuidanceCatalog {
        &self.catalog
    }

    /// Resolve a free-text label into disposal guidance.
    ///
    /// Always succeeds; unknown labels come back with category
    /// [`MaterialCategory::Unknown`] and confidence `0.0`.
    #[must_use]
    pub fn resolve(&self, label: &str) -> GuidanceResult {
        let normalized = normalize_key(label);
        if normalized.is_empty() {
            return no_match();
        }

        if let Some(hit) = self.catalog.get(&normalized) {
            return from_entry(hit, EXACT_SCORE);
        }

        // Strictly-greater comparison keeps the earliest catalog entry on
        // ties, so results stay deterministic across runs.
        let mut best: Option<(&ReferenceEntry, f64)> = None;
        for candidate in self.catalog.iter() {
            let score = similarity(&normalized, &candidate.key);
            if score > FUZZY_ACCEPT_THRESHOLD
                && best.is_none_or(|(_, best_score)| score > best_score)
            {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((hit, score)) => from_entry(hit, score),
            None => no_match(),
        }
    }
}

/// Similarity between two normalized labels in `[0, 1]`.
///
/// Identical labels score `1.0`, containment either way scores `0.8`,
/// otherwise the labels are split on `_` and the score is the count of
/// input words matching some key word (containment either way) divided by
/// the larger word count. The max denominator undercounts when one side
/// has many more words than the other; kept as-is for compatibility with
/// existing confidence values.
fn similarity(input: &str, key: &str) -> f64 {
    if input == key {
        return EXACT_SCORE;
    }
    if input.contains(key) || key.contains(input) {
        return SUBSTRING_SCORE;
    }

    let input_words: Vec<&str> = input.split('_').filter(|word| !word.is_empty()).collect();
    let key_words: Vec<&str> = key.split('_').filter(|word| !word.is_empty()).collect();

    let denominator = input_words.len().max(key_words.len());
    if denominator == 0 {
        return 0.0;
    }

    let matched = input_words
        .iter()
        .filter(|word| {
            key_words
                .iter()
                .any(|key_word| key_word.contains(**word) || word.contains(key_word))
        })
        .count();

    matched as f64 / denominator as f64
}

fn from_entry(hit: &ReferenceEntry, confidence: f64) -> GuidanceResult {
    GuidanceResult {
        recyclable: hit.recyclable,
        category: hit.category,
        instructions: hit.instructions.clone(),
        confidence,
    }
}

fn no_match() -> GuidanceResult {
    GuidanceResult {
        recyclable: false,
        category: MaterialCategory::Unknown,
        instructions: FALLBACK_INSTRUCTIONS.to_owned(),
        confidence: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceEntry;

    fn entry(key: &str) -> ReferenceEntry {
        ReferenceEntry {
            key: key.to_owned(),
            recyclable: true,
            category: MaterialCategory::Metal,
            instructions: format!("instructions for {key}"),
        }
    }

    #[test]
    fn every_catalog_key_resolves_exactly() {
        let resolver = GuidanceResolver::builtin();
        let keys: Vec<String> = resolver
            .catalog()
            .iter()
            .map(|row| row.key.clone())
            .collect();

        for key in keys {
            let result = resolver.resolve(&key);
            let expected = resolver.catalog().get(&key).expect("catalog entry");
            assert!((result.confidence - EXACT_SCORE).abs() < f64::EPSILON, "{key}");
            assert_eq!(result.recyclable, expected.recyclable);
            assert_eq!(result.category, expected.category);
            assert_eq!(result.instructions, expected.instructions);
        }
    }

    #[test]
    fn label_is_normalized_before_lookup() {
        let resolver = GuidanceResolver::builtin();

        let result = resolver.resolve("Plastic Bottle");
        assert!(result.recyclable);
        assert_eq!(result.category, MaterialCategory::Plastic);
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);
        assert!(result.instructions.starts_with("Remove cap, rinse thoroughly"));

        let tin = resolver.resolve("tin can");
        assert_eq!(tin.category, MaterialCategory::Metal);
        assert!((tin.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unmatched_label_falls_back_to_unknown() {
        let resolver = GuidanceResolver::builtin();
        let result = resolver.resolve("unknown_alien_object");

        assert!(!result.recyclable);
        assert_eq!(result.category, MaterialCategory::Unknown);
        assert_eq!(result.instructions, FALLBACK_INSTRUCTIONS);
        assert!(result.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_matches_nothing() {
        let resolver = GuidanceResolver::builtin();
        for label in ["", "   ", "!?!"] {
            let result = resolver.resolve(label);
            assert_eq!(result.category, MaterialCategory::Unknown, "{label:?}");
            assert!(result.confidence.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn superstring_label_gets_substring_score() {
        let resolver = GuidanceResolver::builtin();
        let result = resolver.resolve("plastic_bottle_extra");

        assert_eq!(result.category, MaterialCategory::Plastic);
        assert!(result.confidence >= SUBSTRING_SCORE);
        assert!(result.confidence < EXACT_SCORE);
    }

    #[test]
    fn score_at_threshold_is_rejected() {
        // Three of five words match and neither label contains the other,
        // so the similarity is exactly 0.6 and must not be accepted.
        let resolver = GuidanceResolver::new(GuidanceCatalog::new(vec![entry(
            "amber_barrel_crate_drum_easel",
        )]));

        let result = resolver.resolve("amber barrel crate qqq www");
        assert_eq!(result.category, MaterialCategory::Unknown);
        assert!(result.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn score_above_threshold_is_accepted_with_its_score() {
        // Four of five words match: similarity 0.8 via word overlap.
        let resolver = GuidanceResolver::new(GuidanceCatalog::new(vec![entry(
            "amber_barrel_crate_drum_easel",
        )]));

        let result = resolver.resolve("amber barrel crate drum www");
        assert_eq!(result.category, MaterialCategory::Metal);
        assert!((result.confidence - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_resolve_to_the_earliest_entry() {
        // "green" is a substring of both keys: both score 0.8.
        let resolver = GuidanceResolver::new(GuidanceCatalog::new(vec![
            entry("green_bin"),
            entry("green_box"),
        ]));

        let result = resolver.resolve("green");
        assert_eq!(result.instructions, "instructions for green_bin");
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = GuidanceResolver::builtin();
        for label in ["plastic bottle", "bottle cap", "mystery thing", ""] {
            assert_eq!(resolver.resolve(label), resolver.resolve(label), "{label}");
        }
    }

    #[test]
    fn confidence_stays_in_unit_range_and_zero_means_unknown() {
        let resolver = GuidanceResolver::builtin();
        let labels = [
            "bottle",
            "water bottle",
            "aluminum",
            "laptop computer",
            "xyzzy",
            "glass jar lid",
        ];

        for label in labels {
            let result = resolver.resolve(label);
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "{label}: {}",
                result.confidence
            );
            let unknown = result.category == MaterialCategory::Unknown;
            let zero = result.confidence.abs() < f64::EPSILON;
            assert_eq!(unknown, zero, "{label}");
        }
    }
}
