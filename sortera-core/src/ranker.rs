//! Filters and orders facility records against a search query.
//!
//! Filtering and scoring are separate passes: the structural filters are
//! hard constraints, the free-text score only orders whatever survived
//! them. A facility can therefore never buy itself past an explicit
//! filter with a strong text match, or be dropped for a weak one.

use crate::model::{FacilityRecord, SearchFilters, SearchQuery};
use crate::normalize::{normalize_text, tokenize};

/// Points per token found in the facility name.
pub const NAME_MATCH_POINTS: u32 = 10;
/// Points per token equal to the facility zip code.
pub const ZIP_MATCH_POINTS: u32 = 8;
/// Points per token found in the city name.
pub const CITY_MATCH_POINTS: u32 = 6;
/// Points per token found in an accepted material.
pub const MATERIAL_MATCH_POINTS: u32 = 5;
/// Points per token found anywhere in the combined searchable text.
pub const TEXT_MATCH_POINTS: u32 = 2;

/// Rank facilities for a query: filter, score, then sort.
///
/// Output order is score-descending with name-ascending tie-breaks. With
/// an empty search term every survivor scores zero, so the result is
/// simply name-ordered.
#[must_use]
pub fn rank(facilities: &[FacilityRecord], query: &SearchQuery) -> Vec<FacilityRecord> {
    let tokens = tokenize(&query.term);
    let zip = query
        .zip_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty());

    let mut scored: Vec<(u32, &FacilityRecord)> = facilities
        .iter()
        .filter(|facility| passes_filters(facility, zip, &query.filters, &tokens))
        .map(|facility| (relevance_score(facility, &tokens), facility))
        .collect();

    scored.sort_by(|left, right| {
        right
            .0
            .cmp(&left.0)
            .then_with(|| left.1.name.cmp(&right.1.name))
    });

    scored
        .into_iter()
        .map(|(_, facility)| facility.clone())
        .collect()
}

/// Hard-exclusion pass. Evaluated in fixed order and short-circuits on
/// the first failing constraint.
fn passes_filters(
    facility: &FacilityRecord,
    zip: Option<&str>,
    filters: &SearchFilters,
    tokens: &[String],
) -> bool {
    if let Some(wanted_zip) = zip {
        // Records without a well-formed 5-digit zip never zip-match.
        if facility.zip_exact() != Some(wanted_zip) {
            return false;
        }
    }

    if let Some(wanted_type) = filters.facility_type
        && facility.facility_type != wanted_type
    {
        return false;
    }

    if let Some(wanted_region) = filters.region
        && facility.region != wanted_region
    {
        return false;
    }

    if !filters.required_materials.is_empty() {
        let accepted: Vec<String> = facility
            .accepted_materials
            .iter()
            .map(|material| normalize_text(material))
            .collect();

        // All-of: every required material must match some accepted one.
        let satisfied = filters.required_materials.iter().all(|required| {
            let needle = normalize_text(required);
            !needle.is_empty() && accepted.iter().any(|have| have.contains(&needle))
        });
        if !satisfied {
            return false;
        }
    }

    if !tokens.is_empty() {
        // Any-of: one matching token keeps the record.
        let haystack = searchable_text(facility);
        if !tokens.iter().any(|token| haystack.contains(token.as_str())) {
            return false;
        }
    }

    true
}

/// Accumulated relevance points for one facility across all tokens.
fn relevance_score(facility: &FacilityRecord, tokens: &[String]) -> u32 {
    if tokens.is_empty() {
        return 0;
    }

    let name = facility.name.to_lowercase();
    let city = facility.city.to_lowercase();
    let materials: Vec<String> = facility
        .accepted_materials
        .iter()
        .map(|material| normalize_text(material))
        .collect();
    let haystack = searchable_text(facility);

    let mut score = 0;
    for token in tokens {
        if name.contains(token.as_str()) {
            score += NAME_MATCH_POINTS;
        }
        if facility.zip_exact() == Some(token.as_str()) {
            score += ZIP_MATCH_POINTS;
        }
        if city.contains(token.as_str()) {
            score += CITY_MATCH_POINTS;
        }
        if materials.iter().any(|material| material.contains(token.as_str())) {
            score += MATERIAL_MATCH_POINTS;
        }
        if haystack.contains(token.as_str()) {
            score += TEXT_MATCH_POINTS;
        }
    }

    score
}

fn searchable_text(facility: &FacilityRecord) -> String {
    let mut parts: Vec<&str> = vec![
        facility.name.as_str(),
        facility.address.as_str(),
        facility.city.as_str(),
    ];
    parts.extend(facility.accepted_materials.iter().map(String::as_str));
    normalize_text(&parts.join(" "))
}
