//! Text canonicalization applied before any string comparison.
//!
//! Both the resolver and the ranker compare normalized text only:
//! lowercase, diacritics stripped, restricted to ASCII alphanumerics plus
//! one separator. Catalog keys use `_` as the separator, search text uses
//! a single space so terms can be split into tokens.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical catalog-key form: lowercase, whitespace runs collapsed to a
/// single `_`, everything outside `[a-z0-9_]` dropped.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    normalize_with(raw, '_', true)
}

/// Canonical search-text form: like [`normalize_key`] but whitespace is
/// preserved as single spaces and `_` is dropped with the rest of the
/// punctuation.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    normalize_with(raw, ' ', false)
}

/// Split a free-text term into normalized search tokens.
#[must_use]
pub fn tokenize(term: &str) -> Vec<String> {
    normalize_text(term)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

fn normalize_with(raw: &str, separator: char, keep_underscore: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;

    let folded = raw
        .nfd()
        .filter(|candidate| !is_combining_mark(*candidate))
        .flat_map(char::to_lowercase);

    for current in folded {
        if current.is_whitespace() {
            // Leading whitespace is dropped, internal runs collapse to one
            // separator, trailing runs never get flushed.
            if !out.is_empty() {
                pending_separator = true;
            }
            continue;
        }

        let kept = current.is_ascii_alphanumeric() || (keep_underscore && current == '_');
        if kept {
            if pending_separator {
                out.push(separator);
                pending_separator = false;
            }
            out.push(current);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_form_lowercases_and_joins_with_underscores() {
        assert_eq!(normalize_key("Plastic Bottle"), "plastic_bottle");
        assert_eq!(normalize_key("tin   can"), "tin_can");
    }

    #[test]
    fn key_form_strips_punctuation_and_diacritics() {
        assert_eq!(normalize_key("café-crème jar"), "cafecreme_jar");
        assert_eq!(normalize_key("Glass (clear)!"), "glass_clear");
    }

    #[test]
    fn key_form_keeps_existing_underscores() {
        assert_eq!(normalize_key("plastic_bottle"), "plastic_bottle");
    }

    #[test]
    fn key_form_has_no_edge_separators() {
        assert_eq!(normalize_key("  paper  "), "paper");
        assert_eq!(normalize_key(" - "), "");
    }

    #[test]
    fn empty_and_symbol_only_input_normalizes_to_empty() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("!!??"), "");
        assert_eq!(normalize_text("  \t "), "");
    }

    #[test]
    fn text_form_preserves_spaces_and_drops_underscores() {
        assert_eq!(normalize_text("Recology San Francisco"), "recology san francisco");
        assert_eq!(normalize_text("yard_waste"), "yardwaste");
    }

    #[test]
    fn tokenize_splits_on_whitespace() {
        assert_eq!(tokenize("  Glass & Metal  "), vec!["glass", "metal"]);
        assert!(tokenize("").is_empty());
    }
}
