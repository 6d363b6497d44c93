//! Name normalization and set-semantics helpers shared by the company
//! mutations and the merge protocol.

use std::collections::HashSet;

/// Deterministic matching form of a company name: lowercased, trimmed, with
/// internal whitespace runs collapsed to single spaces. Never user-editable;
/// recomputed whenever `name` changes.
pub fn normalized_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes duplicates while keeping the first occurrence of each value.
pub fn dedup_first_seen(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|value| seen.insert(value.as_str()))
        .cloned()
        .collect()
}

/// Set union of two sequences with stable first-seen order, so repeated runs
/// over the same inputs produce identical output.
pub fn union_first_seen(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    first
        .iter()
        .chain(second.iter())
        .filter(|value| seen.insert(value.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalization_folds_case_and_whitespace() {
        assert_eq!(normalized_name("  ACME   Corp  "), "acme corp");
        assert_eq!(normalized_name("Acme\tCorp"), "acme corp");
        assert_eq!(normalized_name("acme corp"), "acme corp");
    }

    #[test]
    fn normalization_handles_ideographic_space() {
        assert_eq!(normalized_name("Acme\u{3000}Corp"), "acme corp");
    }

    #[test]
    fn union_keeps_first_seen_order() {
        let merged = union_first_seen(&strings(&["a", "b"]), &strings(&["b", "c"]));
        assert_eq!(merged, strings(&["a", "b", "c"]));
    }

    #[test]
    fn dedup_preserves_order() {
        assert_eq!(
            dedup_first_seen(&strings(&["x", "y", "x", "z", "y"])),
            strings(&["x", "y", "z"])
        );
    }
}
