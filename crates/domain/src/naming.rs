//! Default names for newly created world elements.
//!
//! New elements are called `Untitled <Label> <N>`, where `N` is the lowest
//! positive number not already taken by another default-named element with
//! the same label. Gaps left by deleted elements are reused.

use std::collections::BTreeSet;

use regex_lite::Regex;

/// Name used when the owning project cannot be resolved.
pub const FALLBACK_ELEMENT_NAME: &str = "Untitled Element";

const DEFAULT_NAME_PREFIX: &str = "Untitled";

/// Formats the default name for `label` with suffix `n`.
pub fn default_name(label: &str, n: u64) -> String {
    format!("{} {} {}", DEFAULT_NAME_PREFIX, label, n)
}

/// Collects the numeric suffixes already used by default names for `label`.
///
/// Only whole-string matches of `Untitled <label> <digits>` count. Zero and
/// suffixes too large to represent are ignored.
pub fn used_suffixes<I, S>(names: I, label: &str) -> BTreeSet<u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pattern = format!(
        "^{} {} ([0-9]+)$",
        DEFAULT_NAME_PREFIX,
        regex_lite::escape(label)
    );
    // An escaped label always yields a valid pattern; an empty set is the
    // safe answer if it somehow does not.
    let Ok(re) = Regex::new(&pattern) else {
        return BTreeSet::new();
    };

    names
        .into_iter()
        .filter_map(|name| {
            re.captures(name.as_ref())
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<u64>().ok())
        })
        .filter(|&n| n > 0)
        .collect()
}

/// Lowest positive integer missing from `used`.
pub fn next_free_suffix(used: &BTreeSet<u64>) -> u64 {
    let Some(&max) = used.last() else {
        return 1;
    };
    (1..=max.saturating_add(1))
        .find(|n| !used.contains(n))
        .unwrap_or(max)
}

/// Generates the next free default name for `label` among `existing_names`.
///
/// # Example
///
/// ```
/// use worldcodex_domain::naming::generate_default_name;
///
/// let existing = ["Untitled Character 1", "Untitled Character 3", "Aria"];
/// assert_eq!(
///     generate_default_name(existing, "Character"),
///     "Untitled Character 2"
/// );
/// ```
pub fn generate_default_name<I, S>(existing_names: I, label: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let used = used_suffixes(existing_names, label);
    default_name(label, next_free_suffix(&used))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(suffixes: &[u64], label: &str) -> Vec<String> {
        suffixes.iter().map(|&n| default_name(label, n)).collect()
    }

    #[test]
    fn no_existing_names_starts_at_one() {
        assert_eq!(
            generate_default_name(Vec::<String>::new(), "Character"),
            "Untitled Character 1"
        );
    }

    #[test]
    fn fills_the_first_gap() {
        let existing = names(&[1, 3], "Character");
        assert_eq!(
            generate_default_name(&existing, "Character"),
            "Untitled Character 2"
        );
    }

    #[test]
    fn appends_after_a_dense_run() {
        let existing = names(&[1, 2, 3], "Character");
        assert_eq!(
            generate_default_name(&existing, "Character"),
            "Untitled Character 4"
        );
    }

    #[test]
    fn missing_one_is_reused_first() {
        let existing = names(&[2, 3], "Location");
        assert_eq!(
            generate_default_name(&existing, "Location"),
            "Untitled Location 1"
        );
    }

    #[test]
    fn result_is_smallest_positive_not_used() {
        let sets: [&[u64]; 5] = [&[], &[1], &[5], &[1, 2, 4, 5], &[2, 4, 6, 8]];
        for set in sets {
            let existing = names(set, "Event");
            let expected = (1..).find(|n| !set.contains(n)).unwrap();
            assert_eq!(
                generate_default_name(&existing, "Event"),
                default_name("Event", expected)
            );
        }
    }

    #[test]
    fn other_labels_do_not_count() {
        let existing = vec![
            "Untitled Location 1".to_string(),
            "Untitled Location 2".to_string(),
        ];
        assert_eq!(
            generate_default_name(&existing, "Character"),
            "Untitled Character 1"
        );
    }

    #[test]
    fn only_whole_string_matches_count() {
        let existing = [
            "Untitled Character 1 (copy)",
            "My Untitled Character 1",
            "Untitled Character one",
            "untitled character 1",
            "Untitled Character",
        ];
        assert!(used_suffixes(existing, "Character").is_empty());
    }

    #[test]
    fn zero_and_overflowing_suffixes_are_ignored() {
        let existing = [
            "Untitled Character 0",
            "Untitled Character 99999999999999999999999",
            "Untitled Character 2",
        ];
        assert_eq!(
            used_suffixes(existing, "Character"),
            BTreeSet::from([2])
        );
        assert_eq!(
            generate_default_name(existing, "Character"),
            "Untitled Character 1"
        );
    }

    #[test]
    fn label_metacharacters_are_escaped() {
        let existing = ["Untitled Item/Object 1", "Untitled Item-Object 2"];
        assert_eq!(
            generate_default_name(existing, "Item/Object"),
            "Untitled Item/Object 2"
        );
        assert!(used_suffixes(["Untitled ItemXObject 1"], "Item.Object").is_empty());
    }

    #[test]
    fn leading_zeros_parse_as_their_value() {
        assert_eq!(
            used_suffixes(["Untitled Event 01"], "Event"),
            BTreeSet::from([1])
        );
    }

    #[test]
    fn next_free_suffix_of_saturated_max_does_not_overflow() {
        let used = BTreeSet::from([u64::MAX]);
        assert_eq!(next_free_suffix(&used), 1);
    }
}
