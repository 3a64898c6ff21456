//! Fragment enumeration and validation against a handle.

use std::collections::HashSet;

/// Fragments longer than this are accepted on length alone.
const MIN_STANDALONE_LEN: usize = 3;
/// Shorter fragments must cover at least this share of the handle.
const MIN_HANDLE_COVERAGE: f64 = 0.6;

/// All distinct contiguous substrings of `name`, split on char boundaries.
pub fn consecutive_substrings(name: &str) -> HashSet<String> {
    let bounds: Vec<usize> = name
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(name.len()))
        .collect();
    let mut substrings = HashSet::with_capacity(bounds.len() * bounds.len() / 2);
    for (i, &start) in bounds.iter().enumerate() {
        for &end in &bounds[i + 1..] {
            substrings.insert(name[start..end].to_string());
        }
    }
    substrings
}

/// A fragment is valid when the handle contains it and it is either longer than
/// three characters or at least 60% of the handle's length.
pub fn is_valid(substring: &str, handle: &str) -> bool {
    if !handle.contains(substring) {
        return false;
    }
    let sub_len = substring.chars().count();
    let handle_len = handle.chars().count();
    sub_len > MIN_STANDALONE_LEN || sub_len as f64 >= MIN_HANDLE_COVERAGE * handle_len as f64
}

/// True when a fragment of either name, or a concatenation of one fragment from
/// each name in either order, is valid against the handle.
pub fn check_if_combination_in_handle(first_name: &str, second_name: &str, handle: &str) -> bool {
    let first_subs = consecutive_substrings(first_name);
    let second_subs = consecutive_substrings(second_name);

    if second_subs.iter().any(|s| is_valid(s, handle)) {
        return true;
    }
    if first_subs.iter().any(|s| is_valid(s, handle)) {
        return true;
    }

    let mut joined = String::with_capacity(first_name.len() + second_name.len());
    for sub1 in &first_subs {
        for sub2 in &second_subs {
            joined.clear();
            joined.push_str(sub1);
            joined.push_str(sub2);
            if is_valid(&joined, handle) {
                return true;
            }
            joined.clear();
            joined.push_str(sub2);
            joined.push_str(sub1);
            if is_valid(&joined, handle) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substrings_of_john() {
        let expected: HashSet<String> = ["j", "jo", "joh", "john", "o", "oh", "ohn", "h", "hn", "n"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(consecutive_substrings("john"), expected);
    }

    #[test]
    fn substrings_collapse_repeats() {
        let subs = consecutive_substrings("aaa");
        assert_eq!(subs.len(), 3);
        assert!(subs.contains("a") && subs.contains("aa") && subs.contains("aaa"));
        assert!(consecutive_substrings("").is_empty());
    }

    #[test]
    fn substrings_respect_char_boundaries() {
        let subs = consecutive_substrings("ΙΩΑ");
        assert_eq!(subs.len(), 6);
        assert!(subs.contains("ΩΑ"));
    }

    #[test]
    fn valid_by_length_or_coverage() {
        assert!(is_valid("JOHN", "XJOHNX"));
        assert!(!is_valid("JOH", "XXJOHXX"));
        // 3 >= 0.6 * 5 exactly
        assert!(is_valid("JOH", "JOHXY"));
        // 2 < 0.6 * 4
        assert!(!is_valid("JS", "JSAA"));
        assert!(!is_valid("JOHN", "SMITH"));
    }

    #[test]
    fn longer_fragment_never_valid() {
        for (fragment, handle) in [("JOHNS", "JOHN"), ("AB", "A"), ("ABCD", "")] {
            assert!(!is_valid(fragment, handle), "{} vs {}", fragment, handle);
        }
    }

    #[test]
    fn combination_against_raw_handles() {
        let cases = [
            ("johnsmith", true),
            ("jo_sm", false),
            ("1232324johnsmith4545", true),
            ("2342johns_54mith43", true),
            ("jo_smdfgfd", false),
            ("js", true),
            ("jsa", true),
            ("jsaa", false),
            ("jocoke", false),
            ("29579759792", false),
            ("john", true),
        ];
        for (handle, expected) in cases {
            assert_eq!(
                check_if_combination_in_handle("john", "smith", handle),
                expected,
                "handle {}",
                handle
            );
        }
    }

    #[test]
    fn combination_is_symmetric() {
        for handle in ["SMJO", "JOSM", "SMITHJ", "XJS"] {
            assert_eq!(
                check_if_combination_in_handle("JOHN", "SMITH", handle),
                check_if_combination_in_handle("SMITH", "JOHN", handle),
                "handle {}",
                handle
            );
        }
    }
}
