//! Tag normalisation and dotted-numeric version ordering

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Everything that is not a digit or a period
static NON_VERSION_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("version allow-list regex is valid"));

/// Strip every character that is not a digit or a period from a release tag
///
/// Suffix digits are kept and glued to whatever precedes them, so
/// `release-1.0.0rc1` becomes `1.0.01` while `v1.0.0-rc.2` becomes `1.0.0.2`.
/// The result is a fixed point: normalising it again changes nothing.
pub fn normalize_tag(tag: &str) -> String {
    NON_VERSION_CHARS.replace_all(tag, "").into_owned()
}

/// Compare two dotted-numeric versions segment by segment
///
/// Missing or empty segments count as 0, so `2.1` equals `2.1.0`. Segments
/// are compared by value without parsing into a fixed-width integer, so
/// arbitrarily long digit runs cannot overflow. Both sides are normalised
/// first.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = normalize_tag(a);
    let b = normalize_tag(b);

    let a_segments: Vec<&str> = a.split('.').collect();
    let b_segments: Vec<&str> = b.split('.').collect();
    let len = a_segments.len().max(b_segments.len());

    for i in 0..len {
        let left = a_segments.get(i).copied().unwrap_or("");
        let right = b_segments.get(i).copied().unwrap_or("");

        match compare_segment(left, right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

/// Whether `candidate` is strictly newer than `current`
pub fn is_newer(candidate: &str, current: &str) -> bool {
    compare_versions(candidate, current) == Ordering::Greater
}

/// Compare two all-digit segments numerically
fn compare_segment(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
