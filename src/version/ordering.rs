//! Dotted-numeric version comparison

use std::cmp::Ordering;

/// Parse one version component, defaulting to zero.
///
/// Unparseable components count as zero so extraction noise never fails a
/// comparison. Defined behavior, not a best-effort fallback.
fn component(part: &str) -> u64 {
    part.trim().parse().unwrap_or(0)
}

/// Compare two dotted-numeric version strings component-by-component,
/// most-significant first.
///
/// The shorter version is treated as zero-padded up to the longer one's
/// length, so "1.2" and "1.2.0" compare equal. Comparison is numeric, not
/// lexicographic: "0.385.10" is greater than "0.385.2".
///
/// Examples:
/// - "0.385.2" vs "0.385.10" -> Less
/// - "1.2" vs "1.2.0" -> Equal
/// - "" vs "0" -> Equal (empty string is a single zero component)
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let l = l.map_or(0, component);
                let r = r.map_or(0, component);
                match l.cmp(&r) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                }
            }
        }
    }
}

/// Returns true if `latest` is strictly greater than `installed`.
pub fn is_update_available(installed: &str, latest: &str) -> bool {
    compare_versions(latest, installed) == Ordering::Greater
}
