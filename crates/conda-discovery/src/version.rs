//! Dotted-numeric version ordering.
//!
//! Interpreter versions reported by lookup providers are loose strings
//! (`3.10`, `3.6.1`, `3.7.0rc1`), so they are compared segment by segment
//! as integers rather than parsed as semver.
//!
//! ```
//! use conda_discovery::version::compare_versions;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare_versions("3.10.2", "3.9.9"), Ordering::Greater);
//! assert_eq!(compare_versions("3.6", "3.6.0"), Ordering::Equal);
//! ```

use std::cmp::Ordering;

/// Compare two dotted version strings numerically.
///
/// Missing trailing segments count as `0`. A segment that is not a plain
/// number contributes its leading digits (`0rc1` → `0`, `final` → `0`).
/// Segments of any length compare by value, without overflow.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);
    let len = left.len().max(right.len());

    (0..len)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or("");
            let r = right.get(i).copied().unwrap_or("");
            compare_digits(l, r)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Leading digits of each segment, with leading zeros stripped.
fn segments(version: &str) -> Vec<&str> {
    version
        .trim()
        .split('.')
        .map(|segment| {
            let end = segment
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(segment.len());
            segment[..end].trim_start_matches('0')
        })
        .collect()
}

/// Order two zero-stripped digit strings by numeric value.
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
