//! Ordering for platform version strings such as `4.2.1`, `9.1` or `Q7.1`.
//!
//! Versions are compared on their first three dot separated segments.
//! Segments that are both integers compare numerically, anything else
//! compares as plain strings, one segment at a time.

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformVersion {
    pub major: String,
    pub minor: String,
    pub point: String,
}

impl PlatformVersion {
    /// Split a version into major, minor and point segments.
    ///
    /// Missing or empty segments become `"0"`; a fourth segment and anything
    /// after it is ignored.
    pub fn split(version: &str) -> Self {
        let padded = format!("{version}.0.0.0");
        let mut parts = padded.splitn(4, '.');
        let mut next = || match parts.next() {
            Some(part) if !part.is_empty() => part.to_string(),
            _ => "0".to_string(),
        };

        Self {
            major: next(),
            minor: next(),
            point: next(),
        }
    }

    fn segments(&self) -> [&str; 3] {
        [&self.major, &self.minor, &self.point]
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.point)
    }
}

/// Compare one segment numerically when possible, otherwise as strings.
pub fn compare_segment(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Compare two platform versions.
///
/// Returns `Equal` when either side is empty since nothing can be concluded.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    if a.is_empty() || b.is_empty() {
        return Ordering::Equal;
    }

    let a = PlatformVersion::split(a);
    let b = PlatformVersion::split(b);

    a.segments()
        .iter()
        .zip(b.segments().iter())
        .map(|(x, y)| compare_segment(x, y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pads_missing_segments() {
        let v = PlatformVersion::split("9");
        assert_eq!(v.major, "9");
        assert_eq!(v.minor, "0");
        assert_eq!(v.point, "0");
    }

    #[test]
    fn test_split_ignores_fourth_segment() {
        let v = PlatformVersion::split("4.2.1.7");
        assert_eq!(v.to_string(), "4.2.1");
    }

    #[test]
    fn test_split_empty_segment_becomes_zero() {
        let v = PlatformVersion::split("4..1");
        assert_eq!(v.to_string(), "4.0.1");
    }

    #[test]
    fn test_compare_segment_numeric_and_text() {
        assert_eq!(compare_segment("12", "2"), Ordering::Greater);
        assert_eq!(compare_segment("Q7", "Q5"), Ordering::Greater);
        assert_eq!(compare_segment("7", "Q7"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_known_pairs() {
        assert_eq!(compare_versions("9.0.1", "9.1"), Ordering::Less);
        assert_eq!(compare_versions("9.0.1", "9.0.1"), Ordering::Equal);
        assert_eq!(compare_versions("9.1", "9.0.1"), Ordering::Greater);
        assert_eq!(compare_versions("4.2.1", "9.1"), Ordering::Less);
        assert_eq!(compare_versions("4.2.1", "4.2.2"), Ordering::Less);
        assert_eq!(compare_versions("4.2.1", "4.2.12"), Ordering::Less);
        assert_eq!(compare_versions("4.1.1", "4.2.1"), Ordering::Less);
        assert_eq!(compare_versions("4.0.21", "40.21"), Ordering::Less);
        assert_eq!(compare_versions("4.1.1", "411"), Ordering::Less);
        assert_eq!(compare_versions("411", "4.1.1"), Ordering::Greater);
        assert_eq!(compare_versions("4.2.1", "4.2.1"), Ordering::Equal);
    }

    #[test]
    fn test_compare_versions_alphanumeric() {
        assert_eq!(compare_versions("Q7.1", "Q7.2"), Ordering::Less);
        assert_eq!(compare_versions("Q5SK", "Q7SK"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_empty_is_equal() {
        assert_eq!(compare_versions("", "4.3"), Ordering::Equal);
        assert_eq!(compare_versions("4.3", ""), Ordering::Equal);
    }

    #[test]
    fn test_compare_versions_antisymmetric_and_transitive() {
        let versions = ["1", "4.1.1", "4.2", "4.2.1", "4.2.12", "9.0.1", "9.1", "411", "Q7.1"];
        for a in versions {
            for b in versions {
                assert_eq!(
                    compare_versions(a, b),
                    compare_versions(b, a).reverse(),
                    "{a} vs {b}"
                );
                for c in versions {
                    if compare_versions(a, b).is_lt() && compare_versions(b, c).is_lt() {
                        assert!(compare_versions(a, c).is_lt(), "{a} < {b} < {c}");
                    }
                }
            }
        }
    }
}
