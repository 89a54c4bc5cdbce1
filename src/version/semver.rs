use std::cmp::Ordering;

use semver::{BuildMetadata, Prerelease};

/// Versions are padded with zeros up to this many numeric segments
const MIN_SEGMENTS: usize = 3;

/// Tags that mark a version string as a pre-release
///
/// Matched as plain substrings, so a stable version that happens to contain
/// one of them (e.g. `1.0.0-arcade`) is also treated as a pre-release.
const PRERELEASE_TAGS: &[&str] = &["alpha", "beta", "rc", "build"];

/// Returns true if the version string contains any pre-release tag
pub fn is_prerelease(version: &str) -> bool {
    PRERELEASE_TAGS.iter().any(|tag| version.contains(tag))
}

/// A version parsed for comparison, together with how many numeric
/// segments were actually written in the source string.
///
/// Any number of numeric segments is accepted; fewer than three are padded
/// with zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub segments: Vec<u64>,
    pub pre: Prerelease,
    pub precision: usize,
}

impl ParsedVersion {
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Order two versions, treating missing trailing segments as zero.
    ///
    /// A release sorts after any pre-release with the same segments.
    pub fn compare(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        let segment = |segments: &[u64], i: usize| segments.get(i).copied().unwrap_or(0);

        (0..len)
            .map(|i| segment(&self.segments, i).cmp(&segment(&other.segments, i)))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

/// Parse a version string for comparison, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros, strips a
/// leading 'v', accepts a pre-release with or without a leading '-' and
/// discards build metadata (it never takes part in ordering).
///
/// Examples:
/// - "1" -> [1, 0, 0], precision 1
/// - "v1.2" -> [1, 2, 0], precision 2
/// - "28.0.0-rc02" -> [28, 0, 0], pre "rc02", precision 3
/// - "2.0.0.1" -> [2, 0, 0, 1], precision 4
pub fn parse_version(version: &str) -> Option<ParsedVersion> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);

    let core_end = version
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(version.len());
    let (core, tail) = version.split_at(core_end);

    let mut segments = core
        .split('.')
        .map(|s| s.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;
    let precision = segments.len();
    if segments.len() < MIN_SEGMENTS {
        segments.resize(MIN_SEGMENTS, 0);
    }

    let (pre, build) = match tail.split_once('+') {
        Some((pre, build)) => (pre, Some(build)),
        None => (tail, None),
    };
    if let Some(build) = build {
        BuildMetadata::new(build).ok()?;
    }
    let pre = pre.strip_prefix('-').unwrap_or(pre);

    Some(ParsedVersion {
        segments,
        pre: Prerelease::new(pre).ok()?,
        precision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0-alpha01", true)]
    #[case("2.0.0-beta1", true)]
    #[case("28.0.0-rc02", true)]
    #[case("1.0.0-build.5", true)]
    #[case("1.0.0", false)]
    #[case("2.8.2", false)]
    #[case("1.0.0-SNAPSHOT", false)] // tags are matched case-sensitively
    #[case("1.0.0-arcade", true)] // substring match also hits stable-looking names
    fn is_prerelease_matches_tag_substrings(#[case] version: &str, #[case] expected: bool) {
        assert_eq!(is_prerelease(version), expected);
    }

    #[rstest]
    #[case("1", Some((vec![1, 0, 0], "", 1)))]
    #[case("1.2", Some((vec![1, 2, 0], "", 2)))]
    #[case("1.2.3", Some((vec![1, 2, 3], "", 3)))]
    #[case("v3.0", Some((vec![3, 0, 0], "", 2)))]
    #[case("28.0.0-rc02", Some((vec![28, 0, 0], "rc02", 3)))]
    #[case("1.0.0alpha1", Some((vec![1, 0, 0], "alpha1", 3)))]
    #[case("1.2.3+build.7", Some((vec![1, 2, 3], "", 3)))]
    #[case("01.02", Some((vec![1, 2, 0], "", 2)))]
    #[case("1.2.3.4", Some((vec![1, 2, 3, 4], "", 4)))]
    #[case("1.0.Final", None)]
    #[case("invalid", None)]
    #[case("", None)]
    fn parse_version_returns_expected(
        #[case] input: &str,
        #[case] expected: Option<(Vec<u64>, &str, usize)>,
    ) {
        let result =
            parse_version(input).map(|p| (p.segments, p.pre.as_str().to_string(), p.precision));
        assert_eq!(
            result,
            expected.map(|(segments, pre, precision)| (segments, pre.to_string(), precision))
        );
    }

    #[rstest]
    #[case("2.0.0.1", "2.0.0", Ordering::Greater)]
    #[case("2.0", "2.0.0.0", Ordering::Equal)]
    #[case("1.9.9.9", "2.0", Ordering::Less)]
    #[case("2.0.0-rc1", "2.0", Ordering::Less)]
    #[case("2.0.0-rc2", "2.0.0-rc1", Ordering::Greater)]
    fn compare_pads_missing_segments(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        let left = parse_version(left).unwrap();
        let right = parse_version(right).unwrap();
        assert_eq!(left.compare(&right), expected);
    }

    #[test]
    fn parse_version_orders_prerelease_before_release() {
        let rc = parse_version("2.0.0-rc1").unwrap();
        let release = parse_version("2.0").unwrap();
        assert_eq!(rc.compare(&release), Ordering::Less);
        assert!(rc.is_prerelease());
        assert!(!release.is_prerelease());
    }
}
