//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::error::RangeError;
use crate::parser::parse_range;
use crate::range::Range;
use crate::version::Version;

/// Main facade for semantic versioning operations on strings
///
/// Invalid versions never satisfy anything and are skipped when sorting;
/// an invalid range is satisfied by nothing.
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        match parse_range(range) {
            Ok(range) => range.matches(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match parse_range(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| Self::satisfies_parsed(v, &range))
            .map(|v| v.to_string())
            .collect()
    }

    /// Highest version satisfying the range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::pick_satisfying(versions, range, Ordering::Greater)
    }

    /// Lowest version satisfying the range
    pub fn min_satisfying(versions: &[&str], range: &str) -> Option<String> {
        Self::pick_satisfying(versions, range, Ordering::Less)
    }

    /// Parse a range once for repeated checks
    pub fn parse_range(range: &str) -> Result<Range, RangeError> {
        parse_range(range)
    }

    /// Check a version against a pre-parsed range
    pub fn satisfies_parsed(version: &str, range: &Range) -> bool {
        Version::parse(version)
            .map(|v| range.matches(&v))
            .unwrap_or(false)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn pick_satisfying(versions: &[&str], range: &str, prefer: Ordering) -> Option<String> {
        let range = parse_range(range).ok()?;

        let mut best: Option<(Version, &str)> = None;
        for raw in versions {
            let version = match Version::parse(raw) {
                Ok(v) if range.matches(&v) => v,
                _ => continue,
            };
            let better = match &best {
                Some((current, _)) => version.compare(current) == prefer,
                None => true,
            };
            if better {
                best = Some((version, *raw));
            }
        }

        best.map(|(_, raw)| raw.to_string())
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Keep the original index so equal versions stay in input order
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.compare(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
