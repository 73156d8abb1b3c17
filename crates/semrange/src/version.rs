//! Semantic version type used as the operand of range comparators

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;
use crate::grammar::{Grammar, Pattern};

/// A single prerelease identifier
///
/// Numeric identifiers always sort before alphanumeric ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version
///
/// Equality and ordering follow SemVer precedence, so build metadata is
/// carried but never compared.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Vec<Identifier>,
    pub build: Vec<String>,
}

impl Version {
    /// Create a release version without prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a strict SemVer 2.0.0 version, optionally prefixed with `v`
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        Self::parse_with(version, Grammar::strict())
    }

    /// Parse a version leniently
    ///
    /// Accepts leading zeros, `=`/`v` prefixes and prereleases without a
    /// separating hyphen (`1.2.3beta1`).
    pub fn parse_loose(version: &str) -> Result<Self, VersionError> {
        Self::parse_with(version, Grammar::loose())
    }

    pub(crate) fn parse_with(version: &str, grammar: &Grammar) -> Result<Self, VersionError> {
        if version.trim().is_empty() {
            return Err(VersionError::Empty);
        }

        let caps = grammar
            .captures(Pattern::FullVersion, version)
            .ok_or_else(|| VersionError::InvalidVersion(version.to_string()))?;

        let major = parse_component("major", &caps[1])?;
        let minor = parse_component("minor", &caps[2])?;
        let patch = parse_component("patch", &caps[3])?;

        let pre = match caps.get(4) {
            Some(m) => parse_prerelease(m.as_str(), grammar)?,
            None => Vec::new(),
        };
        let build = match caps.get(5) {
            Some(m) => m.as_str().split('.').map(str::to_string).collect(),
            None => Vec::new(),
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre,
            build,
        })
    }

    /// Check if this version carries a prerelease
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Three-way comparison by SemVer precedence
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.pre, &other.pre))
    }
}

fn parse_component(part: &'static str, value: &str) -> Result<u64, VersionError> {
    value
        .parse::<u64>()
        .map_err(|err| VersionError::InvalidComponent {
            part,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

fn parse_prerelease(pre: &str, grammar: &Grammar) -> Result<Vec<Identifier>, VersionError> {
    pre.split('.')
        .map(|id| {
            if id.is_empty() {
                return Err(VersionError::EmptyIdentifier("prerelease"));
            }
            if !id.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(Identifier::AlphaNumeric(id.to_string()));
            }
            if !grammar.is_loose() && id.len() > 1 && id.starts_with('0') {
                return Err(VersionError::LeadingZero {
                    part: "prerelease",
                    value: id.to_string(),
                });
            }
            parse_component("prerelease", id).map(Identifier::Numeric)
        })
        .collect()
}

fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A release sorts above any of its prereleases
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            let pre: Vec<String> = self.pre.iter().map(|id| id.to_string()).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}
