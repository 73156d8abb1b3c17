//! Error types for version and range parsing

use thiserror::Error;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Invalid {part} version \"{value}\": {reason}")]
    InvalidComponent {
        part: &'static str,
        value: String,
        reason: String,
    },
    #[error("Leading zero in {part} version \"{value}\"")]
    LeadingZero { part: &'static str, value: String },
    #[error("Empty {0} identifier")]
    EmptyIdentifier(&'static str),
}

/// Error type for range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Could not parse comparator \"{operator}\" in \"{token}\"")]
    ComparatorSyntax { operator: String, token: String },
    #[error("Could not parse version \"{version}\" in range \"{range}\": {source}")]
    VersionSyntax {
        version: String,
        range: String,
        #[source]
        source: VersionError,
    },
    #[error("Could not parse range \"{range}\": {reason}")]
    RangeSyntax { range: String, reason: String },
    #[error("Version component \"{component}\" cannot be incremented without overflow")]
    ArithmeticOverflow { component: String },
}

impl RangeError {
    pub(crate) fn range_syntax(range: &str, reason: impl Into<String>) -> Self {
        RangeError::RangeSyntax {
            range: range.to_string(),
            reason: reason.into(),
        }
    }
}
