//! Turning normalized comparator tokens into a [`Range`]

use crate::error::RangeError;
use crate::grammar::Grammar;
use crate::range::{Comparator, Operator, Range};
use crate::version::Version;

/// Build the AND-group for one segment's tokens
///
/// `range` is the raw input the tokens came from, used for error messages.
/// No tokens at all is the unconstrained range.
pub fn build<S: AsRef<str>>(tokens: &[S], range: &str, grammar: &Grammar) -> Result<Range, RangeError> {
    let comparators = tokens
        .iter()
        .map(|token| parse_comparator(token.as_ref(), range, grammar))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Range::all_of(comparators))
}

/// Parse a single `<operator><version>` token
pub fn parse_comparator(token: &str, range: &str, grammar: &Grammar) -> Result<Comparator, RangeError> {
    let (operator, version) = split_comparator(token).ok_or_else(|| {
        RangeError::range_syntax(range, format!("\"{}\" does not contain a version", token))
    })?;

    let operator = Operator::parse(operator).ok_or_else(|| RangeError::ComparatorSyntax {
        operator: operator.to_string(),
        token: token.to_string(),
    })?;

    let version = Version::parse_with(version, grammar).map_err(|source| RangeError::VersionSyntax {
        version: version.to_string(),
        range: range.to_string(),
        source,
    })?;

    Ok(Comparator::new(operator, version))
}

/// Split a token at its first ASCII digit
fn split_comparator(token: &str) -> Option<(&str, &str)> {
    token
        .find(|c: char| c.is_ascii_digit())
        .map(|at| token.split_at(at))
}
