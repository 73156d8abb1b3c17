//! Range expressions built from comparators

mod comparator;
mod operator;

use std::fmt;
use std::str::FromStr;

pub use comparator::Comparator;
pub use operator::Operator;

use crate::error::RangeError;
use crate::version::Version;

/// A boolean expression over comparators
///
/// Parsing produces an OR of AND-groups; [`Range::and`] and [`Range::or`]
/// compose already built ranges into deeper trees. Ranges are immutable and
/// compare structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Range {
    /// The empty AND-group, satisfied by every version
    Any,
    /// A single comparator
    Comparator(Comparator),
    /// Both sides must match
    And(Box<Range>, Box<Range>),
    /// At least one side must match
    Or(Box<Range>, Box<Range>),
}

impl Range {
    /// Parse a range with the strict grammar
    pub fn parse(raw: &str) -> Result<Self, RangeError> {
        crate::parser::parse_range(raw)
    }

    /// AND together comparators in order, `Any` when there are none
    pub fn all_of<I>(comparators: I) -> Self
    where
        I: IntoIterator<Item = Comparator>,
    {
        comparators
            .into_iter()
            .map(Range::Comparator)
            .reduce(Range::and)
            .unwrap_or(Range::Any)
    }

    /// Combine with another range using logical AND
    pub fn and(self, other: Range) -> Range {
        Range::And(Box::new(self), Box::new(other))
    }

    /// Combine with another range using logical OR
    pub fn or(self, other: Range) -> Range {
        Range::Or(Box::new(self), Box::new(other))
    }

    /// Check whether a version satisfies this range
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Range::Any => true,
            Range::Comparator(c) => c.matches(version),
            Range::And(left, right) => left.matches(version) && right.matches(version),
            Range::Or(left, right) => left.matches(version) || right.matches(version),
        }
    }

    /// Check if this is the unconstrained range
    pub fn is_any(&self) -> bool {
        matches!(self, Range::Any)
    }

    /// Flatten into OR-ed alternatives of AND-ed comparators
    ///
    /// An empty alternative stands for `Any`.
    pub fn alternatives(&self) -> Vec<Vec<&Comparator>> {
        match self {
            Range::Any => vec![Vec::new()],
            Range::Comparator(c) => vec![vec![c]],
            Range::Or(left, right) => {
                let mut alternatives = left.alternatives();
                alternatives.extend(right.alternatives());
                alternatives
            }
            Range::And(left, right) => {
                let right = right.alternatives();
                let mut product = Vec::new();
                for l in left.alternatives() {
                    for r in &right {
                        let mut group = l.clone();
                        group.extend(r.iter().copied());
                        product.push(group);
                    }
                }
                product
            }
        }
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::Any => write!(f, "*"),
            Range::Comparator(c) => write!(f, "{}", c),
            Range::Or(left, right) => write!(f, "{} || {}", left, right),
            Range::And(left, right) => {
                fmt_conjunct(left, f)?;
                write!(f, " ")?;
                fmt_conjunct(right, f)
            }
        }
    }
}

// OR binds looser than AND, so a disjunction nested under AND needs brackets
fn fmt_conjunct(range: &Range, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match range {
        Range::Or(..) => write!(f, "[{}]", range),
        _ => write!(f, "{}", range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn cmp(operator: Operator, version: &str) -> Comparator {
        Comparator::new(operator, v(version))
    }

    fn between(low: &str, high: &str) -> Range {
        Range::all_of([
            cmp(Operator::GreaterThanOrEqual, low),
            cmp(Operator::LessThan, high),
        ])
    }

    #[test]
    fn test_all_of() {
        assert_eq!(Range::all_of(Vec::<Comparator>::new()), Range::Any);

        let single = Range::all_of([cmp(Operator::Equal, "1.0.0")]);
        assert_eq!(single, Range::Comparator(cmp(Operator::Equal, "1.0.0")));

        let pair = between("1.0.0", "2.0.0");
        assert_eq!(
            pair,
            Range::Comparator(cmp(Operator::GreaterThanOrEqual, "1.0.0"))
                .and(Range::Comparator(cmp(Operator::LessThan, "2.0.0")))
        );
    }

    #[test]
    fn test_any_matches_everything() {
        let any = Range::Any;
        assert!(any.is_any());
        for version in ["0.0.0-alpha", "0.0.0", "1.2.3", "999.999.999-rc.1+b"] {
            assert!(any.matches(&v(version)), "{}", version);
        }
    }

    #[test]
    fn test_and_combinator() {
        let range = Range::Comparator(cmp(Operator::GreaterThan, "1.0.0"))
            .and(Range::Comparator(cmp(Operator::LessThan, "2.0.0")));

        assert!(range.matches(&v("1.1.1")));
        assert!(range.matches(&v("1.8.7")));
        assert!(!range.matches(&v("1.0.0")));
        assert!(!range.matches(&v("2.0.0")));
    }

    #[test]
    fn test_or_combinator() {
        let range = between("1.0.0", "2.0.0").or(between("3.0.0", "4.0.0"));

        assert!(range.matches(&v("1.5.0")));
        assert!(range.matches(&v("3.0.0")));
        assert!(!range.matches(&v("2.5.0")));
        assert!(!range.matches(&v("4.0.0")));
    }

    #[test]
    fn test_and_with_any_is_neutral() {
        let range = Range::Any.and(between("1.0.0", "2.0.0"));
        assert!(range.matches(&v("1.0.0")));
        assert!(!range.matches(&v("2.0.0")));
    }

    #[test]
    fn test_alternatives() {
        let range = between("1.0.0", "2.0.0").or(Range::Any);
        let alternatives = range.alternatives();
        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0].len(), 2);
        assert!(alternatives[1].is_empty());

        // (a || b) && c distributes into (a && c) || (b && c)
        let a = Range::Comparator(cmp(Operator::Equal, "1.0.0"));
        let b = Range::Comparator(cmp(Operator::Equal, "2.0.0"));
        let c = Range::Comparator(cmp(Operator::NotEqual, "3.0.0"));
        let distributed = a.or(b).and(c);
        let rendered: Vec<Vec<String>> = distributed
            .alternatives()
            .iter()
            .map(|group| group.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(
            rendered,
            vec![vec!["=1.0.0", "!=3.0.0"], vec!["=2.0.0", "!=3.0.0"]]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::Any.to_string(), "*");
        assert_eq!(between("1.2.3", "2.0.0").to_string(), ">=1.2.3 <2.0.0");

        let or = between("1.0.0", "2.0.0").or(Range::Comparator(cmp(Operator::GreaterThanOrEqual, "3.0.0")));
        assert_eq!(or.to_string(), ">=1.0.0 <2.0.0 || >=3.0.0");

        let nested = or.and(Range::Comparator(cmp(Operator::NotEqual, "3.1.0")));
        assert_eq!(nested.to_string(), "[>=1.0.0 <2.0.0 || >=3.0.0] !=3.1.0");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(between("1.0.0", "2.0.0"), between("1.0.0", "2.0.0"));
        assert_ne!(between("1.0.0", "2.0.0"), between("1.0.0", "3.0.0"));
    }

    #[test]
    fn test_range_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Range>();
        assert_send_sync::<Comparator>();
    }
}
