//! Relational operators for range comparators

use std::cmp::Ordering;
use std::fmt;

/// Comparison operators for range comparators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
}

impl Operator {
    /// Parse the operator part of a comparator token
    ///
    /// An empty operator means equality.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "=" | "==" => Some(Operator::Equal),
            "!" | "!=" => Some(Operator::NotEqual),
            ">" => Some(Operator::GreaterThan),
            ">=" => Some(Operator::GreaterThanOrEqual),
            "<" => Some(Operator::LessThan),
            "<=" => Some(Operator::LessThanOrEqual),
            _ => None,
        }
    }

    /// Get the canonical string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
        }
    }

    /// Get all accepted operator spellings
    pub fn supported_operators() -> &'static [&'static str] {
        &["", "=", "==", "!", "!=", ">", ">=", "<", "<="]
    }

    /// Decide the operator given `candidate.compare(operand)`
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Operator::parse(""), Some(Operator::Equal));
        assert_eq!(Operator::parse("="), Some(Operator::Equal));
        assert_eq!(Operator::parse("=="), Some(Operator::Equal));
        assert_eq!(Operator::parse("!"), Some(Operator::NotEqual));
        assert_eq!(Operator::parse("!="), Some(Operator::NotEqual));
        assert_eq!(Operator::parse(">="), Some(Operator::GreaterThanOrEqual));
        assert_eq!(Operator::parse("<"), Some(Operator::LessThan));
        assert_eq!(Operator::parse("<>"), None);
        assert_eq!(Operator::parse("=>"), None);
        assert_eq!(Operator::parse("~"), None);

        for op in Operator::supported_operators() {
            assert!(Operator::parse(op).is_some(), "{:?}", op);
        }
    }

    #[test]
    fn test_accepts() {
        use Ordering::*;

        let table = [
            (Operator::Equal, [false, true, false]),
            (Operator::NotEqual, [true, false, true]),
            (Operator::GreaterThan, [false, false, true]),
            (Operator::GreaterThanOrEqual, [false, true, true]),
            (Operator::LessThan, [true, false, false]),
            (Operator::LessThanOrEqual, [true, true, false]),
        ];
        for (op, expected) in table {
            for (ordering, want) in [Less, Equal, Greater].into_iter().zip(expected) {
                assert_eq!(op.accepts(ordering), want, "{} with {:?}", op, ordering);
            }
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for op in [
            Operator::Equal,
            Operator::NotEqual,
            Operator::GreaterThan,
            Operator::GreaterThanOrEqual,
            Operator::LessThan,
            Operator::LessThanOrEqual,
        ] {
            assert_eq!(Operator::parse(op.as_str()), Some(op));
        }
    }
}
