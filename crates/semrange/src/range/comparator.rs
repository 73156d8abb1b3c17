//! A single operator/version pair inside a range

use std::fmt;

use super::Operator;
use crate::version::Version;

/// A single version comparator (e.g. `>=1.0.0`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    operator: Operator,
    version: Version,
}

impl Comparator {
    /// Create a new comparator
    pub fn new(operator: Operator, version: Version) -> Self {
        Comparator { operator, version }
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the operand version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check whether a candidate version satisfies this comparator
    pub fn matches(&self, candidate: &Version) -> bool {
        self.operator.accepts(candidate.compare(&self.version))
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
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

    #[test]
    fn test_greater_than() {
        let c = cmp(Operator::GreaterThan, "1.24.0");
        assert!(c.matches(&v("1.25.0")));
        assert!(!c.matches(&v("1.24.0")));
        assert!(!c.matches(&v("1.23.9")));
        assert!(c.matches(&v("1.24.1-alpha")));
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        let c = cmp(Operator::GreaterThanOrEqual, "1.25.0");
        assert!(c.matches(&v("1.25.0")));
        assert!(c.matches(&v("1.26.0")));
        assert!(!c.matches(&v("1.25.0-rc.1")));
    }

    #[test]
    fn test_less_than() {
        let c = cmp(Operator::LessThan, "1.25.0");
        assert!(c.matches(&v("1.24.0")));
        assert!(c.matches(&v("1.25.0-beta")));
        assert!(!c.matches(&v("1.25.0")));
    }

    #[test]
    fn test_less_than_or_equal_to() {
        let c = cmp(Operator::LessThanOrEqual, "1.25.0");
        assert!(c.matches(&v("1.25.0")));
        assert!(c.matches(&v("0.0.1")));
        assert!(!c.matches(&v("1.25.1")));
    }

    #[test]
    fn test_equal_ignores_build_metadata() {
        let c = cmp(Operator::Equal, "1.25.0+linux");
        assert!(c.matches(&v("1.25.0")));
        assert!(c.matches(&v("1.25.0+darwin")));
        assert!(!c.matches(&v("1.25.0-rc.1")));
    }

    #[test]
    fn test_not_equal_to() {
        let c = cmp(Operator::NotEqual, "1.25.0");
        assert!(c.matches(&v("1.24.0")));
        assert!(!c.matches(&v("1.25.0")));
    }

    #[test]
    fn test_display() {
        assert_eq!(cmp(Operator::GreaterThanOrEqual, "1.2.3-rc.1").to_string(), ">=1.2.3-rc.1");
        assert_eq!(cmp(Operator::Equal, "1.2.3").to_string(), "=1.2.3");
    }
}
