//! Range parser entry points

use lazy_static::lazy_static;
use regex::Regex;

use crate::builder;
use crate::error::RangeError;
use crate::grammar::Grammar;
use crate::normalizer::Normalizer;
use crate::range::Range;

lazy_static! {
    static ref OR_SPLIT: Regex = Regex::new(r"\s*\|\|\s*").unwrap();
}

/// Options controlling how ranges are parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Accept loose versions (leading zeros, `1.2.3beta` prereleases)
    pub loose: bool,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loose(mut self, loose: bool) -> Self {
        self.loose = loose;
        self
    }
}

/// Parses range expressions into [`Range`] values
///
/// The parser holds no state besides its options and can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct RangeParser {
    options: ParserOptions,
    grammar: &'static Grammar,
}

impl Default for RangeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeParser {
    /// Create a strict parser
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Self {
        RangeParser {
            options,
            grammar: Grammar::for_dialect(options.loose),
        }
    }

    /// Create a parser for the loose dialect
    pub fn loose() -> Self {
        Self::with_options(ParserOptions::new().loose(true))
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Normalize a range into its `||` alternatives of comparator tokens
    ///
    /// Empty alternatives are dropped. An alternative made only of
    /// wildcards that cancel out comes back as an empty list.
    pub fn normalize(&self, raw: &str) -> Result<Vec<Vec<String>>, RangeError> {
        let normalizer = Normalizer::new(self.grammar);
        segments(raw)
            .map(|segment| normalizer.normalize(segment))
            .collect()
    }

    /// Parse a range expression
    ///
    /// # Examples
    ///
    /// ```
    /// use semrange::{RangeParser, Version};
    ///
    /// let range = RangeParser::new().parse("^1.2 || 3.x").unwrap();
    /// assert!(range.matches(&Version::new(1, 9, 0)));
    /// assert!(range.matches(&Version::new(3, 1, 4)));
    /// assert!(!range.matches(&Version::new(2, 0, 0)));
    /// ```
    pub fn parse(&self, raw: &str) -> Result<Range, RangeError> {
        let normalizer = Normalizer::new(self.grammar);

        let mut result: Option<Range> = None;
        for segment in segments(raw) {
            let tokens = normalizer.normalize(segment)?;
            let group = builder::build(&tokens, raw, self.grammar)?;
            result = Some(match result {
                Some(range) => range.or(group),
                None => group,
            });
        }

        let range = result.ok_or_else(|| RangeError::range_syntax(raw, "no version constraints given"))?;
        log::debug!("parsed range {:?} as {}", raw, range);
        Ok(range)
    }
}

fn segments(raw: &str) -> impl Iterator<Item = &str> {
    OR_SPLIT
        .split(raw)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Parse a range with the strict grammar
pub fn parse_range(raw: &str) -> Result<Range, RangeError> {
    RangeParser::new().parse(raw)
}

/// Parse a range, panicking if it is invalid
///
/// Meant for ranges known at compile time.
pub fn must_parse_range(raw: &str) -> Range {
    match parse_range(raw) {
        Ok(range) => range,
        Err(err) => panic!("invalid version range \"{}\": {}", raw, err),
    }
}
