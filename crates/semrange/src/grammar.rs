//! Lexical grammar shared by version and range parsing
//!
//! Every pattern is compiled once per process into one of two read-only
//! tables: the strict dialect (SemVer 2.0.0) and the loose dialect, which
//! also accepts leading zeros, `1.2.3beta1` style prereleases and stray
//! `v`/`=` prefixes.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Named patterns a [`Grammar`] can test a string against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `0` or a digit run without a leading zero
    NumericIdentifier,
    /// Identifier containing at least one letter or hyphen
    NonNumericIdentifier,
    /// A single prerelease identifier
    PrereleaseIdentifier,
    /// A single build metadata identifier
    BuildIdentifier,
    /// `MAJOR.MINOR.PATCH`
    MainVersion,
    /// A complete version with optional prerelease and build metadata
    FullVersion,
    /// A numeric identifier or one of `x`, `X`, `*`
    XRangeIdentifier,
    /// `<`, `<=`, `>`, `>=`, `=` or nothing
    Operator,
    /// An operator followed by a possibly wildcarded version
    XRange,
    /// `~` or `~>` followed by a possibly wildcarded version
    Tilde,
    /// `^` followed by a possibly wildcarded version
    Caret,
    /// `<xrange> - <xrange>` occupying the whole input
    HyphenRange,
    /// An optional relational operator followed by `*`
    Star,
    /// Whitespace between an operator and its version (unanchored)
    ComparatorTrim,
    /// Whitespace after a lone `~`/`~>` (unanchored)
    TildeTrim,
    /// Whitespace after a lone `^` (unanchored)
    CaretTrim,
    /// A comparator whose version carries a `v` prefix
    VersionPrefix,
}

/// A compiled set of grammar patterns for one dialect
#[derive(Debug)]
pub struct Grammar {
    loose: bool,
    numeric_identifier: Regex,
    non_numeric_identifier: Regex,
    prerelease_identifier: Regex,
    build_identifier: Regex,
    main_version: Regex,
    full_version: Regex,
    xrange_identifier: Regex,
    operator: Regex,
    xrange: Regex,
    tilde: Regex,
    caret: Regex,
    hyphen_range: Regex,
    star: Regex,
    comparator_trim: Regex,
    tilde_trim: Regex,
    caret_trim: Regex,
    version_prefix: Regex,
}

const NUMERIC_IDENTIFIER: &str = r"0|[1-9][0-9]*";
const NUMERIC_IDENTIFIER_LOOSE: &str = r"[0-9]+";
const NON_NUMERIC_IDENTIFIER: &str = r"[0-9]*[a-zA-Z-][a-zA-Z0-9-]*";
const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";
const GTLT: &str = r"((?:<|>)?=?)";

lazy_static! {
    static ref STRICT: Grammar = Grammar::build(false);
    static ref LOOSE: Grammar = Grammar::build(true);
}

fn anchored(src: &str) -> Regex {
    compile(&format!("^(?:{})$", src))
}

fn compile(src: &str) -> Regex {
    // Every source is assembled from the constants above, so a failure here
    // is a bug in this module rather than bad input.
    Regex::new(src).unwrap_or_else(|err| panic!("invalid grammar pattern {}: {}", src, err))
}

impl Grammar {
    /// The strict SemVer 2.0.0 grammar
    pub fn strict() -> &'static Grammar {
        &STRICT
    }

    /// The loose grammar
    pub fn loose() -> &'static Grammar {
        &LOOSE
    }

    /// Pick the grammar for a dialect
    pub fn for_dialect(loose: bool) -> &'static Grammar {
        if loose {
            Self::loose()
        } else {
            Self::strict()
        }
    }

    fn build(loose: bool) -> Self {
        let numeric = if loose {
            NUMERIC_IDENTIFIER_LOOSE
        } else {
            NUMERIC_IDENTIFIER
        };

        let prerelease_identifier = format!("(?:{}|{})", numeric, NON_NUMERIC_IDENTIFIER);
        let prerelease = if loose {
            format!(r"(?:-?({pi}(?:\.{pi})*))", pi = prerelease_identifier)
        } else {
            format!(r"(?:-({pi}(?:\.{pi})*))", pi = prerelease_identifier)
        };
        let build = format!(r"(?:\+({bi}(?:\.{bi})*))", bi = BUILD_IDENTIFIER);

        let main_version = format!(r"({n})\.({n})\.({n})", n = numeric);
        let full_plain = if loose {
            format!(r"[v=\s]*{}{}?{}?", main_version, prerelease, build)
        } else {
            format!(r"v?{}{}?{}?", main_version, prerelease, build)
        };
        // Used by the comparator trim, which always has to see through `v` and `=`
        let loose_plain = format!(
            r"[v=\s]*({n})\.({n})\.({n})(?:-?({pi}(?:\.{pi})*))?{b}?",
            n = NUMERIC_IDENTIFIER_LOOSE,
            pi = format!("(?:{}|{})", NUMERIC_IDENTIFIER_LOOSE, NON_NUMERIC_IDENTIFIER),
            b = build,
        );

        let xrange_identifier = format!(r"{}|x|X|\*", numeric);
        let xrange_plain = format!(
            r"[v=\s]*({xi})(?:\.({xi})(?:\.({xi})(?:{pr})?{b}?)?)?",
            xi = xrange_identifier,
            pr = prerelease,
            b = build,
        );

        Grammar {
            loose,
            numeric_identifier: anchored(numeric),
            non_numeric_identifier: anchored(NON_NUMERIC_IDENTIFIER),
            prerelease_identifier: anchored(&prerelease_identifier),
            build_identifier: anchored(BUILD_IDENTIFIER),
            main_version: compile(&format!("^{}$", main_version)),
            full_version: compile(&format!(r"^\s*{}\s*$", full_plain)),
            xrange_identifier: anchored(&xrange_identifier),
            operator: compile(&format!("^{}$", GTLT)),
            xrange: compile(&format!(r"^{}\s*{}$", GTLT, xrange_plain)),
            tilde: compile(&format!(r"^(?:~>?){}$", xrange_plain)),
            caret: compile(&format!(r"^(?:\^){}$", xrange_plain)),
            hyphen_range: compile(&format!(
                r"^\s*({xp})\s+-\s+({xp})\s*$",
                xp = xrange_plain
            )),
            star: compile(r"^(<|>)?=?\s*\*$"),
            comparator_trim: compile(&format!(
                r"(\s*){}\s*({}|{})",
                GTLT, loose_plain, xrange_plain
            )),
            tilde_trim: compile(r"(\s*)(?:~>?)\s+"),
            caret_trim: compile(r"(\s*)(?:\^)\s+"),
            version_prefix: compile(r"^((?:!|<|>)?=?)v([0-9].*)$"),
        }
    }

    /// Whether this is the loose dialect
    pub fn is_loose(&self) -> bool {
        self.loose
    }

    /// Get the compiled expression behind a pattern
    pub fn regex(&self, pattern: Pattern) -> &Regex {
        match pattern {
            Pattern::NumericIdentifier => &self.numeric_identifier,
            Pattern::NonNumericIdentifier => &self.non_numeric_identifier,
            Pattern::PrereleaseIdentifier => &self.prerelease_identifier,
            Pattern::BuildIdentifier => &self.build_identifier,
            Pattern::MainVersion => &self.main_version,
            Pattern::FullVersion => &self.full_version,
            Pattern::XRangeIdentifier => &self.xrange_identifier,
            Pattern::Operator => &self.operator,
            Pattern::XRange => &self.xrange,
            Pattern::Tilde => &self.tilde,
            Pattern::Caret => &self.caret,
            Pattern::HyphenRange => &self.hyphen_range,
            Pattern::Star => &self.star,
            Pattern::ComparatorTrim => &self.comparator_trim,
            Pattern::TildeTrim => &self.tilde_trim,
            Pattern::CaretTrim => &self.caret_trim,
            Pattern::VersionPrefix => &self.version_prefix,
        }
    }

    /// Test a string against a pattern
    pub fn is_match(&self, pattern: Pattern, input: &str) -> bool {
        self.regex(pattern).is_match(input)
    }

    /// Test a string against a pattern and return its capture groups
    pub fn captures<'t>(&self, pattern: Pattern, input: &'t str) -> Option<Captures<'t>> {
        self.regex(pattern).captures(input)
    }
}

/// Wildcard test for a captured version position
///
/// An omitted position counts as a wildcard.
pub fn is_wildcard(part: &str) -> bool {
    part.is_empty() || part == "x" || part == "X" || part == "*"
}
