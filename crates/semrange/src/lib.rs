//! Version range parsing and matching
//!
//! This crate parses node-semver style range expressions (`^1.2.3`,
//! `~1.2`, `1.x || >=2.5.0`, `1.2.3 - 2.3.4`, ...) into an immutable
//! [`Range`] that can be evaluated against any number of [`Version`]s.
//!
//! ```
//! use semrange::{parse_range, Version};
//!
//! let range = parse_range(">=1.2.7 <1.3.0").unwrap();
//! assert!(range.matches(&Version::parse("1.2.8").unwrap()));
//! assert!(!range.matches(&Version::parse("1.3.0").unwrap()));
//! ```

mod builder;
mod error;
pub mod grammar;
mod normalizer;
mod parser;
pub mod range;
mod semver;
mod version;

pub use error::{RangeError, VersionError};
pub use grammar::{Grammar, Pattern};
pub use normalizer::Normalizer;
pub use parser::{must_parse_range, parse_range, ParserOptions, RangeParser};
pub use range::{Comparator, Operator, Range};
pub use semver::Semver;
pub use version::{Identifier, Version};
