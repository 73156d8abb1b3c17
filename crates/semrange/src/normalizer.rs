//! Rewriting of range shorthands into plain comparators
//!
//! A segment (one `||` alternative) goes through an ordered pipeline:
//!
//! 1. hyphen ranges: `1.2 - 3.4` => `>=1.2.0 <3.5.0`
//! 2. whitespace: `> 1.2.3 ~ 1.2` => `>1.2.3 ~1.2`
//! 3. per token: carets, tildes, x-ranges, stars, then `v` prefixes
//!
//! The output only contains `<`, `<=`, `>`, `>=`, `=`, `!=` (or no operator)
//! followed by a full `MAJOR.MINOR.PATCH` version.

use regex::Captures;

use crate::error::RangeError;
use crate::grammar::{is_wildcard, Grammar, Pattern};

/// Rewrites raw range segments into canonical comparator tokens
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    grammar: &'static Grammar,
}

impl Normalizer {
    /// Create a normalizer over the given grammar
    pub fn new(grammar: &'static Grammar) -> Self {
        Normalizer { grammar }
    }

    /// Normalize one `||`-free segment into comparator tokens
    ///
    /// A segment that reduces to nothing yields no tokens.
    pub fn normalize(&self, segment: &str) -> Result<Vec<String>, RangeError> {
        let segment = segment.trim();

        let expanded = self.replace_hyphen(segment)?;
        let trimmed = self.trim_whitespace(&expanded);
        if trimmed != expanded {
            log::trace!("trimmed {:?} => {:?}", expanded, trimmed);
        }

        let mut out = Vec::new();
        for token in trimmed.split_whitespace() {
            out.push(self.expand_token(token)?);
        }

        let tokens: Vec<String> = out
            .iter()
            .flat_map(|s| s.split_whitespace())
            .map(str::to_string)
            .collect();

        log::trace!("normalized {:?} => {:?}", segment, tokens);
        Ok(tokens)
    }

    // 1.2 - 3.4.5 => >=1.2.0 <=3.4.5
    // 1.2.3 - 3.4 => >=1.2.3 <3.5.0 (any 3.4.x will do)
    // 1.2 - 3.4 => >=1.2.0 <3.5.0
    fn replace_hyphen(&self, segment: &str) -> Result<String, RangeError> {
        let caps = match self.grammar.captures(Pattern::HyphenRange, segment) {
            Some(caps) => caps,
            None => return Ok(segment.to_string()),
        };

        let (from_major, from_minor, from_patch) = (group(&caps, 2), group(&caps, 3), group(&caps, 4));
        let from = if is_wildcard(from_major) {
            String::new()
        } else if is_wildcard(from_minor) {
            format!(">={}.0.0", from_major)
        } else if is_wildcard(from_patch) {
            format!(">={}.{}.0", from_major, from_minor)
        } else {
            format!(">={}", strip_leading_prefix(group(&caps, 1)))
        };

        let (to_major, to_minor, to_patch) = (group(&caps, 8), group(&caps, 9), group(&caps, 10));
        let to_prerelease = group(&caps, 11);
        let to = if is_wildcard(to_major) {
            String::new()
        } else if is_wildcard(to_minor) {
            format!("<{}.0.0", increment(to_major)?)
        } else if is_wildcard(to_patch) {
            format!("<{}.{}.0", to_major, increment(to_minor)?)
        } else if !to_prerelease.is_empty() {
            format!("<={}.{}.{}-{}", to_major, to_minor, to_patch, to_prerelease)
        } else {
            format!("<={}", strip_leading_prefix(group(&caps, 7)))
        };

        let replaced = format!("{} {}", from, to).trim().to_string();
        log::trace!("hyphen range {:?} => {:?}", segment, replaced);
        Ok(replaced)
    }

    // `> 1.2.3 < 1.2.5` => `>1.2.3 <1.2.5`, `~ 1.2.3` => `~1.2.3`, `^ 1.2.3` => `^1.2.3`
    fn trim_whitespace(&self, segment: &str) -> String {
        let s = self
            .grammar
            .regex(Pattern::ComparatorTrim)
            .replace_all(segment, "${1}${2}${3}");
        let s = self.grammar.regex(Pattern::TildeTrim).replace_all(&s, "${1}~");
        let s = self.grammar.regex(Pattern::CaretTrim).replace_all(&s, "${1}^");
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn expand_token(&self, token: &str) -> Result<String, RangeError> {
        let s = each_part(token, |p| self.replace_caret(p))?;
        let s = each_part(&s, |p| self.replace_tilde(p))?;
        let s = each_part(&s, |p| self.replace_xrange(p))?;
        let s = each_part(&s, |p| Ok(self.replace_star(p)))?;
        let s = each_part(&s, |p| Ok(self.strip_version_prefix(p)))?;
        if s != token {
            log::trace!("expanded {:?} => {:?}", token, s);
        }
        Ok(s)
    }

    // ^2, ^2.x, ^2.x.x --> >=2.0.0 <3.0.0
    // ^2.0, ^2.0.x --> >=2.0.0 <3.0.0
    // ^1.2, ^1.2.x --> >=1.2.0 <2.0.0
    // ^1.2.3 --> >=1.2.3 <2.0.0
    // ^0.2.3 --> >=0.2.3 <0.3.0
    // ^0.0.3 --> >=0.0.3 <0.0.4
    fn replace_caret(&self, token: &str) -> Result<String, RangeError> {
        let caps = match self.grammar.captures(Pattern::Caret, token) {
            Some(caps) => caps,
            None => return Ok(token.to_string()),
        };
        let (major, minor, patch, pre) = version_parts(&caps, 1);

        if is_wildcard(major) {
            return Ok("*".to_string());
        }
        if is_wildcard(minor) {
            return Ok(format!(">={}.0.0 <{}.0.0", major, increment(major)?));
        }
        if is_wildcard(patch) {
            return Ok(if is_zero(major) {
                format!(">={}.{}.0 <{}.{}.0", major, minor, major, increment(minor)?)
            } else {
                format!(">={}.{}.0 <{}.0.0", major, minor, increment(major)?)
            });
        }

        let lower = lower_bound(major, minor, patch, pre);
        let upper = if !is_zero(major) {
            format!("<{}.0.0", increment(major)?)
        } else if !is_zero(minor) {
            format!("<{}.{}.0", major, increment(minor)?)
        } else {
            format!("<{}.{}.{}", major, minor, increment(patch)?)
        };
        Ok(format!("{} {}", lower, upper))
    }

    // ~2, ~2.x, ~2.x.x, ~>2, ~>2.x ~>2.x.x --> >=2.0.0 <3.0.0
    // ~1.2, ~1.2.x, ~>1.2, ~>1.2.x --> >=1.2.0 <1.3.0
    // ~1.2.3, ~>1.2.3 --> >=1.2.3 <1.3.0
    fn replace_tilde(&self, token: &str) -> Result<String, RangeError> {
        let caps = match self.grammar.captures(Pattern::Tilde, token) {
            Some(caps) => caps,
            None => return Ok(token.to_string()),
        };
        let (major, minor, patch, pre) = version_parts(&caps, 1);

        if is_wildcard(major) {
            return Ok("*".to_string());
        }
        if is_wildcard(minor) {
            return Ok(format!(">={}.0.0 <{}.0.0", major, increment(major)?));
        }
        if is_wildcard(patch) {
            return Ok(format!(">={}.{}.0 <{}.{}.0", major, minor, major, increment(minor)?));
        }
        Ok(format!(
            "{} <{}.{}.0",
            lower_bound(major, minor, patch, pre),
            major,
            increment(minor)?
        ))
    }

    fn replace_xrange(&self, token: &str) -> Result<String, RangeError> {
        let caps = match self.grammar.captures(Pattern::XRange, token) {
            Some(caps) => caps,
            None => return Ok(token.to_string()),
        };
        let (major, minor, patch, _) = version_parts(&caps, 2);
        let mut operator = group(&caps, 1);

        let major_x = is_wildcard(major);
        let minor_x = major_x || is_wildcard(minor);
        let any_x = minor_x || is_wildcard(patch);

        if operator == "=" && any_x {
            operator = "";
        }

        if major_x {
            return Ok(if operator == ">" || operator == "<" {
                // nothing is allowed
                "<0.0.0".to_string()
            } else {
                // nothing is forbidden
                "*".to_string()
            });
        }

        if !operator.is_empty() && any_x {
            return Ok(match operator {
                // >1 => >=2.0.0, >1.2 => >=1.3.0
                ">" if minor_x => format!(">={}.0.0", increment(major)?),
                ">" => format!(">={}.{}.0", major, increment(minor)?),
                // <=0.7.x is actually <0.8.0, since any 0.7.x should pass
                "<=" if minor_x => format!("<{}.0.0", increment(major)?),
                "<=" => format!("<{}.{}.0", major, increment(minor)?),
                _ if minor_x => format!("{}{}.0.0", operator, major),
                _ => format!("{}{}.{}.0", operator, major, minor),
            });
        }

        if minor_x {
            return Ok(format!(">={}.0.0 <{}.0.0", major, increment(major)?));
        }
        if any_x {
            return Ok(format!(">={}.{}.0 <{}.{}.0", major, minor, major, increment(minor)?));
        }
        Ok(token.to_string())
    }

    fn replace_star(&self, token: &str) -> String {
        if self.grammar.is_match(Pattern::Star, token) {
            ">=0.0.0".to_string()
        } else {
            token.to_string()
        }
    }

    fn strip_version_prefix(&self, token: &str) -> String {
        self.grammar
            .regex(Pattern::VersionPrefix)
            .replace(token, "${1}${2}")
            .into_owned()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Grammar::strict())
    }
}

/// Apply a rewrite to every whitespace-separated part and re-join them
fn each_part<F>(s: &str, mut rewrite: F) -> Result<String, RangeError>
where
    F: FnMut(&str) -> Result<String, RangeError>,
{
    let parts = s
        .split_whitespace()
        .map(|part| rewrite(part))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(" "))
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Major, minor, patch and prerelease captured starting at `first`
fn version_parts<'t>(caps: &Captures<'t>, first: usize) -> (&'t str, &'t str, &'t str, &'t str) {
    (
        group(caps, first),
        group(caps, first + 1),
        group(caps, first + 2),
        group(caps, first + 3),
    )
}

fn lower_bound(major: &str, minor: &str, patch: &str, pre: &str) -> String {
    if pre.is_empty() {
        format!(">={}.{}.{}", major, minor, patch)
    } else {
        format!(">={}.{}.{}-{}", major, minor, patch, pre)
    }
}

fn strip_leading_prefix(version: &str) -> &str {
    version.trim_start_matches(|c: char| c == 'v' || c == '=' || c.is_whitespace())
}

fn is_zero(component: &str) -> bool {
    component.bytes().all(|b| b == b'0')
}

/// Add one to a captured numeric component
pub(crate) fn increment(component: &str) -> Result<u64, RangeError> {
    component
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| RangeError::ArithmeticOverflow {
            component: component.to_string(),
        })
}
