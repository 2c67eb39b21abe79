//! Pattern text parsing
//!
//! Grammar:
//! ```text
//! line      := pattern? comment?
//! comment   := (^ | ws+) '#' any*
//! pattern   := path selector?
//! path      := (char - '#' - '@' | '\#' | '\@')*
//! selector  := ('#' | '@') token
//! token     := number | number? ':' number?
//! ```
//!
//! A selector marker always abuts the path text, which is what tells it
//! apart from a comment `#`.

use crate::error::{PatternError, PatternResult};
use crate::selector::{Interval, Selector, SelectorKind, Target};
use crate::config::IndexPolicy;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"(?s)(?:^|\s+)#.*").unwrap();
}

/// Remove a separated trailing comment and surrounding whitespace.
///
/// # Examples
/// ```
/// use implore_pointmatch::strip_comment;
/// assert_eq!(strip_comment("/foo#1:2  # a trailing remark"), "/foo#1:2");
/// assert_eq!(strip_comment("# only a comment"), "");
/// assert_eq!(strip_comment("  /bar@2.5 "), "/bar@2.5");
/// ```
pub fn strip_comment(line: &str) -> String {
    COMMENT.replace(line, "").trim().to_string()
}

/// A pattern split into its path expression and raw selector
#[derive(Debug, Clone, PartialEq)]
pub struct PatternParts<'a> {
    /// Path expression with selector escapes resolved
    pub path: String,
    /// Selector marker and body, if present
    pub selector: Option<(SelectorKind, &'a str)>,
    /// Text after the selector that was ignored
    pub trailing: &'a str,
}

/// Split comment-free pattern text at the first unescaped `#` or `@`.
///
/// `\#` and `\@` become literal characters of the path expression; any other
/// backslash sequence is passed through to the regex untouched.
pub fn split_pattern(text: &str) -> PatternParts<'_> {
    let mut path = String::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, m @ ('#' | '@'))) => path.push(m),
                Some((_, other)) => {
                    path.push('\\');
                    path.push(other);
                }
                None => path.push('\\'),
            }
            continue;
        }

        if let Some(kind) = SelectorKind::from_char(c) {
            let after = &text[i + c.len_utf8()..];
            let end = after.find(char::is_whitespace).unwrap_or(after.len());
            return PatternParts {
                path,
                selector: Some((kind, &after[..end])),
                trailing: after[end..].trim(),
            };
        }

        path.push(c);
    }

    PatternParts {
        path,
        selector: None,
        trailing: "",
    }
}

/// Parse one number of a token
fn parse_number(token: &str, pattern: &str) -> PatternResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| PatternError::MalformedNumber {
            pattern: pattern.to_string(),
            token: token.to_string(),
        })
}

/// Parse a range bound, substituting `missing` for an empty bound
fn parse_bound(token: &str, missing: f64, pattern: &str) -> PatternResult<f64> {
    if token.is_empty() {
        Ok(missing)
    } else {
        parse_number(token, pattern)
    }
}

/// Convert an exact index value to a bin index
fn exact_index(value: f64, policy: IndexPolicy, pattern: &str) -> PatternResult<i64> {
    if !value.is_finite() {
        return Err(PatternError::MalformedSelector {
            pattern: pattern.to_string(),
            message: format!("bin index {} is not finite", value),
        });
    }
    if value.fract() != 0.0 && policy == IndexPolicy::Reject {
        return Err(PatternError::MalformedSelector {
            pattern: pattern.to_string(),
            message: format!("bin index {} is not an integer", value),
        });
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    let index = value.trunc();
    if index < i64::MIN as f64 || index >= i64::MAX as f64 {
        return Err(PatternError::MalformedSelector {
            pattern: pattern.to_string(),
            message: format!("bin index {} is out of range", value),
        });
    }
    Ok(index as i64)
}

/// Parse the body of a selector into a compiled [`Selector`].
///
/// `pattern` is only used for error reporting.
pub fn parse_selector(
    kind: SelectorKind,
    body: &str,
    policy: IndexPolicy,
    pattern: &str,
) -> PatternResult<Selector> {
    if body.is_empty() {
        return Err(PatternError::MalformedSelector {
            pattern: pattern.to_string(),
            message: format!("nothing follows '{}'", kind.marker()),
        });
    }

    // Only the first colon splits; a second one lands in the upper bound
    let range = match body.split_once(':') {
        None => {
            let value = parse_number(body, pattern)?;
            return Ok(match kind {
                SelectorKind::Index => {
                    Selector::Index(Target::Exact(exact_index(value, policy, pattern)?))
                }
                SelectorKind::Position => Selector::Position(Target::Exact(value)),
            });
        }
        Some((lo, hi)) => Interval::new(
            parse_bound(lo, f64::NEG_INFINITY, pattern)?,
            parse_bound(hi, f64::INFINITY, pattern)?,
        ),
    };

    Ok(match kind {
        SelectorKind::Index => Selector::Index(Target::Range(range)),
        SelectorKind::Position => Selector::Position(Target::Range(range)),
    })
}
