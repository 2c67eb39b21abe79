//! Compiled point patterns
//!
//! A [`PatternMatcher`] is built once per pattern string and is then used as
//! a pure predicate: first on a dataset path, then on each of its points.

use crate::config::{MatchOptions, PathMode};
use crate::error::{PatternError, PatternResult};
use crate::parser::{parse_selector, split_pattern, strip_comment};
use crate::point::PointLike;
use crate::selector::Selector;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// An immutable, compiled selection pattern.
///
/// The degenerate matcher (from an empty or comment-only pattern, or
/// [`Default`]) has no path and no selector and accepts everything.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    pattern: Option<String>,
    path: Option<Regex>,
    selector: Selector,
    options: MatchOptions,
}

impl PatternMatcher {
    /// Compile a pattern with default options
    pub fn compile(pattern: &str) -> PatternResult<Self> {
        Self::compile_with(pattern, MatchOptions::default())
    }

    /// Compile a pattern with explicit options
    pub fn compile_with(pattern: &str, options: MatchOptions) -> PatternResult<Self> {
        let text = strip_comment(pattern);
        if text.is_empty() {
            tracing::trace!("empty pattern, using degenerate matcher");
            return Ok(Self {
                options,
                ..Self::default()
            });
        }

        let parts = split_pattern(&text);
        let path = Regex::new(&parts.path).map_err(|e| PatternError::MalformedPath {
            pattern: text.clone(),
            message: e.to_string(),
        })?;
        let selector = match parts.selector {
            Some((kind, body)) => parse_selector(kind, body, options.index_policy, &text)?,
            None => Selector::None,
        };

        if !parts.trailing.is_empty() {
            tracing::debug!(pattern = %text, ignored = %parts.trailing, "ignoring text after selector");
        }
        tracing::debug!(pattern = %text, path = %parts.path, selector = %selector, "compiled point pattern");

        Ok(Self {
            pattern: Some(text),
            path: Some(path),
            selector,
            options,
        })
    }

    /// Replace this matcher with a freshly compiled one.
    ///
    /// On error the current matcher is left unchanged.
    pub fn recompile(&mut self, pattern: &str) -> PatternResult<()> {
        *self = Self::compile_with(pattern, self.options)?;
        Ok(())
    }

    /// Normalised pattern text (comment stripped, trimmed)
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// The path expression as compiled, escapes resolved
    pub fn path_expr(&self) -> Option<&str> {
        self.path.as_ref().map(Regex::as_str)
    }

    /// The compiled numeric selector
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Options this matcher was compiled with
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Check if this is the degenerate, match-everything matcher
    pub fn is_degenerate(&self) -> bool {
        self.path.is_none()
    }

    /// Path expression matches at the start of `path`.
    ///
    /// Checked on the leftmost match, so the expression is compiled verbatim.
    pub fn match_path(&self, path: &str) -> bool {
        self.path
            .as_ref()
            .map_or(true, |re| re.find(path).is_some_and(|m| m.start() == 0))
    }

    /// Path expression matches anywhere in `path`.
    pub fn search_path(&self, path: &str) -> bool {
        self.path
            .as_ref()
            .map_or(true, |re| re.is_match(path))
    }

    /// Path test according to the configured [`PathMode`]
    pub fn matches_path(&self, path: &str) -> bool {
        match self.options.path_mode {
            PathMode::Anchored => self.match_path(path),
            PathMode::Search => self.search_path(path),
        }
    }

    /// Decide whether a point is accepted by the numeric selector.
    ///
    /// The point's path is not consulted; call [`match_path`](Self::match_path)
    /// first.
    pub fn match_point<P: PointLike + ?Sized>(&self, point: &P) -> bool {
        self.selector.accepts(point)
    }

    /// Path test followed by the selector test
    pub fn matches<P: PointLike + ?Sized>(&self, point: &P) -> bool {
        self.matches_path(point.path()) && self.match_point(point)
    }
}

impl PartialEq for PatternMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.path_expr() == other.path_expr()
            && self.selector == other.selector
            && self.options == other.options
    }
}

impl FromStr for PatternMatcher {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern.as_deref().unwrap_or(""))
    }
}
