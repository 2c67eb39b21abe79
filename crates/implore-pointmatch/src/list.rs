//! Selection lists: one pattern per line
//!
//! ```text
//! # histograms to keep
//! /ATLAS_2017_I1614149/d01-x01-y01#2:      # drop the first two bins
//! /ATLAS_2017_I1614149/d0[2-4].*@10:200
//! /CMS_2016_.*
//! ```
//!
//! Blank and comment-only lines are skipped. A point is selected when any
//! pattern of the list accepts both its path and its index/position.

use crate::config::SelectionConfig;
use crate::error::SelectionError;
use crate::matcher::PatternMatcher;
use crate::point::PointLike;
use std::fmt;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An ordered collection of compiled patterns
#[derive(Debug, Clone, Default)]
pub struct SelectionList {
    matchers: Vec<PatternMatcher>,
}

impl SelectionList {
    /// Build a list from already compiled matchers.
    ///
    /// Degenerate matchers are dropped.
    pub fn new(matchers: Vec<PatternMatcher>) -> Self {
        Self {
            matchers: matchers
                .into_iter()
                .filter(|m| !m.is_degenerate())
                .collect(),
        }
    }

    /// Parse selection text, one pattern per line.
    pub fn parse(text: &str, config: &SelectionConfig) -> Result<Self, SelectionError> {
        let mut matchers = Vec::new();

        for (i, line) in text.lines().enumerate() {
            match PatternMatcher::compile_with(line, config.matching) {
                Ok(m) if m.is_degenerate() => {}
                Ok(m) => matchers.push(m),
                Err(source) if config.skip_invalid => {
                    tracing::warn!("Skipping selection line {}: {}", i + 1, source);
                }
                Err(source) => {
                    return Err(SelectionError::Pattern {
                        line: i + 1,
                        source,
                    })
                }
            }
        }

        tracing::debug!("Parsed {} selection patterns", matchers.len());
        Ok(Self { matchers })
    }

    /// Read and parse a selection file
    pub fn load(path: impl AsRef<Path>, config: &SelectionConfig) -> Result<Self, SelectionError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SelectionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, config)
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the list has no patterns
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Iterate over the compiled patterns
    pub fn iter(&self) -> impl Iterator<Item = &PatternMatcher> {
        self.matchers.iter()
    }

    /// Whether any pattern accepts the dataset path
    pub fn matches_path(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches_path(path))
    }

    /// Whether any pattern accepts both the point's path and position
    pub fn matches<P: PointLike + ?Sized>(&self, point: &P) -> bool {
        self.matchers.iter().any(|m| m.matches(point))
    }

    /// Select the accepted points, keeping input order.
    #[cfg(not(feature = "parallel"))]
    pub fn select_points<'a, P: PointLike>(&self, points: &'a [P]) -> Vec<&'a P> {
        let selected: Vec<&P> = points.iter().filter(|p| self.matches(*p)).collect();
        tracing::debug!("Selected {} of {} points", selected.len(), points.len());
        selected
    }

    /// Select the accepted points, keeping input order.
    #[cfg(feature = "parallel")]
    pub fn select_points<'a, P: PointLike + Sync>(&self, points: &'a [P]) -> Vec<&'a P> {
        let selected: Vec<&P> = points.par_iter().filter(|p| self.matches(*p)).collect();
        tracing::debug!("Selected {} of {} points", selected.len(), points.len());
        selected
    }
}

impl<'a> IntoIterator for &'a SelectionList {
    type Item = &'a PatternMatcher;
    type IntoIter = std::slice::Iter<'a, PatternMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchers.iter()
    }
}

impl fmt::Display for SelectionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.matchers {
            writeln!(f, "{}", m)?;
        }
        Ok(())
    }
}
