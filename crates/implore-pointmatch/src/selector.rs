//! Compiled numeric selectors
//!
//! A selector is decided once, when a pattern is compiled, and is then
//! evaluated against many points without any further parsing.

use crate::point::PointLike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which point coordinate a selector restricts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectorKind {
    /// Bin index, introduced by `#`
    Index,
    /// Position along the primary axis, introduced by `@`
    Position,
}

impl SelectorKind {
    /// Parse from the selector marker character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Index),
            '@' => Some(Self::Position),
            _ => None,
        }
    }

    /// Marker character.
    pub fn marker(&self) -> char {
        match self {
            Self::Index => '#',
            Self::Position => '@',
        }
    }
}

/// A closed-open numeric range `[lo, hi)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// Create a new interval
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The interval covering the whole real line
    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// `lo <= x < hi`
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x < self.hi
    }

    /// Overlap test against a point's `[xmin, xmax)` interval.
    ///
    /// The upper comparison is inclusive (`xmin <= hi`), so a point starting
    /// exactly at `hi` is still accepted.
    pub fn overlaps(&self, xmin: f64, xmax: f64) -> bool {
        xmax > self.lo && xmin <= self.hi
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lo != f64::NEG_INFINITY {
            write!(f, "{}", self.lo)?;
        }
        write!(f, ":")?;
        if self.hi != f64::INFINITY {
            write!(f, "{}", self.hi)?;
        }
        Ok(())
    }
}

/// The numeric target of a selector: one exact value or a range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Target<T> {
    Exact(T),
    Range(Interval),
}

impl<T: fmt::Display> fmt::Display for Target<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Exact(v) => write!(f, "{}", v),
            Target::Range(r) => write!(f, "{}", r),
        }
    }
}

/// A compiled numeric selector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Selector {
    /// No numeric restriction
    #[default]
    None,

    /// Restriction on the bin index
    Index(Target<i64>),

    /// Restriction on the position interval
    Position(Target<f64>),
}

impl Selector {
    /// Which coordinate this selector restricts, if any
    pub fn kind(&self) -> Option<SelectorKind> {
        match self {
            Selector::None => None,
            Selector::Index(_) => Some(SelectorKind::Index),
            Selector::Position(_) => Some(SelectorKind::Position),
        }
    }

    /// Check if this selector accepts every point
    pub fn is_none(&self) -> bool {
        matches!(self, Selector::None)
    }

    /// Decide whether a point is accepted.
    pub fn accepts<P: PointLike + ?Sized>(&self, point: &P) -> bool {
        match self {
            Selector::None => true,
            Selector::Index(Target::Exact(n)) => point.index() == *n,
            Selector::Index(Target::Range(r)) => r.contains(point.index() as f64),
            Selector::Position(Target::Exact(x)) => point.xmin() <= *x && *x < point.xmax(),
            Selector::Position(Target::Range(r)) => r.overlaps(point.xmin(), point.xmax()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::None => Ok(()),
            Selector::Index(t) => write!(f, "#{}", t),
            Selector::Position(t) => write!(f, "@{}", t),
        }
    }
}
