//! Point records consumed by the matcher.

use serde::{Deserialize, Serialize};

/// Read-only view of a point that can be matched.
///
/// Callers with their own bin or sample records implement this instead of
/// converting to [`Point`].
pub trait PointLike {
    /// Path of the dataset the point belongs to
    fn path(&self) -> &str;

    /// Bin index within the dataset
    fn index(&self) -> i64;

    /// Lower edge of the half-open position interval
    fn xmin(&self) -> f64;

    /// Upper edge of the half-open position interval
    fn xmax(&self) -> f64;
}

/// A plain point: dataset path, bin index and `[xmin, xmax)` interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub path: String,
    pub n: i64,
    pub xmin: f64,
    pub xmax: f64,
}

impl Point {
    /// Create a new point
    pub fn new(path: impl Into<String>, n: i64, xmin: f64, xmax: f64) -> Self {
        Self {
            path: path.into(),
            n,
            xmin,
            xmax,
        }
    }

    /// Build the points of a binned dataset from its ordered bin edges.
    ///
    /// `edges` of length `k + 1` yields `k` points indexed from 0.
    pub fn from_edges(path: &str, edges: &[f64]) -> Vec<Point> {
        edges
            .windows(2)
            .enumerate()
            .map(|(i, w)| Point::new(path, i as i64, w[0], w[1]))
            .collect()
    }
}

impl PointLike for Point {
    fn path(&self) -> &str {
        &self.path
    }

    fn index(&self) -> i64 {
        self.n
    }

    fn xmin(&self) -> f64 {
        self.xmin
    }

    fn xmax(&self) -> f64 {
        self.xmax
    }
}
