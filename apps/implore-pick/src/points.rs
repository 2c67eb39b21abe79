//! Point table loading (JSON or CSV)

use implore_pointmatch::PointLike;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Point table errors
#[derive(Debug, Error)]
pub enum PointsError {
    #[error("Failed to open {path}: {message}")]
    Open { path: String, message: String },

    #[error("Invalid JSON point table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSV point table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported point table format: {0}")]
    UnsupportedFormat(String),
}

/// One row of a point table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub path: String,
    pub n: i64,
    pub xmin: f64,
    pub xmax: f64,
    /// Bin content or sample value, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl PointLike for PointRecord {
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

/// Load a point table, choosing the format from the file extension
pub fn load_points(path: &Path) -> Result<Vec<PointRecord>, PointsError> {
    let file = File::open(path).map_err(|e| PointsError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let reader = BufReader::new(file);

    let points = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_reader(reader)?,
        Some("csv") => csv::Reader::from_reader(reader)
            .into_deserialize()
            .collect::<Result<Vec<PointRecord>, _>>()?,
        other => {
            return Err(PointsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ))
        }
    };

    tracing::info!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
