//! implore-pointmatch - Point-pattern selection for binned datasets
//!
//! This crate compiles compact selection patterns and evaluates them
//! against the points (histogram bins or scatter points) of named,
//! hierarchically organised datasets.
//!
//! # Pattern Syntax
//!
//! - **Path only**: `/analysis/histo1` (a regex matched from the start of the path)
//! - **Exact bin index**: `/analysis/histo1#3`
//! - **Bin index range**: `/analysis/histo1#2:5`, `/analysis/.*#:4`, `/analysis/.*#10:`
//! - **Exact position**: `/analysis/histo1@2.76`
//! - **Position range**: `/analysis/histo1@0.5:1.5`
//! - **Comments**: `/analysis/histo1#3  # anything after a separated '#'`
//!
//! # Examples
//!
//! ```
//! use implore_pointmatch::{PatternMatcher, Point};
//!
//! let pm = PatternMatcher::compile("/foo#1:3  # first two bins after the edge").unwrap();
//! let p = Point::new("/foo", 2, 0.4, 0.6);
//!
//! assert!(pm.match_path(&p.path));
//! assert!(pm.match_point(&p));
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod matcher;
pub mod parser;
pub mod point;
pub mod selector;

pub use config::*;
pub use error::*;
pub use list::*;
pub use matcher::*;
pub use parser::{parse_selector, split_pattern, strip_comment};
pub use point::*;
pub use selector::*;
