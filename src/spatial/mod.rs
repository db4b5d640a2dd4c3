//! Spatial data structures for the clustering grid
//!
//! This module contains:
//! - Grid dimensions and row-major cell indexing
//! - Integer points and their 8-neighbourhood
//! - Bounds-filtered, deduplicated point sets

/// Grid dimensions, points and point sets
pub mod grid;

pub use grid::{GridDimensions, Point, PointSet};
