//! Mathematical utilities

/// Squared Euclidean distances between grid cells and real-valued sites
pub mod distance;
