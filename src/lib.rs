//! Connected-component clustering of 2D integer points with a raster Voronoi diagram of the cluster centroids
//!
//! Points are grouped into maximal 8-connected components, each component is reduced
//! to its mean coordinate, and every cell of a fixed-size grid is assigned to its
//! nearest centroid. Cells whose owner differs from their right or lower neighbour
//! form the diagram's boundary.

#![forbid(unsafe_code)]

/// Component labeling, centroid computation, Voronoi rasterization and the pipeline tying them together
pub mod algorithm;
/// Input parsing, artifact writers, command-line front end and error handling
pub mod io;
/// Distance helpers shared by the rasterizer
pub mod math;
/// Grid dimensions, points and point sets
pub mod spatial;

pub use algorithm::pipeline::ClusterAnalysis;
pub use io::error::{ClusterError, Result};
pub use spatial::{GridDimensions, Point, PointSet};
