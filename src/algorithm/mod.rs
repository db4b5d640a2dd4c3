//! Core clustering and rasterization stages

pub mod centroid;
pub mod labeling;
pub mod pipeline;
pub mod voronoi;
