//! Runs the clustering stages in order: points, components, centroids, raster

use crate::algorithm::centroid::{self, Centroid};
use crate::algorithm::labeling::{Component, label_components};
use crate::algorithm::voronoi::{RasterMode, VoronoiRaster};
use crate::spatial::{GridDimensions, Point, PointSet};

/// Stage about to start, reported to observers of [`ClusterAnalysis::run_observed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Flood-fill labeling of connected components
    Label,
    /// Mean coordinate of each component
    Centroids,
    /// Nearest-site assignment and boundary extraction
    Rasterize,
}

impl Stage {
    /// Short lowercase name for progress displays
    pub const fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Centroids => "centroids",
            Self::Rasterize => "rasterize",
        }
    }
}

/// Everything computed for one input point list
///
/// All stages run to completion before the value is returned. Nothing is
/// updated incrementally; rerun with new points to get a new analysis.
#[derive(Debug, Clone)]
pub struct ClusterAnalysis {
    /// Unique in-bounds input points
    pub points: PointSet,
    /// Maximal 8-connected components
    pub components: Vec<Component>,
    /// One centroid per component, same order
    pub centroids: Vec<Centroid>,
    /// Voronoi diagram of the centroids, `None` when there are none
    pub voronoi: Option<VoronoiRaster>,
}

impl ClusterAnalysis {
    /// Run all stages over raw points
    ///
    /// Points outside `dimensions` and duplicates are dropped first. Empty input
    /// gives an analysis with no components, no centroids and no raster.
    pub fn run<I>(points: I, dimensions: GridDimensions, mode: RasterMode) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::run_observed(points, dimensions, mode, |_| {})
    }

    /// Run all stages, calling `observer` as each stage starts
    pub fn run_observed<I, F>(
        points: I,
        dimensions: GridDimensions,
        mode: RasterMode,
        mut observer: F,
    ) -> Self
    where
        I: IntoIterator<Item = Point>,
        F: FnMut(Stage),
    {
        let span = tracing::info_span!("cluster analysis");
        let _enter = span.enter();

        let points = PointSet::from_points(points, dimensions);

        observer(Stage::Label);
        let components = {
            let span = tracing::info_span!("label components");
            let _enter = span.enter();
            label_components(&points)
        };

        observer(Stage::Centroids);
        let centroids = {
            let span = tracing::info_span!("compute centroids");
            let _enter = span.enter();
            centroid::centroids(&components)
        };

        observer(Stage::Rasterize);
        let voronoi = {
            let span = tracing::info_span!("rasterize voronoi");
            let _enter = span.enter();
            let sites: Vec<[f64; 2]> = centroids.iter().map(Centroid::as_site).collect();
            VoronoiRaster::rasterize(&sites, dimensions, mode)
        };

        tracing::info!(
            points = points.len(),
            components = components.len(),
            boundary_cells = voronoi.as_ref().map_or(0, VoronoiRaster::boundary_len),
            "cluster analysis complete"
        );

        Self {
            points,
            components,
            centroids,
            voronoi,
        }
    }

    /// Grid the analysis was computed on
    pub const fn dimensions(&self) -> GridDimensions {
        self.points.dimensions()
    }
}
