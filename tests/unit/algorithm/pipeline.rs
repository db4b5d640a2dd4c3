//! Tests for the staged clustering pipeline

#[cfg(test)]
mod tests {
    use voronoi_clusters::algorithm::centroid::Centroid;
    use voronoi_clusters::algorithm::pipeline::{ClusterAnalysis, Stage};
    use voronoi_clusters::algorithm::voronoi::RasterMode;
    use voronoi_clusters::spatial::{GridDimensions, Point};

    fn dims(width: usize, height: usize) -> GridDimensions {
        GridDimensions::new(width, height).unwrap_or_default()
    }

    // Empty input skips the raster entirely
    #[test]
    fn test_empty_input() {
        let analysis = ClusterAnalysis::run(Vec::new(), dims(20, 20), RasterMode::Sequential);
        assert!(analysis.points.is_empty());
        assert!(analysis.components.is_empty());
        assert!(analysis.centroids.is_empty());
        assert!(analysis.voronoi.is_none());
    }

    // Input with only out-of-bounds points behaves like empty input
    #[test]
    fn test_all_points_filtered() {
        let points = vec![Point::new(-1, 0), Point::new(20, 20)];
        let analysis = ClusterAnalysis::run(points, dims(20, 20), RasterMode::Sequential);
        assert!(analysis.components.is_empty());
        assert!(analysis.voronoi.is_none());
    }

    // One centroid per component, and the raster has one site per centroid
    #[test]
    fn test_stage_outputs_line_up() {
        let points = vec![Point::new(1, 1), Point::new(2, 2), Point::new(15, 3)];
        let analysis = ClusterAnalysis::run(points, dims(20, 20), RasterMode::Sequential);
        assert_eq!(analysis.components.len(), 2);
        assert_eq!(
            analysis.centroids,
            vec![Centroid::new(1.5, 1.5), Centroid::new(15.0, 3.0)]
        );
        let Some(ref voronoi) = analysis.voronoi else {
            panic!("two centroids should produce a raster");
        };
        assert_eq!(voronoi.owner(0, 0), Some(0));
        assert_eq!(voronoi.owner(19, 0), Some(1));
        assert_eq!(analysis.dimensions(), dims(20, 20));
    }

    // Observers see the stages in order
    #[test]
    fn test_observer_sees_stages() {
        let mut seen = Vec::new();
        let _ = ClusterAnalysis::run_observed(
            vec![Point::new(0, 0)],
            dims(4, 4),
            RasterMode::Sequential,
            |stage| seen.push(stage),
        );
        assert_eq!(seen, vec![Stage::Label, Stage::Centroids, Stage::Rasterize]);
        assert_eq!(
            seen.iter().map(|s| s.name()).collect::<Vec<_>>(),
            vec!["label", "centroids", "rasterize"]
        );
    }
}
