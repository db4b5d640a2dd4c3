//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use voronoi_clusters::io::configuration::{
        BACKGROUND_COLOR, BOUNDARY_COLOR, CENTERS_SUFFIX, CENTROID_DECIMALS,
        CENTROID_MARKER_RADIUS, DEFAULT_HEIGHT, DEFAULT_WIDTH, IMAGE_SUFFIX, INPUT_EXTENSION,
        MARKER_COLOR, MAX_GRID_DIMENSION, POINT_COLOR,
    };

    // Default grid is 960 by 540
    #[test]
    fn test_default_grid() {
        assert_eq!(DEFAULT_WIDTH, 960);
        assert_eq!(DEFAULT_HEIGHT, 540);
        assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION && DEFAULT_HEIGHT <= MAX_GRID_DIMENSION);
    }

    // Rendering palette
    #[test]
    fn test_colors() {
        assert_eq!(BACKGROUND_COLOR, [255, 255, 255]);
        assert_eq!(POINT_COLOR, [230, 230, 230]);
        assert_eq!(BOUNDARY_COLOR, [0, 0, 255]);
        assert_eq!(MARKER_COLOR, [0, 0, 255]);
    }

    // Artifact formatting and naming
    #[test]
    fn test_output_settings() {
        assert_eq!(CENTROID_DECIMALS, 6);
        assert_eq!(CENTROID_MARKER_RADIUS, 2);
        assert_eq!(IMAGE_SUFFIX, "_voronoi.png");
        assert_eq!(CENTERS_SUFFIX, "_centers.txt");
        assert_eq!(INPUT_EXTENSION, "txt");
    }
}
