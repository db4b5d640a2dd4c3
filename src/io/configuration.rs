//! Grid defaults, rendering constants and output naming

// Grid settings
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 960;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 540;

// Keeps the ownership map and point bitmaps to a bounded allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Centroid artifact
/// Decimal places written for each centroid coordinate
pub const CENTROID_DECIMALS: usize = 6;

// Image colours (RGB)
/// Image background
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
/// Input points
pub const POINT_COLOR: [u8; 3] = [230, 230, 230];
/// Voronoi boundary cells
pub const BOUNDARY_COLOR: [u8; 3] = [0, 0, 255];
/// Centroid marker outlines
pub const MARKER_COLOR: [u8; 3] = [0, 0, 255];

/// Radius of the ring drawn around each centroid, in pixels
pub const CENTROID_MARKER_RADIUS: i64 = 2;

// Output settings
/// Suffix for the rendered diagram, appended to the input stem
pub const IMAGE_SUFFIX: &str = "_voronoi.png";
/// Suffix for the centroid list, appended to the input stem
pub const CENTERS_SUFFIX: &str = "_centers.txt";
/// Extension of point files picked up from a directory target
pub const INPUT_EXTENSION: &str = "txt";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
