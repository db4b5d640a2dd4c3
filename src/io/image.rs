//! PNG rendering of points, Voronoi boundaries and centroid markers
//!
//! Grid `y = 0` is the bottom image row: a cell `(x, y)` lands on pixel
//! `(x, height - 1 - y)`. Layers are painted in order over a white background:
//! input points, boundary cells, then centroid rings.
//!
//! Boundary cells are flipped like the other layers, so the unmarked last grid
//! row shows up as the top image row rather than the bottom one.
//!
//! Marker centres are flipped while still fractional and truncated afterwards:
//! a centroid at `(cx, cy)` is centred on pixel `(trunc(cx), trunc(height - 1 - cy))`.

use image::{Rgb, RgbImage};
use std::path::Path;

use crate::algorithm::centroid::Centroid;
use crate::algorithm::pipeline::ClusterAnalysis;
use crate::io::configuration::{
    BACKGROUND_COLOR, BOUNDARY_COLOR, CENTROID_MARKER_RADIUS, MARKER_COLOR, POINT_COLOR,
};
use crate::io::error::{ClusterError, Result, computation_error};
use crate::spatial::{GridDimensions, Point};

/// Map a grid cell to image pixel coordinates, or `None` outside the grid
pub fn grid_to_image(point: Point, dimensions: GridDimensions) -> Option<(u32, u32)> {
    if !dimensions.contains(point) {
        return None;
    }
    let flipped = dimensions.height() as i64 - 1 - point.y;
    Some((point.x as u32, flipped as u32))
}

/// Pixel offsets of a one-pixel-wide ring of the given radius
///
/// Includes every offset whose distance from the centre rounds to `radius`.
pub fn ring_offsets(radius: i64) -> Vec<(i64, i64)> {
    let outer = (radius as f64 + 0.5).powi(2);
    let inner = (radius as f64 - 0.5).max(0.0).powi(2);
    let mut offsets = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let distance = (dx * dx + dy * dy) as f64;
            if distance <= outer && (distance > inner || radius == 0) {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Image-space centre of the marker for `centroid`, or `None` off the grid
///
/// The bounds check runs on the raw centroid, so a slightly negative coordinate
/// is rejected even though it would truncate to zero.
pub fn marker_center(centroid: &Centroid, dimensions: GridDimensions) -> Option<(i64, i64)> {
    let width = dimensions.width() as f64;
    let height = dimensions.height() as f64;
    if !(0.0..width).contains(&centroid.x) || !(0.0..height).contains(&centroid.y) {
        return None;
    }
    let column = centroid.x.trunc() as i64;
    let row = (height - 1.0 - centroid.y).trunc() as i64;
    Some((column, row))
}

fn paint(img: &mut RgbImage, point: Point, dimensions: GridDimensions, color: [u8; 3]) {
    if let Some((px, py)) = grid_to_image(point, dimensions) {
        img.put_pixel(px, py, Rgb(color));
    }
}

/// Render an analysis to an RGB image the size of its grid
///
/// # Errors
///
/// Returns an error if the grid does not fit in image dimensions
pub fn render_diagram(analysis: &ClusterAnalysis) -> Result<RgbImage> {
    let dimensions = analysis.dimensions();
    let width = u32::try_from(dimensions.width())
        .map_err(|e| computation_error("render_diagram", &e))?;
    let height = u32::try_from(dimensions.height())
        .map_err(|e| computation_error("render_diagram", &e))?;

    let mut img = RgbImage::from_pixel(width, height, Rgb(BACKGROUND_COLOR));

    for &point in &analysis.points {
        paint(&mut img, point, dimensions, POINT_COLOR);
    }

    if let Some(voronoi) = &analysis.voronoi {
        for cell in voronoi.boundary_cells() {
            paint(&mut img, cell, dimensions, BOUNDARY_COLOR);
        }
    }

    let ring = ring_offsets(CENTROID_MARKER_RADIUS);
    for centroid in &analysis.centroids {
        let Some((column, row)) = marker_center(centroid, dimensions) else {
            continue;
        };
        for &(dx, dy) in &ring {
            let (Ok(px), Ok(py)) = (u32::try_from(column + dx), u32::try_from(row + dy)) else {
                continue;
            };
            if px < width && py < height {
                img.put_pixel(px, py, Rgb(MARKER_COLOR));
            }
        }
    }

    Ok(img)
}

/// Render an analysis and save it as an image, creating parent directories
///
/// The format follows the file extension of `output_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The grid does not fit in image dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_diagram(analysis: &ClusterAnalysis, output_path: &Path) -> Result<()> {
    let img = render_diagram(analysis)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ClusterError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| ClusterError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), "exported diagram");
    Ok(())
}
