//! Arithmetic-mean centroids of labeled components

use crate::algorithm::labeling::Component;
use crate::spatial::Point;

/// Real-valued mean coordinate of one component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Mean x coordinate
    pub x: f64,
    /// Mean y coordinate
    pub y: f64,
}

impl Centroid {
    /// Create a centroid from explicit coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates as a `[x, y]` site for the rasterizer
    pub const fn as_site(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Mean of a list of points, or `None` when the list is empty
///
/// Coordinates are summed in `i128`, so the sums are exact for any input the
/// grid can hold; the only rounding is the final division.
pub fn centroid_of(points: &[Point]) -> Option<Centroid> {
    if points.is_empty() {
        return None;
    }

    let (sum_x, sum_y) = points.iter().fold((0_i128, 0_i128), |(sx, sy), point| {
        (sx + i128::from(point.x), sy + i128::from(point.y))
    });
    let count = points.len() as f64;

    Some(Centroid::new(sum_x as f64 / count, sum_y as f64 / count))
}

/// Centroids of all components, in component order
///
/// Labeled components are never empty; any empty component passed in by hand
/// is skipped rather than producing a NaN site.
pub fn centroids(components: &[Component]) -> Vec<Centroid> {
    components
        .iter()
        .filter_map(|component| centroid_of(component.points()))
        .collect()
}
