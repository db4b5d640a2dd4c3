//! Squared Euclidean distance between grid cells and real-valued sites

use num_traits::Float;

/// Squared distance from the cell `(x, y)` to `site`
///
/// No square root is taken; comparisons between squared distances order
/// sites the same way as true distances do.
pub fn squared_distance<T: Float>(x: T, y: T, site: [T; 2]) -> T {
    let dx = x - site[0];
    let dy = y - site[1];
    dx * dx + dy * dy
}

/// Index of the nearest site to `(x, y)`, or `None` when `sites` is empty
///
/// Sites are scanned in order and only a strictly smaller distance replaces the
/// current best, so equidistant sites resolve to the lowest index.
pub fn nearest_site<T: Float>(x: T, y: T, sites: &[[T; 2]]) -> Option<usize> {
    let (first, rest) = sites.split_first()?;
    let mut best = 0;
    let mut best_distance = squared_distance(x, y, *first);
    for (offset, site) in rest.iter().enumerate() {
        let distance = squared_distance(x, y, *site);
        if distance < best_distance {
            best_distance = distance;
            best = offset + 1;
        }
    }
    Some(best)
}
