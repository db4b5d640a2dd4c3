//! Connected-component labeling over a sparse point set using 8-connectivity
//!
//! Components are grown by breadth-first flood fill. Seeds are taken in the
//! point set's insertion order, so the output order is deterministic for a given
//! input order while the partition itself does not depend on it.

use bitvec::prelude::*;
use std::collections::VecDeque;

use crate::spatial::{Point, PointSet};

/// Maximal group of mutually 8-connected points
///
/// Points are stored in the order the flood fill reached them, starting with
/// the seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    points: Vec<Point>,
}

impl Component {
    /// Points of the component in discovery order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points in the component
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for components produced by [`label_components`]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point reached, which is the flood fill seed
    pub fn seed(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

impl From<Vec<Point>> for Component {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Partition a point set into maximal 8-connected components
///
/// Every point of `points` ends up in exactly one component. An empty set
/// yields no components.
pub fn label_components(points: &PointSet) -> Vec<Component> {
    let dimensions = points.dimensions();
    let mut visited = bitvec![0; dimensions.cell_count()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for &seed in points {
        let Some(seed_index) = dimensions.point_index(seed) else {
            continue;
        };
        if visited.get(seed_index).as_deref() == Some(&true) {
            continue;
        }

        visited.set(seed_index, true);
        queue.push_back(seed);
        let mut members = Vec::new();

        while let Some(current) = queue.pop_front() {
            members.push(current);
            for neighbor in current.neighbors() {
                if !points.contains(neighbor) {
                    continue;
                }
                let Some(index) = dimensions.point_index(neighbor) else {
                    continue;
                };
                if visited.get(index).as_deref() == Some(&false) {
                    visited.set(index, true);
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(Component::from(members));
    }

    tracing::debug!(
        points = points.len(),
        components = components.len(),
        "labeled connected components"
    );

    components
}
