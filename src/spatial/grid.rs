//! Grid dimensions, integer points and bounds-filtered point sets
//!
//! The grid is a dense `width x height` raster addressed by `(x, y)` with
//! `0 <= x < width` and `0 <= y < height`. Cells are stored row-major, so the
//! flat index of `(x, y)` is `y * width + x`. Points outside the grid never
//! enter a [`PointSet`].

use bitvec::prelude::*;

use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};

/// Offsets of the 8 neighbours of a cell, row by row
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Validated size of the raster grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    width: usize,
    height: usize,
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GridDimensions {
    /// Create grid dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"grid dimensions must be positive",
                ));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("grid dimensions are limited to {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(Self { width, height })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check whether a point lies inside `[0, width) x [0, height)`
    pub fn contains(&self, point: Point) -> bool {
        usize::try_from(point.x).is_ok_and(|x| x < self.width)
            && usize::try_from(point.y).is_ok_and(|y| y < self.height)
    }

    /// Row-major index of an in-bounds cell
    pub const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Row-major index of a point, or `None` when it lies outside the grid
    pub fn point_index(&self, point: Point) -> Option<usize> {
        self.contains(point)
            .then(|| self.index(point.x as usize, point.y as usize))
    }
}

/// Integer coordinate pair
///
/// Coordinates are signed so that raw input, including points left of or
/// below the grid, can be represented before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i64,
    /// Vertical coordinate (grid `y = 0` is the bottom image row)
    pub y: i64,
}

impl Point {
    /// Create a point
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 surrounding points, diagonals included
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Self::new(self.x + dx, self.y + dy))
    }

    /// Check 8-adjacency (distinct points differing by at most 1 on each axis)
    pub const fn is_adjacent(&self, other: &Self) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx + dy) > 0
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Unique in-bounds points in first-occurrence order
///
/// Membership is tracked with one bit per grid cell, so lookups during flood
/// fill are O(1) and duplicates collapse on insertion.
#[derive(Debug, Clone)]
pub struct PointSet {
    dimensions: GridDimensions,
    points: Vec<Point>,
    occupancy: BitVec,
}

impl PointSet {
    /// Create an empty point set over the given grid
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            points: Vec::new(),
            occupancy: bitvec![0; dimensions.cell_count()],
        }
    }

    /// Build a point set, dropping out-of-bounds points and duplicates
    pub fn from_points<I>(points: I, dimensions: GridDimensions) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut set = Self::new(dimensions);
        for point in points {
            set.insert(point);
        }
        set
    }

    /// Insert a point, returning `true` if it was in bounds and not yet present
    pub fn insert(&mut self, point: Point) -> bool {
        let Some(index) = self.dimensions.point_index(point) else {
            return false;
        };
        if self.occupancy.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.occupancy.set(index, true);
        self.points.push(point);
        true
    }

    /// Test membership
    pub fn contains(&self, point: Point) -> bool {
        self.dimensions
            .point_index(point)
            .is_some_and(|index| self.occupancy.get(index).as_deref() == Some(&true))
    }

    /// Number of unique points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Test if the set holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterate points in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Grid the set is bounded by
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
