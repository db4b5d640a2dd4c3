//! Brute-force discrete Voronoi diagram over a raster grid
//!
//! Every cell is assigned to the nearest site by scanning all sites, which costs
//! `O(width * height * sites)`. This is intended for small grids and few sites;
//! there is no spatial acceleration structure.
//!
//! Boundary cells are found by comparing each cell with its right and lower
//! neighbour only. The last column and the last row have no such neighbour and
//! are therefore never marked, leaving a one-cell gap along those two edges.

use bitvec::prelude::*;
use ndarray::{Array2, Zip};

use crate::math::distance::nearest_site;
use crate::spatial::{GridDimensions, Point};

/// How the per-cell nearest-site scan is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterMode {
    /// Scan cells one after another on the calling thread
    #[default]
    Sequential,
    /// Scan cells on the rayon thread pool
    Parallel,
}

/// Ownership map and boundary cells of a rasterized Voronoi diagram
#[derive(Debug, Clone)]
pub struct VoronoiRaster {
    dimensions: GridDimensions,
    /// Index of the owning site per cell, indexed `[y, x]`
    ownership: Array2<usize>,
    /// One bit per cell in row-major order
    boundary: BitVec,
}

impl VoronoiRaster {
    /// Assign every cell to its nearest site and extract boundary cells
    ///
    /// Returns `None` when `sites` is empty; there is no diagram to draw.
    /// Equidistant sites resolve to the lowest index in both modes.
    pub fn rasterize(
        sites: &[[f64; 2]],
        dimensions: GridDimensions,
        mode: RasterMode,
    ) -> Option<Self> {
        if sites.is_empty() {
            return None;
        }

        let shape = (dimensions.height(), dimensions.width());
        let ownership = match mode {
            RasterMode::Sequential => {
                Array2::from_shape_fn(shape, |(y, x)| owner_of(x, y, sites))
            }
            RasterMode::Parallel => {
                let mut ownership = Array2::zeros(shape);
                Zip::indexed(&mut ownership).par_for_each(|(y, x), owner| {
                    *owner = owner_of(x, y, sites);
                });
                ownership
            }
        };

        let boundary = extract_boundary(&ownership, dimensions);

        tracing::debug!(
            sites = sites.len(),
            width = dimensions.width(),
            height = dimensions.height(),
            boundary_cells = boundary.count_ones(),
            "rasterized voronoi diagram"
        );

        Some(Self {
            dimensions,
            ownership,
            boundary,
        })
    }

    /// Grid the diagram covers
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Owning site index of `(x, y)`, or `None` outside the grid
    pub fn owner(&self, x: usize, y: usize) -> Option<usize> {
        self.ownership.get([y, x]).copied()
    }

    /// Full ownership map, indexed `[y, x]`
    pub const fn ownership(&self) -> &Array2<usize> {
        &self.ownership
    }

    /// Check whether `(x, y)` is a boundary cell
    pub fn is_boundary(&self, x: usize, y: usize) -> bool {
        x < self.dimensions.width()
            && y < self.dimensions.height()
            && self
                .boundary
                .get(self.dimensions.index(x, y))
                .as_deref()
                == Some(&true)
    }

    /// Number of boundary cells
    pub fn boundary_len(&self) -> usize {
        self.boundary.count_ones()
    }

    /// Boundary cells in row-major order
    pub fn boundary_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.dimensions.width();
        self.boundary
            .iter_ones()
            .map(move |index| Point::new((index % width) as i64, (index / width) as i64))
    }
}

fn owner_of(x: usize, y: usize, sites: &[[f64; 2]]) -> usize {
    nearest_site(x as f64, y as f64, sites).unwrap_or(0)
}

// A cell is on the boundary when its right or lower neighbour has another owner
fn extract_boundary(ownership: &Array2<usize>, dimensions: GridDimensions) -> BitVec {
    let mut boundary = bitvec![0; dimensions.cell_count()];
    let width = dimensions.width();
    let height = dimensions.height();

    for y in 0..height.saturating_sub(1) {
        for x in 0..width.saturating_sub(1) {
            let owner = ownership.get([y, x]);
            let right = ownership.get([y, x + 1]);
            let below = ownership.get([y + 1, x]);
            if owner != right || owner != below {
                boundary.set(dimensions.index(x, y), true);
            }
        }
    }

    boundary
}
