//! Rectangular lattice with an 8-connected neighbourhood.

use crate::edge::EdgeBehavior;
use roam_core::{ConfigError, Coord, PlannerError};
use smallvec::SmallVec;

/// The eight neighbour offsets `(dx, dy)`, column-major.
///
/// The order is part of the contract: neighbour lists, and therefore
/// search tie-breaking, follow it.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `width x height` square lattice.
///
/// Cells are addressed either by [`Coord`] or by their row-major linear
/// index `y * width + x`. Neighbours are the 8 surrounding cells;
/// boundary handling follows the configured [`EdgeBehavior`]. Under
/// [`EdgeBehavior::Wrap`] the lattice is a torus.
///
/// Neighbour lists never contain the cell itself and never contain the
/// same cell twice, which matters on lattices narrower than three cells
/// where several wrapped offsets land on the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
}

impl Lattice {
    /// Largest accepted dimension: coordinates are `i32` per axis.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Largest accepted `width * height`: every cell, and therefore
    /// every region, must be addressable by a `u32`.
    pub const MAX_CELLS: u64 = u32::MAX as u64;

    /// Create a lattice.
    ///
    /// Returns `Err(ConfigError::EmptyGrid)` if either dimension is 0,
    /// `Err(ConfigError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(ConfigError::TooManyCells)`
    /// if their product exceeds [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(width: u32, height: u32, edge: EdgeBehavior) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let cells = width as u64 * height as u64;
        if cells > Self::MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                cells,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self {
            width,
            height,
            edge,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Edge behaviour.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if `coord` lies inside the lattice.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Row-major linear index of `coord`, or `None` outside the lattice.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Like [`index`](Self::index), but reports out-of-range input as
    /// [`PlannerError::OutOfBounds`].
    pub fn check_bounds(&self, coord: Coord) -> Result<usize, PlannerError> {
        self.index(coord).ok_or(PlannerError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })
    }

    /// Inverse of [`index`](Self::index).
    ///
    /// `index` must be below [`cell_count`](Self::cell_count).
    pub fn coord_of(&self, index: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }

    /// 8-connected neighbours of `coord`, in [`OFFSETS_8`] order.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        let mut result: SmallVec<[Coord; 8]> = SmallVec::new();
        for (dx, dy) in OFFSETS_8 {
            let nx = resolve_axis(coord.x + dx, self.width, self.edge);
            let ny = resolve_axis(coord.y + dy, self.height, self.edge);
            if let (Some(nx), Some(ny)) = (nx, ny) {
                let nb = Coord::new(nx, ny);
                if nb != coord && !result.contains(&nb) {
                    result.push(nb);
                }
            }
        }
        result
    }

    /// Linear indices of the neighbours of the cell at `index`.
    pub fn neighbour_indices(&self, index: usize) -> SmallVec<[usize; 8]> {
        self.neighbours(self.coord_of(index))
            .into_iter()
            .filter_map(|nb| self.index(nb))
            .collect()
    }

    /// Chebyshev distance: the fewest 8-connected hops between two
    /// cells, ignoring terrain.
    pub fn distance(&self, a: Coord, b: Coord) -> u32 {
        let dx = axis_distance(a.x, b.x, self.width, self.edge);
        let dy = axis_distance(a.y, b.y, self.height, self.edge);
        dx.max(dy)
    }

    /// All cells in row-major order: `(0,0), (1,0), ..., (w-1,h-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count()).map(move |i| self.coord_of(i))
    }
}

/// Resolve a single axis value under the given edge behaviour.
/// Returns `None` for out-of-range values under `Absorb`.
fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i64;
    let v = val as i64;
    if v >= 0 && v < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some((((v % n) + n) % n) as i32),
    }
}

/// 1D distance along a single axis, accounting for wrap.
fn axis_distance(a: i32, b: i32, len: u32, edge: EdgeBehavior) -> u32 {
    let diff = (a as i64 - b as i64).unsigned_abs() as u32;
    match edge {
        EdgeBehavior::Wrap => diff.min(len - diff),
        EdgeBehavior::Absorb => diff,
    }
}
