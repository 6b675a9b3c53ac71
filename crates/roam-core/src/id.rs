//! Strongly-typed identifiers and the [`Coord`] grid position.

use std::fmt;

/// A cell position on the terrain grid.
///
/// Axes are 0-based. Components are `i32` so that caller input lying
/// outside the grid (including negative values) can still be expressed
/// and rejected with a bounds error rather than wrapping silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column, `0..width`.
    pub x: i32,
    /// Row, `0..height`.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from its column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Identifies a living area produced by region segmentation.
///
/// `RegionId(0)` is reserved for the water super-region; land regions
/// are numbered from 1 in discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl RegionId {
    /// The single region holding every water cell.
    pub const WATER: RegionId = RegionId(0);

    /// `true` for the water super-region.
    pub fn is_water(self) -> bool {
        self == Self::WATER
    }

    /// Position of this region in the ordered living-area list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RegionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
