//! Search result: an ordered list of cells.

use roam_core::Coord;
use std::fmt;

/// A path returned by the planner, stored **goal-first**.
///
/// `cells()[0]` is the target and the last cell is the start. Walkers
/// that want to step from the start use [`iter_from_start`] or
/// [`to_start_first`]. A path always holds at least two cells, since
/// a query whose start equals its target is reported as an error.
///
/// [`iter_from_start`]: Path::iter_from_start
/// [`to_start_first`]: Path::to_start_first
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub(crate) fn from_goal_first(cells: Vec<Coord>) -> Self {
        debug_assert!(cells.len() >= 2, "paths hold a start and a target");
        Self { cells }
    }

    /// The target cell.
    pub fn goal(&self) -> Coord {
        self.cells[0]
    }

    /// The start cell.
    pub fn start(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, start and target included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for paths produced by the planner.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves from start to target.
    pub fn hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Cells in goal-first order.
    pub fn goal_first(&self) -> &[Coord] {
        &self.cells
    }

    /// Iterate from the start towards the target.
    pub fn iter_from_start(&self) -> impl DoubleEndedIterator<Item = Coord> + '_ {
        self.cells.iter().rev().copied()
    }

    /// Copy of the cells in start-first order.
    pub fn to_start_first(&self) -> Vec<Coord> {
        self.iter_from_start().collect()
    }

    /// Consume the path, returning the goal-first cell list.
    pub fn into_goal_first(self) -> Vec<Coord> {
        self.cells
    }

    /// `true` if the path passes through `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.iter_from_start().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
