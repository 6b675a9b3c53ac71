//! Error types for the Roam movement planner.
//!
//! Split by subsystem: [`ConfigError`] covers graph construction and
//! planner configuration, [`PlannerError`] covers queries against an
//! initialized planner. Both are plain values; nothing here is fatal.

use crate::id::Coord;
use std::error::Error;
use std::fmt;

/// Errors detected while building the planning graph or validating
/// a planner configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The planner was built without a terrain grid.
    MissingTerrain,
    /// The terrain grid has zero width or zero height.
    EmptyGrid,
    /// A grid dimension does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The offending value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `width * height` exceeds the number of cells a planner can
    /// address with 32-bit region ids.
    TooManyCells {
        /// `width * height`.
        cells: u64,
        /// Largest accepted cell count.
        max: u64,
    },
    /// A terrain cell or overlay obstacle lies outside the grid.
    CellOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The terrain grid enumerated the same cell twice.
    DuplicateCell {
        /// The repeated coordinate.
        coord: Coord,
    },
    /// The terrain grid enumerated fewer cells than `width * height`.
    MissingCells {
        /// `width * height`.
        expected: usize,
        /// Number of distinct cells actually enumerated.
        found: usize,
    },
    /// A configured limit is out of range.
    InvalidLimit {
        /// Name of the limit.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// `initialize` was called on a planner that already holds a graph.
    AlreadyInitialized,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTerrain => write!(f, "no terrain grid supplied"),
            Self::EmptyGrid => write!(f, "terrain grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { cells, max } => {
                write!(f, "grid has {cells} cells, maximum is {max}")
            }
            Self::CellOutOfBounds {
                coord,
                width,
                height,
            } => write!(
                f,
                "cell {coord} outside grid [0, {width}) x [0, {height})"
            ),
            Self::DuplicateCell { coord } => write!(f, "cell {coord} enumerated twice"),
            Self::MissingCells { expected, found } => {
                write!(f, "terrain grid enumerated {found} of {expected} cells")
            }
            Self::InvalidLimit { name, reason } => write!(f, "invalid {name}: {reason}"),
            Self::AlreadyInitialized => write!(f, "planner is already initialized"),
        }
    }
}

impl Error for ConfigError {}

/// Errors returned by planner queries.
///
/// [`NoPathFound`](Self::NoPathFound) and
/// [`DegenerateQuery`](Self::DegenerateQuery) together form the
/// "no path" signal; use [`is_no_path`](Self::is_no_path) when the
/// distinction does not matter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlannerError {
    /// Graph construction or configuration failed.
    Config(ConfigError),
    /// A query was made before `initialize` completed.
    NotInitialized,
    /// A query coordinate lies outside the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The search exhausted every reachable cell without meeting the target.
    NoPathFound {
        /// Search origin.
        start: Coord,
        /// Requested destination.
        target: Coord,
    },
    /// Start and target are the same passable cell.
    ///
    /// "Already there" is reported as a non-path rather than a
    /// one-element path.
    DegenerateQuery {
        /// The shared start/target cell.
        at: Coord,
    },
    /// The search hit its configured round limit before finishing.
    StepLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// Backtracking from the target did not reach the start within
    /// the configured walk limit.
    PathTooLong {
        /// The configured walk limit.
        limit: usize,
    },
}

impl PlannerError {
    /// `true` for both flavours of the "no path" signal.
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. } | Self::DegenerateQuery { .. })
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::NotInitialized => write!(f, "planner not initialized"),
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => write!(
                f,
                "coordinate {coord} out of bounds: [0, {width}) x [0, {height})"
            ),
            Self::NoPathFound { start, target } => {
                write!(f, "no path from {start} to {target}")
            }
            Self::DegenerateQuery { at } => write!(f, "start and target are both {at}"),
            Self::StepLimitExceeded { limit } => {
                write!(f, "search exceeded {limit} rounds")
            }
            Self::PathTooLong { limit } => {
                write!(f, "path reconstruction exceeded {limit} cells")
            }
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for PlannerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
