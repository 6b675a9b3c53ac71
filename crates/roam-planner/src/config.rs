//! Planner configuration and validation.

use roam_core::ConfigError;
use roam_space::EdgeBehavior;

/// Configuration for a [`MovementPlanner`](crate::MovementPlanner).
///
/// Plain data with sensible defaults. [`validate`](Self::validate) is
/// called by the planner before any graph is built; all values are
/// immutable once the planner is initialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Topology at the grid edges.
    ///
    /// Default: [`EdgeBehavior::Wrap`] (the world is a torus).
    pub edge: EdgeBehavior,

    /// Upper bound on search rounds per `find_path` call.
    ///
    /// Each round expands the current frontier. `None` means unbounded; the
    /// search then stops only when it finds the target or runs out of
    /// cells. Callers that need a time budget express it here rather
    /// than through wall-clock preemption.
    pub max_search_steps: Option<usize>,

    /// Upper bound on the number of cells walked while reconstructing
    /// a path from predecessor links.
    ///
    /// `None` uses the node count, which no valid path can exceed.
    pub path_walk_limit: Option<usize>,
}

impl PlannerConfig {
    /// Default edge behaviour.
    pub const DEFAULT_EDGE: EdgeBehavior = EdgeBehavior::Wrap;

    /// Check structural invariants.
    ///
    /// Limits, when present, must be non-zero: a zero round limit
    /// would fail every search and a zero walk limit could not even
    /// hold the target cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_search_steps == Some(0) {
            return Err(ConfigError::InvalidLimit {
                name: "max_search_steps",
                reason: "must be at least 1".into(),
            });
        }
        if let Some(limit) = self.path_walk_limit {
            if limit < 2 {
                return Err(ConfigError::InvalidLimit {
                    name: "path_walk_limit",
                    reason: format!("{limit} cannot hold a start and a target"),
                });
            }
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            edge: Self::DEFAULT_EDGE,
            max_search_steps: None,
            path_walk_limit: None,
        }
    }
}
