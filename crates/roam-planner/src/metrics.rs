//! Per-search measurements.

/// Timing and counts from the most recent `find_path` call.
///
/// Populated whether the search succeeded or failed; the planner keeps
/// only the latest value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// BFS rounds completed before the search stopped.
    pub rounds: usize,
    /// Nodes whose neighbours were expanded.
    pub expanded: usize,
    /// Nodes discovered (assigned a predecessor), start excluded.
    pub discovered: usize,
    /// Whether the search left the primary area and continued in the
    /// secondary one.
    pub spilled: bool,
    /// Cells in the returned path, or 0 if none was returned.
    pub path_len: usize,
    /// Wall-clock time of the whole call in microseconds.
    pub elapsed_us: u64,
}
