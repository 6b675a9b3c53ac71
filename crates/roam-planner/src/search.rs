//! Two-tier breadth-first search.
//!
//! The search first floods a *primary area* (the whole grid, or the
//! land region the start stands in). Nodes outside it are parked in a
//! secondary set. Once a round inside the primary area discovers
//! nothing new, the search switches permanently to the secondary set
//! and continues as a plain BFS from there. Land creatures therefore
//! prefer paths that stay on their own landmass, and only cross water
//! when the landmass cannot reach the target.

use crate::graph::NavGraph;
use crate::metrics::SearchMetrics;
use crate::path::Path;
use crate::region::LivingAreas;
use crate::scratch::SearchScratch;
use roam_core::{Coord, PlannerError, RegionId};
use std::mem;

/// Travel constraint for a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TravelMode {
    /// Water and ground are equally good.
    #[default]
    Any,
    /// Stay on the start's landmass while it can still make progress.
    ///
    /// A start in water searches the whole grid; a start on an
    /// obstacle has no landmass and searches everything as secondary.
    LandOnly,
}

impl TravelMode {
    /// Map the boolean "land only" flag to a mode.
    pub fn from_land_only(land_only: bool) -> Self {
        if land_only {
            Self::LandOnly
        } else {
            Self::Any
        }
    }
}

/// The set of nodes a search explores before spilling over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PrimaryArea {
    Everything,
    Region(RegionId),
    Nothing,
}

impl PrimaryArea {
    pub(crate) fn for_start(mode: TravelMode, start_region: Option<RegionId>) -> Self {
        match (mode, start_region) {
            (TravelMode::Any, _) => Self::Everything,
            (TravelMode::LandOnly, Some(id)) if id.is_water() => Self::Everything,
            (TravelMode::LandOnly, Some(id)) => Self::Region(id),
            (TravelMode::LandOnly, None) => Self::Nothing,
        }
    }

    fn contains(self, areas: &LivingAreas, index: usize) -> bool {
        match self {
            Self::Everything => true,
            Self::Region(id) => areas.region_of(index) == Some(id),
            Self::Nothing => false,
        }
    }
}

/// Bounds applied to one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchLimits {
    /// Maximum expansion rounds; `None` is unbounded.
    pub(crate) max_steps: Option<usize>,
    /// Maximum cells in a reconstructed path.
    pub(crate) walk_limit: usize,
}

/// Run one search from `start` to `target` (both already bounds-checked
/// slots, distinct unless `start` is an obstacle).
#[allow(clippy::too_many_arguments)]
pub(crate) fn two_tier_search(
    graph: &NavGraph,
    areas: &LivingAreas,
    scratch: &mut SearchScratch,
    start: usize,
    target: usize,
    primary: PrimaryArea,
    limits: SearchLimits,
    metrics: &mut SearchMetrics,
) -> Result<Path, PlannerError> {
    scratch.reset();
    let SearchScratch {
        predecessors,
        seen,
        open,
        secondary,
        next,
    } = scratch;

    seen.insert(start);
    for &nb in graph.neighbours_of(start) {
        if seen.insert(nb) {
            predecessors[nb] = Some(start);
            metrics.discovered += 1;
            if primary.contains(areas, nb) {
                open.push(nb);
            } else {
                secondary.push(nb);
            }
        }
    }

    let mut spilled = false;
    loop {
        if open.is_empty() && secondary.is_empty() {
            debug_assert_eq!(seen.count(), metrics.discovered + 1);
            metrics.spilled = spilled;
            return Err(PlannerError::NoPathFound {
                start: graph.coord_of(start),
                target: graph.coord_of(target),
            });
        }
        if open.contains(&target) {
            metrics.spilled = spilled;
            return reconstruct(graph, predecessors, target, limits.walk_limit);
        }
        if let Some(limit) = limits.max_steps {
            if metrics.rounds >= limit {
                metrics.spilled = spilled;
                return Err(PlannerError::StepLimitExceeded { limit });
            }
        }

        let mut new_primary = 0usize;
        for &current in open.iter() {
            for &nb in graph.neighbours_of(current) {
                if !seen.insert(nb) {
                    continue;
                }
                predecessors[nb] = Some(current);
                metrics.discovered += 1;
                if spilled || primary.contains(areas, nb) {
                    next.push(nb);
                    new_primary += 1;
                } else {
                    secondary.push(nb);
                }
            }
        }
        metrics.expanded += open.len();
        metrics.rounds += 1;
        open.clear();

        if !spilled && new_primary == 0 {
            spilled = true;
            log::trace!(
                "search {} -> {} left its primary area after {} rounds ({} secondary nodes)",
                graph.coord_of(start),
                graph.coord_of(target),
                metrics.rounds,
                secondary.len(),
            );
            mem::swap(open, secondary);
        } else {
            mem::swap(open, next);
        }
    }
}

/// Walk predecessor links from `target` back to the start.
fn reconstruct(
    graph: &NavGraph,
    predecessors: &[Option<usize>],
    target: usize,
    walk_limit: usize,
) -> Result<Path, PlannerError> {
    let mut cells: Vec<Coord> = vec![graph.coord_of(target)];
    let mut current = target;
    while let Some(prev) = predecessors[current] {
        if cells.len() >= walk_limit {
            return Err(PlannerError::PathTooLong { limit: walk_limit });
        }
        cells.push(graph.coord_of(prev));
        current = prev;
    }
    Ok(Path::from_goal_first(cells))
}
