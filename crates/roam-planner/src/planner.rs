//! The movement planner facade.
//!
//! [`MovementPlanner`] owns the planning graph, the living areas and the
//! search scratch buffers. It is created from a [`PlannerConfig`],
//! initialized exactly once from a terrain grid, and then answers any
//! number of [`find_path`](MovementPlanner::find_path) queries.

use crate::config::PlannerConfig;
use crate::graph::NavGraph;
use crate::metrics::SearchMetrics;
use crate::path::Path;
use crate::region::LivingAreas;
use crate::scratch::SearchScratch;
use crate::search::{two_tier_search, PrimaryArea, SearchLimits, TravelMode};
use roam_core::{ConfigError, Coord, PlannerError, RegionId, TerrainGrid};
use roam_space::EdgeBehavior;
use std::time::Instant;

/// Summary of a successful initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitReport {
    /// Node slots in the graph (`width * height`).
    pub node_count: usize,
    /// Sum of all neighbour-list lengths.
    pub adjacency_count: usize,
    /// Cells in the water region.
    pub water_cells: usize,
    /// Number of land regions.
    pub land_regions: usize,
}

#[derive(Clone, Debug)]
struct PlannerState {
    graph: NavGraph,
    areas: LivingAreas,
    scratch: SearchScratch,
}

/// Path planner over a terrain grid.
///
/// `find_path` takes `&mut self` because every search reuses the
/// planner's scratch buffers. Callers that search concurrently clone
/// one planner per thread.
///
/// # Examples
///
/// ```
/// use roam_core::{Coord, Terrain, TerrainMap};
/// use roam_planner::{MovementPlanner, PlannerConfig, TravelMode};
///
/// let map = TerrainMap::new(3, 3, Terrain::Ground);
/// let mut planner = MovementPlanner::new(PlannerConfig::default());
/// planner.initialize(&map).unwrap();
///
/// // (2, 2) is a diagonal neighbour of (0, 0) on the torus.
/// let path = planner
///     .find_path(Coord::new(0, 0), Coord::new(2, 2), TravelMode::Any)
///     .unwrap();
/// assert_eq!(path.goal_first(), &[Coord::new(2, 2), Coord::new(0, 0)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MovementPlanner {
    config: PlannerConfig,
    state: Option<PlannerState>,
    last_metrics: SearchMetrics,
}

impl MovementPlanner {
    /// Create an uninitialized planner.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            state: None,
            last_metrics: SearchMetrics::default(),
        }
    }

    /// Start a [`PlannerBuilder`].
    pub fn builder<'a>() -> PlannerBuilder<'a> {
        PlannerBuilder {
            terrain: None,
            obstacles: Vec::new(),
            config: PlannerConfig::default(),
        }
    }

    /// Build the planning graph and living areas from `grid`.
    ///
    /// # Errors
    ///
    /// `ConfigError::AlreadyInitialized` on a second call, otherwise any
    /// configuration or grid error from [`PlannerConfig::validate`] and
    /// [`NavGraph::build`], wrapped in [`PlannerError::Config`]. A
    /// failed call leaves the planner uninitialized.
    pub fn initialize(&mut self, grid: &dyn TerrainGrid) -> Result<InitReport, PlannerError> {
        self.initialize_with_obstacles(grid, &[])
    }

    /// Like [`initialize`](Self::initialize), additionally marking every
    /// coordinate in `obstacles` as impassable.
    pub fn initialize_with_obstacles(
        &mut self,
        grid: &dyn TerrainGrid,
        obstacles: &[Coord],
    ) -> Result<InitReport, PlannerError> {
        if self.state.is_some() {
            return Err(ConfigError::AlreadyInitialized.into());
        }
        let built = self
            .config
            .validate()
            .and_then(|()| NavGraph::build(grid, self.config.edge, obstacles))
            .and_then(|graph| LivingAreas::segment(&graph).map(|areas| (graph, areas)));
        let (graph, areas) = match built {
            Ok(built) => built,
            Err(e) => {
                log::warn!("planner initialization failed: {e}");
                return Err(e.into());
            }
        };
        let report = InitReport {
            node_count: graph.node_count(),
            adjacency_count: graph.adjacency_count(),
            water_cells: areas.water().len(),
            land_regions: areas.land_count(),
        };
        let scratch = SearchScratch::new(graph.node_count());
        self.state = Some(PlannerState {
            graph,
            areas,
            scratch,
        });
        Ok(report)
    }

    /// Shortest path from `start` to `target`, goal-first.
    ///
    /// # Errors
    ///
    /// - `NotInitialized` before [`initialize`](Self::initialize)
    /// - `OutOfBounds` if either coordinate lies outside the grid
    /// - `DegenerateQuery` if `start == target` on a passable cell
    /// - `NoPathFound` if the target cannot be reached
    /// - `StepLimitExceeded` / `PathTooLong` when a configured limit
    ///   is hit
    pub fn find_path(
        &mut self,
        start: Coord,
        target: Coord,
        mode: TravelMode,
    ) -> Result<Path, PlannerError> {
        let began = Instant::now();
        let mut metrics = SearchMetrics::default();
        let result = self.run_search(start, target, mode, &mut metrics);

        metrics.path_len = result.as_ref().map_or(0, Path::len);
        metrics.elapsed_us = u64::try_from(began.elapsed().as_micros()).unwrap_or(u64::MAX);
        match &result {
            Ok(path) => log::debug!(
                "path {start} -> {target} ({mode:?}): {} hops, {} rounds, {} us",
                path.hops(),
                metrics.rounds,
                metrics.elapsed_us,
            ),
            Err(e) => log::debug!(
                "path {start} -> {target} ({mode:?}) failed after {} rounds: {e}",
                metrics.rounds,
            ),
        }
        self.last_metrics = metrics;
        result
    }

    /// Validate the query and run the search, recording into `metrics`.
    fn run_search(
        &mut self,
        start: Coord,
        target: Coord,
        mode: TravelMode,
        metrics: &mut SearchMetrics,
    ) -> Result<Path, PlannerError> {
        let state = self.state.as_mut().ok_or(PlannerError::NotInitialized)?;
        let s = state.graph.check_bounds(start)?;
        let t = state.graph.check_bounds(target)?;

        if s == t && state.graph.terrain_of(s).is_passable() {
            Err(PlannerError::DegenerateQuery { at: start })
        } else if s != t && !state.graph.terrain_of(t).is_passable() {
            // Obstacles are nobody's neighbour.
            Err(PlannerError::NoPathFound { start, target })
        } else {
            let primary = PrimaryArea::for_start(mode, state.areas.region_of(s));
            let limits = SearchLimits {
                max_steps: self.config.max_search_steps,
                walk_limit: self
                    .config
                    .path_walk_limit
                    .unwrap_or(state.graph.node_count()),
            };
            two_tier_search(
                &state.graph,
                &state.areas,
                &mut state.scratch,
                s,
                t,
                primary,
                limits,
                metrics,
            )
        }
    }

    /// Every living area as a list of coordinates. Index 0 is the water
    /// region; land regions follow in discovery order.
    pub fn living_areas(&self) -> Result<Vec<Vec<Coord>>, PlannerError> {
        let state = self.state()?;
        Ok(state.areas.to_coords(&state.graph))
    }

    /// Region of `coord`, or `None` if it is an obstacle.
    pub fn region_of(&self, coord: Coord) -> Result<Option<RegionId>, PlannerError> {
        let state = self.state()?;
        let i = state.graph.check_bounds(coord)?;
        Ok(state.areas.region_of(i))
    }

    /// Number of node slots.
    pub fn node_count(&self) -> Result<usize, PlannerError> {
        Ok(self.state()?.graph.node_count())
    }

    /// Sum of all neighbour-list lengths.
    pub fn adjacency_count(&self) -> Result<usize, PlannerError> {
        Ok(self.state()?.graph.adjacency_count())
    }

    /// The planning graph.
    pub fn graph(&self) -> Result<&NavGraph, PlannerError> {
        Ok(&self.state()?.graph)
    }

    /// The living areas with their membership table.
    pub fn regions(&self) -> Result<&LivingAreas, PlannerError> {
        Ok(&self.state()?.areas)
    }

    /// Metrics of the most recent `find_path` call.
    pub fn last_metrics(&self) -> &SearchMetrics {
        &self.last_metrics
    }

    /// `true` once [`initialize`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// The planner's configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn state(&self) -> Result<&PlannerState, PlannerError> {
        self.state.as_ref().ok_or(PlannerError::NotInitialized)
    }
}

/// Builder for an initialized [`MovementPlanner`].
///
/// Required: `terrain`. Everything else defaults to
/// [`PlannerConfig::default`] with no extra obstacles.
pub struct PlannerBuilder<'a> {
    terrain: Option<&'a dyn TerrainGrid>,
    obstacles: Vec<Coord>,
    config: PlannerConfig,
}

impl<'a> PlannerBuilder<'a> {
    /// Set the terrain grid to plan over.
    pub fn terrain(mut self, grid: &'a dyn TerrainGrid) -> Self {
        self.terrain = Some(grid);
        self
    }

    /// Add obstacle coordinates on top of the grid's own terrain.
    pub fn obstacles(mut self, obstacles: impl IntoIterator<Item = Coord>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Set the edge behaviour. Default: [`EdgeBehavior::Wrap`].
    pub fn edge_behavior(mut self, edge: EdgeBehavior) -> Self {
        self.config.edge = edge;
        self
    }

    /// Bound the number of search rounds per query.
    pub fn max_search_steps(mut self, limit: usize) -> Self {
        self.config.max_search_steps = Some(limit);
        self
    }

    /// Bound the number of cells walked during path reconstruction.
    pub fn path_walk_limit(mut self, limit: usize) -> Self {
        self.config.path_walk_limit = Some(limit);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Create and initialize the planner.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingTerrain` if no terrain was set, otherwise
    /// whatever [`MovementPlanner::initialize_with_obstacles`] reports.
    pub fn build(self) -> Result<MovementPlanner, PlannerError> {
        let grid = self.terrain.ok_or(ConfigError::MissingTerrain)?;
        let mut planner = MovementPlanner::new(self.config);
        let report = planner.initialize_with_obstacles(grid, &self.obstacles)?;
        log::info!(
            "planner ready: {} nodes, {} water cells, {} land regions",
            report.node_count,
            report.water_cells,
            report.land_regions,
        );
        Ok(planner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roam_core::{Terrain, TerrainMap};
    use roam_test_utils::terrain_from_ascii;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn planner(rows: &[&str]) -> MovementPlanner {
        let mut p = MovementPlanner::new(PlannerConfig::default());
        p.initialize(&terrain_from_ascii(rows)).unwrap();
        p
    }

    #[test]
    fn report_counts_areas() {
        let mut p = MovementPlanner::default();
        let report = p
            .initialize(&terrain_from_ascii(&["..~", "~~~", "#.."]))
            .unwrap();
        assert_eq!(report.node_count, 9);
        assert_eq!(report.water_cells, 4);
        assert_eq!(report.land_regions, 1);
        assert!(p.is_initialized());
    }

    #[test]
    fn second_initialize_rejected() {
        let map = TerrainMap::new(2, 2, Terrain::Ground);
        let mut p = MovementPlanner::default();
        p.initialize(&map).unwrap();
        assert_eq!(
            p.initialize(&map).unwrap_err(),
            PlannerError::Config(ConfigError::AlreadyInitialized)
        );
    }

    #[test]
    fn failed_initialize_leaves_planner_empty() {
        let mut p = MovementPlanner::default();
        let err = p
            .initialize(&TerrainMap::new(0, 0, Terrain::Ground))
            .unwrap_err();
        assert_eq!(err, PlannerError::Config(ConfigError::EmptyGrid));
        assert!(!p.is_initialized());
        // A later valid grid is still accepted.
        assert!(p.initialize(&TerrainMap::new(1, 1, Terrain::Ground)).is_ok());
    }

    #[test]
    fn invalid_config_rejected_at_initialize() {
        let mut p = MovementPlanner::new(PlannerConfig {
            max_search_steps: Some(0),
            ..Default::default()
        });
        let err = p
            .initialize(&TerrainMap::new(2, 2, Terrain::Ground))
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Config(ConfigError::InvalidLimit { .. })
        ));
    }

    #[test]
    fn queries_before_initialize() {
        let mut p = MovementPlanner::default();
        assert_eq!(
            p.find_path(c(0, 0), c(1, 0), TravelMode::Any).unwrap_err(),
            PlannerError::NotInitialized
        );
        assert_eq!(p.living_areas().unwrap_err(), PlannerError::NotInitialized);
        assert_eq!(p.node_count().unwrap_err(), PlannerError::NotInitialized);
        assert_eq!(p.region_of(c(0, 0)).unwrap_err(), PlannerError::NotInitialized);
    }

    #[test]
    fn degenerate_query_is_no_path() {
        let mut p = planner(&["...", "...", "..."]);
        let err = p.find_path(c(1, 1), c(1, 1), TravelMode::Any).unwrap_err();
        assert_eq!(err, PlannerError::DegenerateQuery { at: c(1, 1) });
        assert!(err.is_no_path());
    }

    #[test]
    fn degenerate_query_on_obstacle_searches() {
        let mut p = planner(&["...", ".#.", "..."]);
        let err = p.find_path(c(1, 1), c(1, 1), TravelMode::Any).unwrap_err();
        assert_eq!(
            err,
            PlannerError::NoPathFound {
                start: c(1, 1),
                target: c(1, 1)
            }
        );
        assert_eq!(p.last_metrics().discovered, 8);
    }

    #[test]
    fn start_on_obstacle_can_leave_it() {
        let mut p = planner(&["....", ".#..", "...."]);
        let path = p.find_path(c(1, 1), c(3, 1), TravelMode::LandOnly).unwrap();
        assert_eq!(path.start(), c(1, 1));
        assert_eq!(path.goal(), c(3, 1));
        // Empty primary area: the search spills immediately.
        assert!(p.last_metrics().spilled);
    }

    #[test]
    fn out_of_bounds_reported() {
        let mut p = planner(&["...", "..."]);
        assert_eq!(
            p.find_path(c(0, 0), c(3, 0), TravelMode::Any).unwrap_err(),
            PlannerError::OutOfBounds {
                coord: c(3, 0),
                width: 3,
                height: 2
            }
        );
        assert!(matches!(
            p.find_path(c(0, -1), c(1, 1), TravelMode::Any),
            Err(PlannerError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn metrics_track_last_search() {
        let mut p = planner(&[".....", ".....", "....."]);
        let path = p.find_path(c(0, 0), c(2, 1), TravelMode::Any).unwrap();
        let m = p.last_metrics().clone();
        assert_eq!(m.path_len, path.len());
        assert_eq!(m.rounds, 1);
        assert!(m.discovered >= 8);

        let _ = p.find_path(c(0, 0), c(0, 0), TravelMode::Any);
        assert_eq!(p.last_metrics().path_len, 0);
        assert_eq!(p.last_metrics().rounds, 0);
    }

    #[test]
    fn rejected_query_resets_metrics() {
        let mut p = MovementPlanner::builder()
            .terrain(&terrain_from_ascii(&["....."]))
            .edge_behavior(EdgeBehavior::Absorb)
            .build()
            .unwrap();
        p.find_path(c(0, 0), c(4, 0), TravelMode::Any).unwrap();
        assert_eq!(p.last_metrics().path_len, 5);
        assert_eq!(p.last_metrics().rounds, 3);

        let err = p.find_path(c(0, 0), c(9, 0), TravelMode::Any).unwrap_err();
        assert!(matches!(err, PlannerError::OutOfBounds { .. }));
        assert_eq!(p.last_metrics().path_len, 0);
        assert_eq!(p.last_metrics().rounds, 0);
        assert_eq!(p.last_metrics().discovered, 0);
    }

    #[test]
    fn uninitialized_query_resets_metrics() {
        let mut p = MovementPlanner::default();
        p.last_metrics.rounds = 7;
        p.last_metrics.path_len = 4;
        assert_eq!(
            p.find_path(c(0, 0), c(1, 0), TravelMode::Any).unwrap_err(),
            PlannerError::NotInitialized
        );
        assert_eq!(p.last_metrics().rounds, 0);
        assert_eq!(p.last_metrics().path_len, 0);
    }

    #[test]
    fn builder_requires_terrain() {
        let err = MovementPlanner::builder().build().unwrap_err();
        assert_eq!(err, PlannerError::Config(ConfigError::MissingTerrain));
    }

    #[test]
    fn builder_applies_settings() {
        let map = TerrainMap::new(4, 4, Terrain::Ground);
        let mut p = MovementPlanner::builder()
            .terrain(&map)
            .obstacles([c(1, 1), c(2, 2)])
            .edge_behavior(EdgeBehavior::Absorb)
            .max_search_steps(10)
            .path_walk_limit(16)
            .build()
            .unwrap();
        assert_eq!(p.config().edge, EdgeBehavior::Absorb);
        assert_eq!(p.config().max_search_steps, Some(10));
        assert_eq!(p.region_of(c(1, 1)).unwrap(), None);
        assert_eq!(p.region_of(c(0, 0)).unwrap(), Some(RegionId(1)));
        let path = p.find_path(c(0, 0), c(3, 3), TravelMode::Any).unwrap();
        assert!(!path.contains(c(1, 1)));
        assert!(!path.contains(c(2, 2)));
    }

    #[test]
    fn clones_search_independently() {
        let mut a = planner(&["....", "....", "...."]);
        let mut b = a.clone();
        let pa = a.find_path(c(0, 0), c(2, 1), TravelMode::Any).unwrap();
        let pb = b.find_path(c(0, 0), c(2, 1), TravelMode::Any).unwrap();
        assert_eq!(pa, pb);
    }
}
