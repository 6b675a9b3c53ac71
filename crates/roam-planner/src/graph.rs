//! Connectivity builder: terrain grid to planning graph.
//!
//! [`NavGraph::build`] copies the terrain into an index-addressed node
//! array (one slot per cell, row-major) and precomputes, for each node,
//! the list of passable neighbours. The graph is immutable afterwards;
//! per-search state lives in the planner's scratch buffers, never here.

use indexmap::IndexSet;
use roam_core::{ConfigError, Coord, PlannerError, Terrain, TerrainGrid};
use roam_space::{EdgeBehavior, Lattice};
use smallvec::SmallVec;

/// One grid cell augmented with its passable neighbours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanningNode {
    coord: Coord,
    terrain: Terrain,
    neighbours: SmallVec<[usize; 8]>,
}

impl PlanningNode {
    /// Position of this node on the grid.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Terrain copied from the grid at build time (after any obstacle
    /// overlay was applied).
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Slots of the non-obstacle neighbours, in lattice offset order.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }
}

/// Index-addressed planning graph over a terrain grid.
///
/// Node `i` is the cell at `lattice.coord_of(i)`. Obstacle cells keep
/// their slot so index arithmetic stays uniform; they appear in no
/// other node's neighbour list.
#[derive(Clone, Debug)]
pub struct NavGraph {
    lattice: Lattice,
    nodes: Vec<PlanningNode>,
    adjacency_count: usize,
}

impl NavGraph {
    /// Build the graph from `grid`, marking every coordinate in
    /// `obstacles` as [`Terrain::Obstacle`] on top of the grid's own
    /// classification.
    ///
    /// # Errors
    ///
    /// - `EmptyGrid` / `DimensionTooLarge` for unusable dimensions
    /// - `CellOutOfBounds` if the grid or the overlay names a cell
    ///   outside `[0, width) x [0, height)`
    /// - `DuplicateCell` if the grid enumerates a cell twice
    /// - `MissingCells` if the grid enumerates fewer than
    ///   `width * height` cells
    pub fn build(
        grid: &dyn TerrainGrid,
        edge: EdgeBehavior,
        obstacles: &[Coord],
    ) -> Result<Self, ConfigError> {
        let lattice = Lattice::new(grid.width(), grid.height(), edge)?;
        let out_of_bounds = |coord: Coord| ConfigError::CellOutOfBounds {
            coord,
            width: lattice.width(),
            height: lattice.height(),
        };

        let mut slots: Vec<Option<Terrain>> = vec![None; lattice.cell_count()];
        let mut found = 0usize;
        for cell in grid.cells() {
            let i = lattice
                .index(cell.coord)
                .ok_or_else(|| out_of_bounds(cell.coord))?;
            if slots[i].replace(cell.terrain).is_some() {
                return Err(ConfigError::DuplicateCell { coord: cell.coord });
            }
            found += 1;
        }
        if found != lattice.cell_count() {
            return Err(ConfigError::MissingCells {
                expected: lattice.cell_count(),
                found,
            });
        }

        let overlay: IndexSet<Coord> = obstacles.iter().copied().collect();
        for &coord in &overlay {
            let i = lattice.index(coord).ok_or_else(|| out_of_bounds(coord))?;
            slots[i] = Some(Terrain::Obstacle);
        }

        // Every slot is filled: no duplicates and `found == cell_count`.
        let terrain: Vec<Terrain> = slots.into_iter().flatten().collect();

        let mut adjacency_count = 0;
        let nodes: Vec<PlanningNode> = terrain
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let neighbours: SmallVec<[usize; 8]> = lattice
                    .neighbour_indices(i)
                    .into_iter()
                    .filter(|&nb| terrain[nb].is_passable())
                    .collect();
                adjacency_count += neighbours.len();
                PlanningNode {
                    coord: lattice.coord_of(i),
                    terrain: t,
                    neighbours,
                }
            })
            .collect();

        log::info!(
            "built navigation graph {}x{}: {} nodes, {} adjacencies, {} overlay obstacles",
            lattice.width(),
            lattice.height(),
            nodes.len(),
            adjacency_count,
            overlay.len(),
        );

        Ok(Self {
            lattice,
            nodes,
            adjacency_count,
        })
    }

    /// The lattice the graph was built on.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Number of node slots (`width * height`, obstacles included).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Sum of all neighbour-list lengths.
    pub fn adjacency_count(&self) -> usize {
        self.adjacency_count
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[PlanningNode] {
        &self.nodes
    }

    /// The node in slot `index`, if any.
    pub fn node(&self, index: usize) -> Option<&PlanningNode> {
        self.nodes.get(index)
    }

    /// Slot of `coord`, or `None` outside the grid.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.lattice.index(coord)
    }

    /// Slot of `coord`, reporting out-of-range input as
    /// [`PlannerError::OutOfBounds`].
    pub fn check_bounds(&self, coord: Coord) -> Result<usize, PlannerError> {
        self.lattice.check_bounds(coord)
    }

    /// Coordinates of the passable neighbours of `coord`.
    pub fn neighbour_coords(&self, coord: Coord) -> Result<Vec<Coord>, PlannerError> {
        let i = self.check_bounds(coord)?;
        Ok(self.nodes[i]
            .neighbours
            .iter()
            .map(|&nb| self.nodes[nb].coord)
            .collect())
    }

    pub(crate) fn neighbours_of(&self, index: usize) -> &[usize] {
        &self.nodes[index].neighbours
    }

    pub(crate) fn terrain_of(&self, index: usize) -> Terrain {
        self.nodes[index].terrain
    }

    pub(crate) fn coord_of(&self, index: usize) -> Coord {
        self.nodes[index].coord
    }
}
