//! Region segmenter: partition the planning graph into living areas.
//!
//! Region 0 collects every water node. Each remaining region is one
//! connected component of the ground sub-graph, found by a queue-based
//! flood fill over ground-to-ground edges. Obstacles belong to no
//! region.
//!
//! Nodes are visited in row-major order, so identical terrain always
//! produces the same ordered list of regions with the same cell order
//! inside each. The world subsystem relies on this when it places
//! creatures "into region N".

use crate::graph::NavGraph;
use roam_core::{ConfigError, Coord, RegionId, Terrain};
use std::collections::VecDeque;

/// One living area: an ordered set of node slots.
///
/// For land regions the order is flood-fill discovery order starting
/// from the region's first cell in row-major order. For the water
/// region it is row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LivingArea {
    id: RegionId,
    cells: Vec<usize>,
}

impl LivingArea {
    /// Identifier of this area.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Node slots of the member cells.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Number of member cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the area has no cells (only possible for water).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The ordered list of living areas plus a per-node membership table.
#[derive(Clone, Debug)]
pub struct LivingAreas {
    areas: Vec<LivingArea>,
    membership: Vec<Option<RegionId>>,
}

impl LivingAreas {
    /// Segment `graph` into living areas.
    ///
    /// # Errors
    ///
    /// `TooManyCells` if the region count does not fit a [`RegionId`].
    /// [`Lattice`](roam_space::Lattice) already rejects grids that
    /// large, so this only fires for a graph built around that check.
    pub fn segment(graph: &NavGraph) -> Result<Self, ConfigError> {
        let n = graph.node_count();
        let mut membership: Vec<Option<RegionId>> = vec![None; n];

        let water: Vec<usize> = (0..n)
            .filter(|&i| graph.terrain_of(i) == Terrain::Water)
            .collect();
        for &i in &water {
            membership[i] = Some(RegionId::WATER);
        }
        let mut areas = vec![LivingArea {
            id: RegionId::WATER,
            cells: water,
        }];

        let mut queue = VecDeque::new();
        for seed in 0..n {
            if graph.terrain_of(seed) != Terrain::Ground || membership[seed].is_some() {
                continue;
            }
            let id = u32::try_from(areas.len())
                .map(RegionId)
                .map_err(|_| ConfigError::TooManyCells {
                    cells: n as u64,
                    max: u32::MAX as u64,
                })?;
            let mut cells = vec![seed];
            membership[seed] = Some(id);
            queue.push_back(seed);

            while let Some(current) = queue.pop_front() {
                for &nb in graph.neighbours_of(current) {
                    if membership[nb].is_none() && graph.terrain_of(nb) == Terrain::Ground {
                        membership[nb] = Some(id);
                        cells.push(nb);
                        queue.push_back(nb);
                    }
                }
            }
            areas.push(LivingArea { id, cells });
        }

        log::info!(
            "segmented {} living areas ({} water cells, {} land regions)",
            areas.len(),
            areas[0].len(),
            areas.len() - 1,
        );

        Ok(Self { areas, membership })
    }

    /// Number of areas, water included.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Always `false`: the water area exists even when empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Number of land regions.
    pub fn land_count(&self) -> usize {
        self.areas.len() - 1
    }

    /// The water super-region.
    pub fn water(&self) -> &LivingArea {
        &self.areas[RegionId::WATER.index()]
    }

    /// Area by id.
    pub fn get(&self, id: RegionId) -> Option<&LivingArea> {
        self.areas.get(id.index())
    }

    /// All areas in order: water first, then land in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &LivingArea> {
        self.areas.iter()
    }

    /// Region of the node in slot `index`; `None` for obstacles.
    pub fn region_of(&self, index: usize) -> Option<RegionId> {
        self.membership.get(index).copied().flatten()
    }

    /// Every area as a list of coordinates, in area order.
    pub fn to_coords(&self, graph: &NavGraph) -> Vec<Vec<Coord>> {
        self.areas
            .iter()
            .map(|area| area.cells.iter().map(|&i| graph.coord_of(i)).collect())
            .collect()
    }
}
