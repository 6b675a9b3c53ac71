//! Test fixtures for Roam development.
//!
//! Provides terrain builders ([`terrain_from_ascii`], [`random_terrain`]),
//! a [`RawGrid`] that can enumerate malformed cell sets, and path
//! assertions shared by the unit and integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use roam_core::{Coord, Terrain, TerrainCell, TerrainGrid, TerrainMap};
use roam_space::Lattice;

/// Build a terrain map from ASCII rows, top row first.
///
/// `.` is ground, `~` is water, `#` is an obstacle.
///
/// # Panics
///
/// On ragged rows or any other character.
pub fn terrain_from_ascii(rows: &[&str]) -> TerrainMap {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as u32, width, "row {y} is ragged");
    }
    TerrainMap::from_fn(width, height, |coord| {
        let ch = rows[coord.y as usize].as_bytes()[coord.x as usize];
        match ch {
            b'.' => Terrain::Ground,
            b'~' => Terrain::Water,
            b'#' => Terrain::Obstacle,
            other => panic!("unknown terrain glyph {:?} at {coord}", other as char),
        }
    })
}

/// Render a terrain map back to ASCII rows.
pub fn terrain_to_ascii(map: &TerrainMap) -> Vec<String> {
    (0..map.height() as i32)
        .map(|y| {
            (0..map.width() as i32)
                .map(|x| match map.get(Coord::new(x, y)) {
                    Some(Terrain::Ground) => '.',
                    Some(Terrain::Water) => '~',
                    Some(Terrain::Obstacle) => '#',
                    None => '?',
                })
                .collect()
        })
        .collect()
}

/// Proportions of water and obstacles in [`random_terrain`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainMix {
    pub water: f64,
    pub obstacle: f64,
}

impl TerrainMix {
    pub const ALL_GROUND: Self = Self {
        water: 0.0,
        obstacle: 0.0,
    };
    pub const ISLANDS: Self = Self {
        water: 0.45,
        obstacle: 0.05,
    };
    pub const CLUTTERED: Self = Self {
        water: 0.15,
        obstacle: 0.25,
    };
}

/// Seeded random terrain. Equal seeds give equal maps.
pub fn random_terrain(width: u32, height: u32, seed: u64, mix: TerrainMix) -> TerrainMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    TerrainMap::from_fn(width, height, |_| {
        let roll: f64 = rng.gen();
        if roll < mix.obstacle {
            Terrain::Obstacle
        } else if roll < mix.obstacle + mix.water {
            Terrain::Water
        } else {
            Terrain::Ground
        }
    })
}

/// A grid that enumerates exactly the cells it was given.
///
/// Unlike [`TerrainMap`] it can drop, repeat or misplace cells, which is
/// how tests reach the graph builder's validation errors.
#[derive(Clone, Debug)]
pub struct RawGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<TerrainCell>,
}

impl RawGrid {
    pub fn from_map(map: &TerrainMap) -> Self {
        Self {
            width: map.width(),
            height: map.height(),
            cells: map.cells().collect(),
        }
    }

    /// Drop every cell at `coord`.
    pub fn without(mut self, coord: Coord) -> Self {
        self.cells.retain(|cell| cell.coord != coord);
        self
    }

    /// Append a cell, even if `coord` is already present or off-grid.
    pub fn with_cell(mut self, coord: Coord, terrain: Terrain) -> Self {
        self.cells.push(TerrainCell { coord, terrain });
        self
    }
}

impl TerrainGrid for RawGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> Box<dyn Iterator<Item = TerrainCell> + '_> {
        Box::new(self.cells.iter().copied())
    }
}

/// Assert that every cell of `path` is on the lattice and consecutive
/// cells are one hop apart.
pub fn assert_path_connected(lattice: &Lattice, path: &[Coord]) {
    for &cell in path {
        assert!(lattice.index(cell).is_some(), "{cell} is off the lattice");
    }
    for pair in path.windows(2) {
        assert!(
            lattice.distance(pair[0], pair[1]) == 1,
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

/// Assert that every cell of `path` is present in `grid` and passable.
pub fn assert_path_passable(grid: &dyn TerrainGrid, path: &[Coord]) {
    for &cell in path {
        assert!(
            grid.terrain_at(cell).is_some_and(Terrain::is_passable),
            "path crosses impassable cell {cell}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let rows = [".~#", "#~."];
        let map = terrain_from_ascii(&rows);
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.get(Coord::new(2, 0)), Some(Terrain::Obstacle));
        assert_eq!(terrain_to_ascii(&map), rows);
    }

    #[test]
    #[should_panic(expected = "unknown terrain glyph")]
    fn ascii_rejects_unknown_glyph() {
        terrain_from_ascii(&[".x."]);
    }

    #[test]
    fn random_terrain_is_seeded() {
        let a = random_terrain(16, 16, 7, TerrainMix::ISLANDS);
        let b = random_terrain(16, 16, 7, TerrainMix::ISLANDS);
        assert_eq!(terrain_to_ascii(&a), terrain_to_ascii(&b));
        let all = random_terrain(8, 8, 1, TerrainMix::ALL_GROUND);
        assert_eq!(all.count(Terrain::Ground), 64);
    }

    #[test]
    fn raw_grid_edits() {
        let map = TerrainMap::new(2, 2, Terrain::Ground);
        let grid = RawGrid::from_map(&map)
            .without(Coord::new(0, 0))
            .with_cell(Coord::new(5, 5), Terrain::Water);
        assert_eq!(grid.cells().count(), 4);
        assert!(grid.cells().all(|c| c.coord != Coord::new(0, 0)));
    }

    #[test]
    fn path_checks_accept_wrapped_walk() {
        let map = terrain_from_ascii(&["..~", "...", "#.."]);
        let lattice = Lattice::new(3, 3, roam_space::EdgeBehavior::Wrap).unwrap();
        // (2, 2) -> (0, 0) crosses the corner seam.
        let path = [Coord::new(1, 1), Coord::new(2, 2), Coord::new(0, 0), Coord::new(2, 0)];
        assert_path_connected(&lattice, &path);
        assert_path_passable(&map, &path);
    }

    #[test]
    #[should_panic(expected = "are not adjacent")]
    fn path_connected_rejects_jump() {
        let lattice = Lattice::new(5, 1, roam_space::EdgeBehavior::Absorb).unwrap();
        assert_path_connected(&lattice, &[Coord::new(0, 0), Coord::new(2, 0)]);
    }

    #[test]
    #[should_panic(expected = "impassable cell (1, 0)")]
    fn path_passable_uses_grid_lookup() {
        // RawGrid keeps the scanning `terrain_at`; a dropped cell has no terrain.
        let map = TerrainMap::new(3, 1, Terrain::Ground);
        let grid = RawGrid::from_map(&map).without(Coord::new(1, 0));
        assert_path_passable(&grid, &[Coord::new(0, 0)]);
        assert_path_passable(&grid, &[Coord::new(0, 0), Coord::new(1, 0)]);
    }
}
