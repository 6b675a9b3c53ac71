//! Benchmark profiles for the Roam movement planner.
//!
//! - [`reference_terrain`]: 100x100 islands map (10K cells)
//! - [`stress_terrain`]: 316x316 islands map (~100K cells)
//! - [`query_pairs`]: deterministic start/target pairs on passable cells

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use roam_core::{Coord, Terrain, TerrainGrid, TerrainMap};

/// Share of water cells in the benchmark maps.
pub const WATER_SHARE: f64 = 0.35;
/// Share of obstacle cells in the benchmark maps.
pub const OBSTACLE_SHARE: f64 = 0.08;

/// Seeded islands map: water and obstacles scattered over ground.
pub fn islands(width: u32, height: u32, seed: u64) -> TerrainMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    TerrainMap::from_fn(width, height, |_| {
        let roll: f64 = rng.gen();
        if roll < OBSTACLE_SHARE {
            Terrain::Obstacle
        } else if roll < OBSTACLE_SHARE + WATER_SHARE {
            Terrain::Water
        } else {
            Terrain::Ground
        }
    })
}

/// 100x100 reference map.
pub fn reference_terrain(seed: u64) -> TerrainMap {
    islands(100, 100, seed)
}

/// 316x316 stress map, roughly 10x the reference cell count.
pub fn stress_terrain(seed: u64) -> TerrainMap {
    islands(316, 316, seed)
}

/// `count` start/target pairs, both on passable cells and distinct.
///
/// Returns fewer pairs only if the map has fewer than two passable
/// cells.
pub fn query_pairs(map: &TerrainMap, count: usize, seed: u64) -> Vec<(Coord, Coord)> {
    let passable: Vec<Coord> = (0..map.height() as i32)
        .flat_map(|y| (0..map.width() as i32).map(move |x| Coord::new(x, y)))
        .filter(|&c| map.get(c).is_some_and(Terrain::is_passable))
        .collect();
    if passable.len() < 2 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let a = passable[rng.gen_range(0..passable.len())];
        let b = passable[rng.gen_range(0..passable.len())];
        if a != b {
            pairs.push((a, b));
        }
    }
    pairs
}
