//! Terrain classification and the read-only grid contract.

use crate::error::ConfigError;
use crate::id::Coord;

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Walkable land.
    Ground,
    /// Swimmable water.
    Water,
    /// Impassable cell.
    Obstacle,
}

impl Terrain {
    /// `false` only for [`Terrain::Obstacle`].
    pub fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }
}

/// One enumerated cell of a [`TerrainGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainCell {
    /// Cell position.
    pub coord: Coord,
    /// Cell classification.
    pub terrain: Terrain,
}

/// Read-only access to the world's terrain.
///
/// Implemented by the world subsystem. The planner copies what it
/// needs during initialization and never holds on to the grid.
pub trait TerrainGrid {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Enumerate every cell of the grid.
    ///
    /// A well-formed grid yields each coordinate in
    /// `[0, width) x [0, height)` exactly once; order does not matter.
    fn cells(&self) -> Box<dyn Iterator<Item = TerrainCell> + '_>;

    /// Terrain of a single cell.
    ///
    /// Default implementation scans [`cells`](Self::cells); dense
    /// implementations should override it.
    fn terrain_at(&self, coord: Coord) -> Option<Terrain> {
        self.cells()
            .find(|cell| cell.coord == coord)
            .map(|cell| cell.terrain)
    }
}

/// Dense row-major terrain grid.
///
/// The stock [`TerrainGrid`] implementation: one [`Terrain`] per cell,
/// stored at `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainMap {
    width: u32,
    height: u32,
    cells: Vec<Terrain>,
}

impl TerrainMap {
    /// Create a `width x height` map with every cell set to `fill`.
    pub fn new(width: u32, height: u32, fill: Terrain) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width as usize * height as usize],
        }
    }

    /// Create a map by evaluating `f` at every coordinate.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(Coord) -> Terrain) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(f(Coord::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    fn slot(&self, coord: Coord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as u32, coord.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Terrain at `coord`, or `None` outside the map.
    pub fn get(&self, coord: Coord) -> Option<Terrain> {
        self.slot(coord).map(|i| self.cells[i])
    }

    /// Overwrite the terrain at `coord`.
    pub fn set(&mut self, coord: Coord, terrain: Terrain) -> Result<(), ConfigError> {
        let i = self.slot(coord).ok_or(ConfigError::CellOutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })?;
        self.cells[i] = terrain;
        Ok(())
    }

    /// Number of cells with the given classification.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.cells.iter().filter(|&&t| t == terrain).count()
    }
}

impl TerrainGrid for TerrainMap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> Box<dyn Iterator<Item = TerrainCell> + '_> {
        let width = self.width.max(1) as usize;
        Box::new(self.cells.iter().enumerate().map(move |(i, &terrain)| {
            TerrainCell {
                coord: Coord::new((i % width) as i32, (i / width) as i32),
                terrain,
            }
        }))
    }

    fn terrain_at(&self, coord: Coord) -> Option<Terrain> {
        self.get(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn obstacle_is_the_only_impassable_terrain() {
        assert!(Terrain::Ground.is_passable());
        assert!(Terrain::Water.is_passable());
        assert!(!Terrain::Obstacle.is_passable());
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut map = TerrainMap::new(4, 3, Terrain::Ground);
        map.set(Coord::new(3, 2), Terrain::Water).unwrap();
        assert_eq!(map.get(Coord::new(3, 2)), Some(Terrain::Water));
        assert_eq!(map.count(Terrain::Water), 1);
        assert_eq!(map.count(Terrain::Ground), 11);
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut map = TerrainMap::new(2, 2, Terrain::Ground);
        let err = map.set(Coord::new(2, 0), Terrain::Water).unwrap_err();
        assert!(matches!(err, ConfigError::CellOutOfBounds { .. }));
        assert_eq!(map.get(Coord::new(-1, 0)), None);
    }

    #[test]
    fn cells_enumerate_row_major() {
        let map = TerrainMap::from_fn(3, 2, |c| {
            if c.x == 2 {
                Terrain::Obstacle
            } else {
                Terrain::Ground
            }
        });
        let coords: Vec<Coord> = map.cells().map(|c| c.coord).collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
            ]
        );
        assert_eq!(map.terrain_at(Coord::new(2, 1)), Some(Terrain::Obstacle));
    }

    proptest! {
        #[test]
        fn every_cell_enumerated_once(w in 1u32..12, h in 1u32..12) {
            let map = TerrainMap::new(w, h, Terrain::Water);
            let cells: Vec<TerrainCell> = map.cells().collect();
            prop_assert_eq!(cells.len(), (w * h) as usize);
            for cell in cells {
                prop_assert_eq!(map.get(cell.coord), Some(Terrain::Water));
            }
        }
    }
}
