//! Roam: movement planning for creatures on a toroidal terrain grid.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the Roam sub-crates. For most users, adding `roam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use roam::prelude::*;
//!
//! // A 5x3 island with a lake in the middle.
//! let mut map = TerrainMap::new(5, 3, Terrain::Ground);
//! map.set(Coord::new(2, 1), Terrain::Water).unwrap();
//!
//! let mut planner = MovementPlanner::builder()
//!     .terrain(&map)
//!     .edge_behavior(EdgeBehavior::Absorb)
//!     .build()
//!     .unwrap();
//!
//! let path = planner
//!     .find_path(Coord::new(0, 1), Coord::new(4, 1), TravelMode::LandOnly)
//!     .unwrap();
//! assert_eq!(path.start(), Coord::new(0, 1));
//! assert_eq!(path.goal(), Coord::new(4, 1));
//! assert!(!path.contains(Coord::new(2, 1)));
//!
//! // Region 0 is the water; the island is region 1.
//! let areas = planner.living_areas().unwrap();
//! assert_eq!(areas.len(), 2);
//! assert_eq!(areas[0], vec![Coord::new(2, 1)]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `roam-core` | Coordinates, terrain, region ids, errors |
//! | [`space`] | `roam-space` | Lattice topology and edge behaviour |
//! | [`planner`] | `roam-planner` | Graph, regions, search and the planner facade |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`roam-core`).
///
/// Contains [`types::Coord`], [`types::Terrain`], the
/// [`types::TerrainGrid`] contract and the error taxonomy.
pub use roam_core as types;

/// Lattice topology (`roam-space`).
///
/// [`space::Lattice`] handles indexing, 8-neighbourhoods and
/// distances under an [`space::EdgeBehavior`].
pub use roam_space as space;

/// Planning graph, living areas and path search (`roam-planner`).
pub use roam_planner as planner;

/// Common imports for typical Roam usage.
///
/// ```rust
/// use roam::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use roam_core::{Coord, RegionId, Terrain, TerrainCell, TerrainGrid, TerrainMap};

    // Errors
    pub use roam_core::{ConfigError, PlannerError};

    // Space
    pub use roam_space::EdgeBehavior;

    // Planner
    pub use roam_planner::{
        InitReport, MovementPlanner, Path, PlannerConfig, SearchMetrics, TravelMode,
    };
}
