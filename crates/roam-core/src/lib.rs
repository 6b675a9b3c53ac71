//! Core types for the Roam movement planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: grid
//! coordinates, region identifiers, terrain classification, the
//! [`TerrainGrid`] contract consumed from the world subsystem, and the
//! planner's error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod terrain;

pub use error::{ConfigError, PlannerError};
pub use id::{Coord, RegionId};
pub use terrain::{Terrain, TerrainCell, TerrainGrid, TerrainMap};
