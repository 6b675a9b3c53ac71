//! Lattice topology for the Roam movement planner.
//!
//! The planner works on a rectangular grid of cells with an
//! 8-connected neighbourhood. [`Lattice`] owns the index arithmetic
//! (coordinate <-> row-major slot), neighbour enumeration under an
//! [`EdgeBehavior`], and the hop-distance metric. It knows nothing
//! about terrain.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod lattice;

pub use edge::EdgeBehavior;
pub use lattice::{Lattice, OFFSETS_8};
