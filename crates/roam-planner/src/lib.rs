//! Movement planning over a terrain grid.
//!
//! The planner turns a [`TerrainGrid`](roam_core::TerrainGrid) into a
//! searchable graph, partitions it into living areas and answers
//! fewest-hop path queries.
//!
//! | Module | Role |
//! |--------|------|
//! | [`graph`] | Connectivity builder: one node per cell with its passable neighbours |
//! | [`region`] | Region segmenter: water super-region plus land components |
//! | [`search`] | Two-tier BFS with an optional land-only constraint |
//! | [`path`] | Goal-first path value and start-first adapters |
//! | [`metrics`] | Counts and timing of the last search |
//! | [`config`] | Edge behaviour and search limits |
//! | [`planner`] | [`MovementPlanner`] facade and its builder |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod graph;
pub mod metrics;
pub mod path;
pub mod planner;
pub mod region;
pub mod search;

mod scratch;

pub use config::PlannerConfig;
pub use graph::{NavGraph, PlanningNode};
pub use metrics::SearchMetrics;
pub use path::Path;
pub use planner::{InitReport, MovementPlanner, PlannerBuilder};
pub use region::{LivingArea, LivingAreas};
pub use search::TravelMode;
