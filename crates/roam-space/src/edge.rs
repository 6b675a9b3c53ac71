//! Edge (boundary) behaviour for the planning lattice.

/// How the lattice treats neighbours that fall off the grid.
///
/// This controls *topology* only. Terrain passability is decided
/// separately by the connectivity builder.
///
/// # Examples
///
/// ```
/// use roam_core::Coord;
/// use roam_space::{EdgeBehavior, Lattice};
///
/// // Wrap: every cell of a 4x4 grid has 8 neighbours (torus).
/// let wrap = Lattice::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(Coord::new(0, 0)).len(), 8);
///
/// // Absorb: corners only see the 3 cells inside the grid.
/// let absorb = Lattice::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(Coord::new(0, 0)).len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range neighbours wrap to the opposite edge (torus).
    #[default]
    Wrap,
    /// Out-of-range neighbours are omitted (fewer neighbours at edges).
    Absorb,
}
