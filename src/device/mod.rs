//! The abacus itself: beads, rods, and the toggle protocol.
//!
//! Everything in this module is pure state: no geometry, no drawing, no
//! terminal. [`Abacus`] owns a row of [`Rod`]s, each rod owns five [`Bead`]s,
//! and the only mutations are bead toggles (with their cascades) and reset.
//! The widget layer feeds it hit-test results and reads back the value.

mod abacus;
mod bead;
mod rod;

pub use abacus::{Abacus, MAX_RODS};
pub use bead::{Bead, BeadKind};
pub use rod::{Rod, BEADS_PER_ROD};
