//! Greedy node coloring
//!
//! Assigns every node the smallest non-negative integer not used by the
//! neighbors it is constrained by. Which neighbors count is decided by a
//! [`NeighborPolicy`] passed to [`colorize`]; the same policy must be used
//! when verifying the result with [`has_conflicts`].

pub mod greedy;
pub mod palette;
pub mod policy;

pub use crate::graph::{Color, COLOR_KEY};
pub use greedy::{
    colorize, conflicts, first_unused, has_conflicts, select_max_degree, ColoringOutcome,
};
pub use palette::Palette;
pub use policy::{Bidirectional, NeighborPolicy, Outgoing};
