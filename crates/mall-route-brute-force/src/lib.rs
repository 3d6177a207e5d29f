#![deny(clippy::all)]
//! Exact round-trip planning by exhaustive enumeration.
//!
//! Every visiting order of the selection is scored, so the running time grows
//! as `n!`. Keep selections to a handful of stops.

mod estimate;
mod permutations;
mod solver;

pub use estimate::{estimate_time, TimeRates, HANDLING_MINUTES_PER_STOP, TRAVEL_MINUTES_PER_UNIT};
pub use permutations::Permutations;
pub use solver::solve;
