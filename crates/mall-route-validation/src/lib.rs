//! Reporting and soundness sweeps over the brute-force route planner.

pub mod logging;
mod report;
mod selection_sweep;

pub use report::{route_report, RouteReport};
pub use selection_sweep::{
    check_route, lower_bound, selections, sweep, SweepRow, SweepSummary, MAX_SWEEP_STOPS,
};
