use serde::{Deserialize, Serialize};

/// One minute per ten grid units.
pub const TRAVEL_MINUTES_PER_UNIT: f64 = 0.1;
pub const HANDLING_MINUTES_PER_STOP: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRates {
    pub travel_minutes_per_unit: f64,
    pub handling_minutes_per_stop: f64,
}

impl Default for TimeRates {
    fn default() -> Self {
        Self {
            travel_minutes_per_unit: TRAVEL_MINUTES_PER_UNIT,
            handling_minutes_per_stop: HANDLING_MINUTES_PER_STOP,
        }
    }
}

impl TimeRates {
    /// Inputs are not validated; negative values give meaningless results.
    pub fn estimate(&self, total_distance: f64, stop_count: usize) -> f64 {
        total_distance * self.travel_minutes_per_unit
            + stop_count as f64 * self.handling_minutes_per_stop
    }
}

/// Estimated minutes to walk `total_distance` and handle `stop_count` stops,
/// at the default rates.
pub fn estimate_time(total_distance: f64, stop_count: usize) -> f64 {
    TimeRates::default().estimate(total_distance, stop_count)
}
