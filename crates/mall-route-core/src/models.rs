use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub label: String,
    pub point: Point,
}

impl Location {
    pub fn new(label: impl Into<String>, point: Point) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// Best closed path found for a selection and its total length.
///
/// `path` starts and ends at the origin. An empty selection gives
/// `[origin, origin]` with a distance of zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<String>,
    pub distance: f64,
}

impl Route {
    /// Number of stops between the two origin visits.
    pub fn stop_count(&self) -> usize {
        self.path.len().saturating_sub(2)
    }
}
