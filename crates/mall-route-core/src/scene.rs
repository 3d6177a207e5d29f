use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Catalog, Point, Route};

pub const SCENE_TITLE: &str = "Shortest Path in the Mall";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub label: String,
    pub point: Point,
    /// Selected stops and the origin are highlighted and labelled.
    pub highlighted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Renderer-agnostic description of one planned route on the catalog grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Inclusive axis range, shared by both axes.
    pub bounds: (f64, f64),
    pub markers: Vec<Marker>,
    pub segments: Vec<Segment>,
}

impl Scene {
    /// Labels in `route.path` or `selection` that are not in `catalog` are
    /// skipped; the route is expected to come from the same catalog.
    pub fn describe<S: AsRef<str>>(
        catalog: &Catalog,
        route: &Route,
        selection: &[S],
        grid_size: u32,
    ) -> Self {
        let highlighted: HashSet<&str> = selection
            .iter()
            .map(|s| s.as_ref())
            .chain(std::iter::once(catalog.origin()))
            .collect();

        let markers = catalog
            .locations()
            .iter()
            .map(|location| Marker {
                label: location.label.clone(),
                point: location.point,
                highlighted: highlighted.contains(location.label.as_str()),
            })
            .collect();

        let points: Vec<Point> = route
            .path
            .iter()
            .filter_map(|label| catalog.point(label).ok())
            .collect();
        let segments = points
            .windows(2)
            .map(|leg| Segment {
                from: leg[0],
                to: leg[1],
            })
            .collect();

        Self {
            title: SCENE_TITLE.to_string(),
            x_label: "X Coordinate".to_string(),
            y_label: "Y Coordinate".to_string(),
            bounds: (-1.0, grid_size as f64),
            markers,
            segments,
        }
    }
}
