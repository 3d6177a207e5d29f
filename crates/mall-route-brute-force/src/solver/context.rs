use mall_route_core::{Catalog, LocationId, Route};

/// Per-call working state: the path buffer being scored and the best path
/// seen so far. Nothing here outlives a single `solve` call.
pub struct SolveContext<'a> {
    catalog: &'a Catalog,

    // [origin, stops.., origin], inner slots rewritten per ordering
    path: Vec<LocationId>,

    pub best_distance: f64,
    best_path: Vec<LocationId>,
    pub scored: usize,
}

impl<'a> SolveContext<'a> {
    pub fn new(catalog: &'a Catalog, origin: LocationId, stop_count: usize) -> Self {
        let path = vec![origin; stop_count + 2];
        SolveContext {
            catalog,
            best_path: path.clone(),
            path,
            best_distance: f64::INFINITY,
            scored: 0,
        }
    }

    pub fn score(&mut self, ordering: &[LocationId]) {
        let last = self.path.len() - 1;
        self.path[1..last].copy_from_slice(ordering);

        let distance = self.catalog.path_length_by_id(&self.path);
        // Strict `<`: on ties the earlier ordering stays.
        if self.scored == 0 || distance < self.best_distance {
            self.best_distance = distance;
            self.best_path.copy_from_slice(&self.path);
        }
        self.scored += 1;
    }

    pub fn into_route(self) -> Route {
        Route {
            path: self
                .best_path
                .iter()
                .map(|&id| self.catalog.label(id).to_string())
                .collect(),
            distance: self.best_distance,
        }
    }
}
