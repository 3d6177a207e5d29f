use serde::Serialize;

use mall_route_brute_force::{solve, TimeRates};
use mall_route_core::{Catalog, Error, Result, Route};

/// Largest selection a sweep will solve; 8! orderings per selection.
pub const MAX_SWEEP_STOPS: usize = 8;

// Bitmask enumeration over the catalog.
const MAX_SWEEP_LABELS: usize = 20;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Serialize)]
pub struct SweepRow {
    pub selection: Vec<String>,
    pub path: Vec<String>,
    pub distance: f64,
    pub minutes: f64,
    pub lower_bound: f64,
    pub violations: Vec<String>,
}

impl SweepRow {
    pub fn is_sound(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct SweepSummary {
    pub selections: usize,
    pub unsound: usize,
    pub max_stops: usize,
    pub longest_distance: f64,
}

/// Every subset of the selectable labels with at most `max_stops` members,
/// in ascending bitmask order, members in catalog order.
pub fn selections(catalog: &Catalog, max_stops: usize) -> Result<Vec<Vec<String>>> {
    let labels: Vec<&str> = catalog.selectable_labels().collect();
    if labels.len() > MAX_SWEEP_LABELS {
        return Err(Error::invalid_input(format!(
            "catalog has {} selectable locations, sweeps support at most {MAX_SWEEP_LABELS}",
            labels.len()
        )));
    }

    let full_mask: u32 = (1 << labels.len()) - 1;
    let subsets = (0..=full_mask)
        .filter(|mask| mask.count_ones() as usize <= max_stops)
        .map(|mask| {
            labels
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, label)| label.to_string())
                .collect()
        })
        .collect();
    Ok(subsets)
}

/// Any closed path through `selection` goes out to its farthest member and
/// back, so it is at least twice that distance long.
pub fn lower_bound(catalog: &Catalog, selection: &[String]) -> Result<f64> {
    let origin = catalog.origin();
    selection.iter().try_fold(0.0_f64, |bound, label| -> Result<f64> {
        Ok(bound.max(2.0 * catalog.distance(origin, label)?))
    })
}

/// Checks `route` against the shape and cost a solved `selection` must have.
/// Returns one message per broken property.
pub fn check_route(catalog: &Catalog, selection: &[String], route: &Route) -> Result<Vec<String>> {
    let origin = catalog.origin();
    let mut violations = Vec::new();

    if route.path.len() != selection.len() + 2 {
        violations.push(format!(
            "path has {} entries, expected {}",
            route.path.len(),
            selection.len() + 2
        ));
    }
    if route.path.first().map(String::as_str) != Some(origin)
        || route.path.last().map(String::as_str) != Some(origin)
    {
        violations.push("path does not start and end at the origin".to_string());
    }

    let mut inner: Vec<&str> = route
        .path
        .iter()
        .skip(1)
        .take(route.path.len().saturating_sub(2))
        .map(String::as_str)
        .collect();
    let mut expected: Vec<&str> = selection.iter().map(String::as_str).collect();
    inner.sort_unstable();
    expected.sort_unstable();
    if inner != expected {
        violations.push("path does not visit each selected location exactly once".to_string());
    }

    let recomputed = catalog.path_length(&route.path)?;
    if (recomputed - route.distance).abs() > TOLERANCE {
        violations.push(format!(
            "reported distance {} differs from path length {recomputed}",
            route.distance
        ));
    }

    let bound = lower_bound(catalog, selection)?;
    if route.distance < bound - TOLERANCE {
        violations.push(format!(
            "distance {} is below the out-and-back bound {bound}",
            route.distance
        ));
    }

    Ok(violations)
}

/// Solves and checks every selection of up to `max_stops` locations.
pub fn sweep(
    catalog: &Catalog,
    max_stops: usize,
    rates: &TimeRates,
) -> Result<(Vec<SweepRow>, SweepSummary)> {
    if max_stops > MAX_SWEEP_STOPS {
        return Err(Error::invalid_input(format!(
            "max_stops {max_stops} exceeds the sweep limit of {MAX_SWEEP_STOPS}"
        )));
    }

    let mut summary = SweepSummary {
        max_stops,
        ..SweepSummary::default()
    };
    let mut rows = Vec::new();

    for selection in selections(catalog, max_stops)? {
        let route = solve(catalog, catalog.origin(), &selection)?;
        let violations = check_route(catalog, &selection, &route)?;
        let row = SweepRow {
            lower_bound: lower_bound(catalog, &selection)?,
            minutes: rates.estimate(route.distance, route.stop_count()),
            distance: route.distance,
            path: route.path,
            selection,
            violations,
        };

        if !row.is_sound() {
            log::warn!("unsound route for {:?}: {:?}", row.selection, row.violations);
            summary.unsound += 1;
        }
        summary.selections += 1;
        summary.longest_distance = summary.longest_distance.max(row.distance);
        rows.push(row);
    }

    log::info!(
        "sweep: selections={} unsound={} longest={:.3}",
        summary.selections,
        summary.unsound,
        summary.longest_distance
    );

    Ok((rows, summary))
}
