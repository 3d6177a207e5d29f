mod context;

use std::collections::HashSet;

use mall_route_core::{Catalog, Error, LocationId, Result, Route};

use crate::Permutations;
use context::SolveContext;

fn resolve_selection<S: AsRef<str>>(
    catalog: &Catalog,
    origin: LocationId,
    selection: &[S],
) -> Result<Vec<LocationId>> {
    let mut seen = HashSet::with_capacity(selection.len());
    selection
        .iter()
        .map(|label| {
            let label = label.as_ref();
            let id = catalog.id(label).ok_or_else(|| {
                Error::invalid_input(format!("selected location {label:?} is not in the catalog"))
            })?;
            if id == origin {
                return Err(Error::invalid_input(format!(
                    "the origin {label:?} cannot be selected as a stop"
                )));
            }
            if !seen.insert(id) {
                return Err(Error::invalid_input(format!(
                    "location {label:?} is selected more than once"
                )));
            }
            Ok(id)
        })
        .collect()
}

/// Shortest closed path from `origin` through every selected location.
///
/// All `n!` orderings of `selection` are scored in lexicographic order of
/// their positions in `selection`; among equally short paths the first one
/// generated is returned. An empty selection gives `[origin, origin]` at
/// distance zero.
///
/// Fails with [`Error::Lookup`] when `origin` is not in the catalog and with
/// [`Error::InvalidInput`] when a selected label is unknown, is the origin,
/// or appears twice.
pub fn solve<S: AsRef<str>>(catalog: &Catalog, origin: &str, selection: &[S]) -> Result<Route> {
    let origin_id = catalog.id(origin).ok_or_else(|| Error::lookup(origin))?;
    let stops = resolve_selection(catalog, origin_id, selection)?;

    let mut ctx = SolveContext::new(catalog, origin_id, stops.len());
    let mut orderings = Permutations::new(stops);
    while let Some(ordering) = orderings.next_ordering() {
        ctx.score(ordering);
    }

    log::debug!(
        "solve: stops={} orderings={} best={:.3}",
        selection.len(),
        ctx.scored,
        ctx.best_distance
    );

    Ok(ctx.into_route())
}
