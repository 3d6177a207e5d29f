use serde::Serialize;

use mall_route_brute_force::{solve, TimeRates};
use mall_route_core::{Catalog, Result, Scene};

#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub selection: Vec<String>,
    pub path: Vec<String>,
    pub distance: f64,
    pub minutes: f64,
    pub scene: Scene,
}

/// Solves one selection and bundles everything a front end needs to show it.
pub fn route_report(
    catalog: &Catalog,
    selection: &[String],
    rates: &TimeRates,
    grid_size: u32,
) -> Result<RouteReport> {
    let route = solve(catalog, catalog.origin(), selection)?;
    let minutes = rates.estimate(route.distance, route.stop_count());
    let scene = Scene::describe(catalog, &route, selection, grid_size);

    Ok(RouteReport {
        selection: selection.to_vec(),
        path: route.path,
        distance: route.distance,
        minutes,
        scene,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mall_route_core::CatalogConfig;

    #[test]
    fn report_matches_route() {
        let config = CatalogConfig::default();
        let catalog = Catalog::generate(&config).unwrap();
        let selection = vec!["Grocery".to_string(), "Clothing".to_string()];

        let report = route_report(&catalog, &selection, &TimeRates::default(), config.grid_size)
            .unwrap();

        assert_eq!(report.path.len(), 4);
        assert_eq!(report.scene.segments.len(), 3);
        assert!((report.minutes - (report.distance * 0.1 + 1.0)).abs() < 1e-9);
        assert_eq!(
            report.scene.markers.iter().filter(|m| m.highlighted).count(),
            3
        );
    }

    #[test]
    fn report_propagates_bad_selection() {
        let catalog = Catalog::generate(&CatalogConfig::default()).unwrap();
        let selection = vec!["Bakery".to_string()];
        assert!(route_report(&catalog, &selection, &TimeRates::default(), 10).is_err());
    }
}
