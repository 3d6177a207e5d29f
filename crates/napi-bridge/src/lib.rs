#![deny(clippy::all)]

use napi::{Error, Status};
use napi_derive::napi;

mod models;

use models::{CatalogConfigObject, CatalogObject, RouteObject, SceneObject};

fn to_js_error(err: mall_route_core::Error) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

#[napi]
pub fn generate_catalog(config: Option<CatalogConfigObject>) -> napi::Result<CatalogObject> {
    let config = config.unwrap_or_default().into_config();
    let catalog = mall_route_core::Catalog::generate(&config).map_err(to_js_error)?;
    Ok(CatalogObject::from(&catalog))
}

#[napi]
pub fn solve_route(catalog: CatalogObject, selection: Vec<String>) -> napi::Result<RouteObject> {
    let catalog = catalog.into_catalog().map_err(to_js_error)?;
    let route = mall_route_brute_force::solve(&catalog, catalog.origin(), &selection)
        .map_err(to_js_error)?;
    let minutes = mall_route_brute_force::estimate_time(route.distance, route.stop_count());
    Ok(RouteObject::new(route, minutes))
}

#[napi]
pub fn estimate_time(total_distance: f64, stop_count: u32) -> f64 {
    mall_route_brute_force::estimate_time(total_distance, stop_count as usize)
}

#[napi]
pub fn describe_scene(
    catalog: CatalogObject,
    route: RouteObject,
    selection: Vec<String>,
    grid_size: u32,
) -> napi::Result<SceneObject> {
    let catalog = catalog.into_catalog().map_err(to_js_error)?;
    let scene =
        mall_route_core::Scene::describe(&catalog, &route.to_route(), &selection, grid_size);
    Ok(SceneObject::from(scene))
}
