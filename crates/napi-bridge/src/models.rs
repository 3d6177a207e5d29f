use napi_derive::napi;

use mall_route_core::{Catalog, CatalogConfig, Location, Point, Route, Scene};

#[napi(object)]
#[derive(Clone, Debug)]
pub struct LocationObject {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct CatalogObject {
    pub origin: String,
    pub locations: Vec<LocationObject>,
}

/// Every field is optional; missing ones take the catalog defaults.
#[napi(object)]
#[derive(Clone, Debug, Default)]
pub struct CatalogConfigObject {
    pub origin: Option<String>,
    pub origin_x: Option<f64>,
    pub origin_y: Option<f64>,
    pub labels: Option<Vec<String>>,
    pub grid_size: Option<u32>,
    pub seed: Option<u32>,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct RouteObject {
    pub path: Vec<String>,
    pub distance: f64,
    pub minutes: f64,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct MarkerObject {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub highlighted: bool,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct SegmentObject {
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bounds_min: f64,
    pub bounds_max: f64,
    pub markers: Vec<MarkerObject>,
    pub segments: Vec<SegmentObject>,
}

impl CatalogConfigObject {
    pub fn into_config(self) -> CatalogConfig {
        let defaults = CatalogConfig::default();
        CatalogConfig {
            origin: self.origin.unwrap_or(defaults.origin),
            origin_point: Point::new(
                self.origin_x.unwrap_or(defaults.origin_point.x),
                self.origin_y.unwrap_or(defaults.origin_point.y),
            ),
            labels: self.labels.unwrap_or(defaults.labels),
            grid_size: self.grid_size.unwrap_or(defaults.grid_size),
            seed: self.seed.map(u64::from).unwrap_or(defaults.seed),
        }
    }
}

impl CatalogObject {
    pub fn into_catalog(self) -> mall_route_core::Result<Catalog> {
        let locations = self
            .locations
            .into_iter()
            .map(|l| Location::new(l.label, Point::new(l.x, l.y)))
            .collect();
        Catalog::new(&self.origin, locations)
    }
}

impl From<&Catalog> for CatalogObject {
    fn from(catalog: &Catalog) -> Self {
        CatalogObject {
            origin: catalog.origin().to_string(),
            locations: catalog
                .locations()
                .iter()
                .map(|l| LocationObject {
                    label: l.label.clone(),
                    x: l.point.x,
                    y: l.point.y,
                })
                .collect(),
        }
    }
}

impl RouteObject {
    pub fn new(route: Route, minutes: f64) -> Self {
        RouteObject {
            path: route.path,
            distance: route.distance,
            minutes,
        }
    }

    pub fn to_route(&self) -> Route {
        Route {
            path: self.path.clone(),
            distance: self.distance,
        }
    }
}

impl From<Scene> for SceneObject {
    fn from(scene: Scene) -> Self {
        SceneObject {
            title: scene.title,
            x_label: scene.x_label,
            y_label: scene.y_label,
            bounds_min: scene.bounds.0,
            bounds_max: scene.bounds.1,
            markers: scene
                .markers
                .into_iter()
                .map(|m| MarkerObject {
                    label: m.label,
                    x: m.point.x,
                    y: m.point.y,
                    highlighted: m.highlighted,
                })
                .collect(),
            segments: scene
                .segments
                .into_iter()
                .map(|s| SegmentObject {
                    from_x: s.from.x,
                    from_y: s.from.y,
                    to_x: s.to.x,
                    to_y: s.to.y,
                })
                .collect(),
        }
    }
}
