use serde::{Deserialize, Serialize};

use crate::{Point, Result};

pub const DEFAULT_ORIGIN: &str = "Start";

pub const DEFAULT_LABELS: [&str; 8] = [
    "Grocery",
    "Electronics",
    "Home & Kitchen",
    "Clothing",
    "Health & Beauty",
    "Toys & Games",
    "Sports & Outdoors",
    "Auto & Hardware",
];

/// Inputs for [`crate::Catalog::generate`].
///
/// Every field has a default, so a partial JSON document such as
/// `{"seed": 7}` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub origin: String,
    pub origin_point: Point,
    pub labels: Vec<String>,
    /// Coordinates are drawn from `0..grid_size` on both axes.
    pub grid_size: u32,
    pub seed: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            origin_point: Point::default(),
            labels: DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
            grid_size: 10,
            seed: 42,
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
