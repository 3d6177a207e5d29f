#![deny(clippy::all)]
//! Shared types for the mall route planner.
//!
//! The [`Catalog`] is the fixed set of known locations and doubles as the
//! distance model every solver scores paths with.

mod catalog;
mod config;
mod error;
mod models;
mod scene;
mod utils;

pub use catalog::{Catalog, LocationId};
pub use config::{CatalogConfig, DEFAULT_LABELS, DEFAULT_ORIGIN};
pub use error::{Error, Result};
pub use models::{Location, Point, Route};
pub use scene::{Marker, Scene, Segment, SCENE_TITLE};
pub use utils::calculate_distance;
