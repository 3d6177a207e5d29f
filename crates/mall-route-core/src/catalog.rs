use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::utils::calculate_distance;
use crate::{CatalogConfig, Error, Location, Point, Result};

/// Position of a location inside its [`Catalog`].
///
/// Only meaningful for the catalog that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fixed set of locations with one designated origin.
///
/// Immutable once built. Lookups by label go through a hash index, scoring by
/// id goes straight to the backing vector.
#[derive(Clone, Debug)]
pub struct Catalog {
    locations: Vec<Location>,
    index: HashMap<String, LocationId>,
    origin: LocationId,
}

impl Catalog {
    pub fn new(origin: &str, locations: Vec<Location>) -> Result<Self> {
        let mut index = HashMap::with_capacity(locations.len());
        for (i, location) in locations.iter().enumerate() {
            if !location.point.is_finite() {
                return Err(Error::invalid_input(format!(
                    "location {:?} has a non-finite coordinate",
                    location.label
                )));
            }
            if index
                .insert(location.label.clone(), LocationId(i))
                .is_some()
            {
                return Err(Error::invalid_input(format!(
                    "duplicate location label {:?}",
                    location.label
                )));
            }
        }

        let origin = *index
            .get(origin)
            .ok_or_else(|| Error::invalid_input(format!("origin {origin:?} is not in the catalog")))?;

        Ok(Self {
            locations,
            index,
            origin,
        })
    }

    /// Places every configured label on a random integer grid cell, then the
    /// origin at its fixed point. The same config always yields the same catalog.
    pub fn generate(config: &CatalogConfig) -> Result<Self> {
        if config.grid_size == 0 {
            return Err(Error::invalid_input("grid_size must be greater than zero"));
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        let mut locations = Vec::with_capacity(config.labels.len() + 1);
        for label in &config.labels {
            let x = rng.gen_range(0..config.grid_size);
            let y = rng.gen_range(0..config.grid_size);
            locations.push(Location::new(label.clone(), Point::new(x as f64, y as f64)));
        }
        locations.push(Location::new(config.origin.clone(), config.origin_point));

        log::debug!(
            "catalog: seed={} grid_size={} locations={}",
            config.seed,
            config.grid_size,
            locations.len()
        );

        Self::new(&config.origin, locations)
    }

    pub fn origin(&self) -> &str {
        &self.locations[self.origin.0].label
    }

    pub fn origin_id(&self) -> LocationId {
        self.origin
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Every label except the origin, in catalog order.
    pub fn selectable_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.locations
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.origin.0)
            .map(|(_, l)| l.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn id(&self, label: &str) -> Option<LocationId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: LocationId) -> &str {
        &self.locations[id.0].label
    }

    pub fn point(&self, label: &str) -> Result<Point> {
        self.resolve(label).map(|id| self.locations[id.0].point)
    }

    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        Ok(self.distance_between(a, b))
    }

    /// Sum of the distances between consecutive labels. Empty and
    /// single-element paths have length zero.
    pub fn path_length<S: AsRef<str>>(&self, path: &[S]) -> Result<f64> {
        let ids = path
            .iter()
            .map(|label| self.resolve(label.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.path_length_by_id(&ids))
    }

    #[inline]
    pub fn distance_between(&self, a: LocationId, b: LocationId) -> f64 {
        calculate_distance(&self.locations[a.0].point, &self.locations[b.0].point)
    }

    pub fn path_length_by_id(&self, path: &[LocationId]) -> f64 {
        path.windows(2)
            .fold(0.0, |total, leg| total + self.distance_between(leg[0], leg[1]))
    }

    fn resolve(&self, label: &str) -> Result<LocationId> {
        self.id(label).ok_or_else(|| Error::lookup(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Catalog {
        Catalog::new(
            "Start",
            vec![
                Location::new("Start", Point::new(0.0, 0.0)),
                Location::new("A", Point::new(0.0, 3.0)),
                Location::new("B", Point::new(4.0, 0.0)),
                Location::new("B'", Point::new(4.0, 0.0)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn distance_is_symmetric() {
        let catalog = triangle();
        let labels: Vec<&str> = catalog.locations().iter().map(|l| l.label.as_str()).collect();
        for a in &labels {
            for b in &labels {
                assert_eq!(catalog.distance(a, b).unwrap(), catalog.distance(b, a).unwrap());
            }
        }
        assert_eq!(catalog.distance("A", "B").unwrap(), 5.0);
    }

    #[test]
    fn distance_to_unknown_label_is_lookup_error() {
        let err = triangle().distance("Start", "Nowhere").unwrap_err();
        assert!(matches!(err, Error::Lookup(label) if label == "Nowhere"));
    }

    #[test]
    fn path_length_sums_consecutive_legs() {
        let catalog = triangle();
        assert_eq!(catalog.path_length(&["Start", "A", "B", "Start"]).unwrap(), 12.0);
        assert_eq!(catalog.path_length(&["A"]).unwrap(), 0.0);
        assert_eq!(catalog.path_length::<&str>(&[]).unwrap(), 0.0);
    }

    #[test]
    fn path_length_is_zero_only_for_coincident_legs() {
        let catalog = triangle();
        assert_eq!(catalog.path_length(&["B", "B'", "B"]).unwrap(), 0.0);
        assert!(catalog.path_length(&["B", "B'", "A"]).unwrap() > 0.0);
    }

    #[test]
    fn path_length_rejects_unknown_labels() {
        let err = triangle().path_length(&["Start", "Z", "Start"]).unwrap_err();
        assert!(matches!(err, Error::Lookup(_)));
    }

    #[test]
    fn construction_rejects_bad_input() {
        let dup = Catalog::new(
            "Start",
            vec![
                Location::new("Start", Point::default()),
                Location::new("Start", Point::new(1.0, 1.0)),
            ],
        );
        assert!(matches!(dup, Err(Error::InvalidInput(_))));

        let no_origin = Catalog::new("Start", vec![Location::new("A", Point::default())]);
        assert!(matches!(no_origin, Err(Error::InvalidInput(_))));

        let nan = Catalog::new(
            "Start",
            vec![Location::new("Start", Point::new(f64::NAN, 0.0))],
        );
        assert!(matches!(nan, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn generation_is_seeded_and_bounded() {
        let config = CatalogConfig::default();
        let first = Catalog::generate(&config).unwrap();
        let second = Catalog::generate(&config).unwrap();
        assert_eq!(first.locations(), second.locations());

        assert_eq!(first.len(), config.labels.len() + 1);
        assert_eq!(first.origin(), "Start");
        assert_eq!(first.point("Start").unwrap(), Point::new(0.0, 0.0));
        for location in first.locations() {
            assert!((0.0..10.0).contains(&location.point.x));
            assert!((0.0..10.0).contains(&location.point.y));
            assert_eq!(location.point.x.fract(), 0.0);
        }
        assert_eq!(first.selectable_labels().count(), config.labels.len());
        assert!(first.selectable_labels().all(|l| l != "Start"));
    }

    #[test]
    fn generation_rejects_empty_grid_and_origin_clash() {
        let empty_grid = CatalogConfig {
            grid_size: 0,
            ..CatalogConfig::default()
        };
        assert!(matches!(Catalog::generate(&empty_grid), Err(Error::InvalidInput(_))));

        let clash = CatalogConfig {
            labels: vec!["Start".to_string()],
            ..CatalogConfig::default()
        };
        assert!(matches!(Catalog::generate(&clash), Err(Error::InvalidInput(_))));
    }
}
