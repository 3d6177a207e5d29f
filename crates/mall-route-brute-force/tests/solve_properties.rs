use mall_route_brute_force::{estimate_time, solve};
use mall_route_core::{Catalog, CatalogConfig, Location};

fn from_json(json: &str) -> Catalog {
    let locations: Vec<Location> = serde_json::from_str(json).unwrap();
    Catalog::new("Start", locations).unwrap()
}

fn right_triangle() -> Catalog {
    from_json(
        r#"[
            {"label": "Start", "point": {"x": 0.0, "y": 0.0}},
            {"label": "A", "point": {"x": 0.0, "y": 3.0}},
            {"label": "B", "point": {"x": 4.0, "y": 0.0}}
        ]"#,
    )
}

fn unit_square() -> Catalog {
    from_json(
        r#"[
            {"label": "Start", "point": {"x": 0.0, "y": 0.0}},
            {"label": "A", "point": {"x": 0.0, "y": 1.0}},
            {"label": "B", "point": {"x": 1.0, "y": 1.0}},
            {"label": "C", "point": {"x": 1.0, "y": 0.0}}
        ]"#,
    )
}

/// Every ordering of `items`, built by recursive insertion rather than the
/// solver's own generator.
fn all_orderings(items: &[String]) -> Vec<Vec<String>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for rest in all_orderings(&items[1..]) {
        for slot in 0..=rest.len() {
            let mut ordering = rest.clone();
            ordering.insert(slot, items[0].clone());
            out.push(ordering);
        }
    }
    out
}

fn closed(origin: &str, ordering: &[String]) -> Vec<String> {
    let mut path = vec![origin.to_string()];
    path.extend(ordering.iter().cloned());
    path.push(origin.to_string());
    path
}

#[test]
fn right_triangle_costs_twelve() {
    let catalog = right_triangle();
    let route = solve(&catalog, "Start", &["A", "B"]).unwrap();

    assert_eq!(route.distance, 12.0);
    assert!(
        route.path == vec!["Start", "A", "B", "Start"]
            || route.path == vec!["Start", "B", "A", "Start"]
    );
    assert!((estimate_time(route.distance, route.stop_count()) - 2.2).abs() < 1e-12);
}

#[test]
fn ties_keep_the_first_generated_ordering() {
    let catalog = right_triangle();
    let forward = solve(&catalog, "Start", &["A", "B"]).unwrap();
    assert_eq!(forward.path, vec!["Start", "A", "B", "Start"]);
    let backward = solve(&catalog, "Start", &["B", "A"]).unwrap();
    assert_eq!(backward.path, vec!["Start", "B", "A", "Start"]);

    // Clockwise and counter-clockwise laps of the square both cost 4.
    let catalog = unit_square();
    let route = solve(&catalog, "Start", &["A", "B", "C"]).unwrap();
    assert_eq!(route.distance, 4.0);
    assert_eq!(route.path, vec!["Start", "A", "B", "C", "Start"]);

    let route = solve(&catalog, "Start", &["C", "B", "A"]).unwrap();
    assert_eq!(route.path, vec!["Start", "C", "B", "A", "Start"]);

    // Diagonal-first input: the winner is the first optimal ordering in
    // positional order, [A, B, C] here is reached before [C, B, A].
    let route = solve(&catalog, "Start", &["B", "A", "C"]).unwrap();
    assert_eq!(route.path, vec!["Start", "A", "B", "C", "Start"]);
}

#[test]
fn single_stop_is_out_and_back() {
    let catalog = Catalog::generate(&CatalogConfig::default()).unwrap();
    for label in catalog.selectable_labels() {
        let route = solve(&catalog, "Start", &[label]).unwrap();
        assert_eq!(route.path, vec!["Start", label, "Start"]);
        assert_eq!(route.distance, 2.0 * catalog.distance("Start", label).unwrap());
    }
}

#[test]
fn beats_every_alternative_ordering() {
    for seed in [1, 7, 42, 1234] {
        let config = CatalogConfig {
            seed,
            grid_size: 25,
            ..CatalogConfig::default()
        };
        let catalog = Catalog::generate(&config).unwrap();
        let labels: Vec<String> = catalog.selectable_labels().map(str::to_string).collect();

        for size in 0..=5 {
            let selection = &labels[..size];
            let route = solve(&catalog, "Start", selection).unwrap();

            assert_eq!(route.path.len(), size + 2);
            assert_eq!(catalog.path_length(&route.path).unwrap(), route.distance);

            let alternatives = all_orderings(selection);
            let expected_count: usize = (1..=size).product();
            assert_eq!(alternatives.len(), expected_count);

            let mut best = f64::INFINITY;
            for ordering in &alternatives {
                let cost = catalog.path_length(&closed("Start", ordering)).unwrap();
                assert!(route.distance <= cost, "seed {seed}: {cost} < {}", route.distance);
                best = best.min(cost);
            }
            assert_eq!(route.distance, best);
        }
    }
}

#[test]
fn distances_are_non_negative() {
    let catalog = Catalog::generate(&CatalogConfig::default()).unwrap();
    let labels: Vec<&str> = catalog.locations().iter().map(|l| l.label.as_str()).collect();
    for a in &labels {
        for b in &labels {
            let d = catalog.distance(a, b).unwrap();
            assert!(d >= 0.0);
            assert_eq!(d, catalog.distance(b, a).unwrap());
        }
    }
}
