use std::sync::Arc;

use borderline::{catalog, CountryCatalog, PolygonCountryMatcher, PolygonError, NOT_A_COUNTRY_CODE};

const FIXTURE: &str = include_str!("fixtures/countries.geojson");

fn fixture_catalog() -> Arc<CountryCatalog> {
    Arc::new(catalog::from_geojson_str(FIXTURE).expect("fixture catalog"))
}

fn matcher() -> PolygonCountryMatcher {
    PolygonCountryMatcher::new(fixture_catalog())
}

fn codes(matcher: &PolygonCountryMatcher, polygon: &[[f64; 2]]) -> Vec<String> {
    matcher
        .find_countries_by_polygon(polygon)
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect()
}

fn bbox(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<[f64; 2]> {
    vec![
        [min_x, min_y],
        [min_x, max_y],
        [max_x, max_y],
        [max_x, min_y],
        [min_x, min_y],
    ]
}

#[test]
fn test_fixture_loads_in_order() {
    let catalog = fixture_catalog();
    let all: Vec<&str> = catalog.all().iter().map(|r| r.iso_code.as_str()).collect();
    assert_eq!(all, vec!["WST", "EST", "-99", "ARC", "BRK", "HOL", "ISN"]);
}

#[test]
fn test_whole_globe_matches_every_country() {
    let m = matcher();
    let globe = [
        [-179.0, -89.0],
        [-179.0, 89.0],
        [179.0, 89.0],
        [179.0, -89.0],
        [-179.0, -89.0],
    ];

    let expected: Vec<String> = m
        .catalog()
        .all()
        .iter()
        .filter(|r| r.iso_code != NOT_A_COUNTRY_CODE)
        .map(|r| r.iso_code.clone())
        .collect();

    assert_eq!(codes(&m, &globe), expected);
}

#[test]
fn test_open_ocean_is_empty() {
    let m = matcher();
    assert!(codes(&m, &bbox(-140.0, -40.0, -139.0, -39.0)).is_empty());
}

#[test]
fn test_island_nation_alone() {
    let m = matcher();
    let result = m
        .find_countries_by_polygon(&bbox(99.0, -11.0, 103.0, -7.0))
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Islandia");
    assert_eq!(result[0].code, "ISN");
}

#[test]
fn test_border_crossing_keeps_catalog_order() {
    let m = matcher();
    assert_eq!(codes(&m, &bbox(8.0, 2.0, 12.0, 4.0)), vec!["WST", "EST"]);
}

#[test]
fn test_repeated_queries_identical() {
    let m = matcher();
    let query = bbox(-30.0, -30.0, 45.0, 35.0);
    let first = m.find_countries_by_polygon(&query).unwrap();
    for _ in 0..5 {
        assert_eq!(m.find_countries_by_polygon(&query).unwrap(), first);
    }
    let codes: Vec<&str> = first.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["WST", "EST", "ARC", "HOL"]);
}

#[test]
fn test_non_country_never_returned() {
    let m = matcher();
    // Entirely inside the contested strip
    assert!(codes(&m, &bbox(21.0, 1.0, 24.0, 4.0)).is_empty());
    // Spanning Eastland and the strip
    assert_eq!(codes(&m, &bbox(18.0, 1.0, 24.0, 4.0)), vec!["EST"]);
}

#[test]
fn test_edge_contact_only_is_not_a_match() {
    let m = matcher();
    // Shares Westland's western edge along x = 0
    assert!(codes(&m, &bbox(-5.0, 0.0, 0.0, 5.0)).is_empty());
    // Touches Westland's corner at (10, 10) and Eastland's corner
    assert!(codes(&m, &bbox(10.0, 10.0, 11.0, 11.0)).is_empty());
}

#[test]
fn test_inside_hole_is_not_a_match() {
    let m = matcher();
    assert!(codes(&m, &bbox(-16.0, -16.0, -14.0, -14.0)).is_empty());
    assert_eq!(codes(&m, &bbox(-19.0, -19.0, -18.0, -18.0)), vec!["HOL"]);
}

#[test]
fn test_second_island_of_multipolygon() {
    let m = matcher();
    assert_eq!(codes(&m, &bbox(40.5, 30.5, 41.0, 31.0)), vec!["ARC"]);
    // Between the islands
    assert!(codes(&m, &bbox(34.0, 30.5, 38.0, 31.0)).is_empty());
}

#[test]
fn test_degenerate_part_is_skipped() {
    let m = matcher();
    assert!(codes(&m, &bbox(49.0, 49.0, 53.0, 51.0)).is_empty());
    assert_eq!(codes(&m, &bbox(61.0, 61.0, 63.0, 63.0)), vec!["BRK"]);
}

#[test]
fn test_self_intersecting_query_matches() {
    let m = matcher();
    let bowtie = [[1.0, 1.0], [9.0, 9.0], [9.0, 1.0], [1.0, 9.0], [1.0, 1.0]];
    assert_eq!(codes(&m, &bowtie), vec!["WST"]);
}

#[test]
fn test_collinear_query_matches_nothing() {
    let m = matcher();
    let line = [[1.0, 1.0], [5.0, 5.0], [9.0, 9.0], [1.0, 1.0]];
    assert!(codes(&m, &line).is_empty());
}

#[test]
fn test_invalid_polygons_rejected() {
    let m = matcher();

    for n in 0..4 {
        let short: Vec<[f64; 2]> = vec![[0.0, 0.0]; n];
        assert_eq!(
            m.find_countries_by_polygon(&short),
            Err(PolygonError::TooFewPoints { count: n })
        );
    }

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut query = bbox(1.0, 1.0, 2.0, 2.0);
        query[2][1] = bad;
        assert_eq!(
            m.find_countries_by_polygon(&query),
            Err(PolygonError::NonFinite { index: 2 })
        );
    }
}

#[test]
fn test_open_ring_matches_closed_ring() {
    let m = matcher();
    let closed = bbox(8.0, 2.0, 12.0, 4.0);
    let open = &closed[..4];
    assert_eq!(
        m.find_countries_by_polygon(open).unwrap(),
        m.find_countries_by_polygon(&closed).unwrap()
    );
}

#[test]
fn test_sequential_and_parallel_agree() {
    let parallel = matcher();
    let sequential = matcher().with_parallel(false);

    for query in [
        bbox(-179.0, -89.0, 179.0, 89.0),
        bbox(8.0, 2.0, 12.0, 4.0),
        bbox(-140.0, -40.0, -139.0, -39.0),
    ] {
        assert_eq!(
            parallel.find_countries_by_polygon(&query).unwrap(),
            sequential.find_countries_by_polygon(&query).unwrap()
        );
    }
}

#[tokio::test]
async fn test_async_and_sync_agree() {
    let m = matcher();

    let queries: Vec<Vec<Vec<f64>>> = [
        bbox(-179.0, -89.0, 179.0, 89.0),
        bbox(99.0, -11.0, 103.0, -7.0),
        bbox(-140.0, -40.0, -139.0, -39.0),
    ]
    .iter()
    .map(|q| q.iter().map(|p| p.to_vec()).collect())
    .collect();

    let deferred = futures::future::join_all(
        queries
            .iter()
            .map(|q| m.find_countries_by_polygon_async(q.clone())),
    )
    .await;

    for (query, result) in queries.iter().zip(deferred) {
        assert_eq!(result.unwrap(), m.find_countries_by_polygon(query).unwrap());
    }
}
