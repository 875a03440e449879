// tests/boundaries.rs
//
// Boundary spec on inline GeoJSON: flattening, the id/na properties,
// skipping of unusable features, union across levels, bbox.

use htec_map::specs::boundaries::{bounding_box, flatten_into, parse_collection};

const LEVEL0: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "id": "DE", "na": "Deutschland" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[6.0, 47.0], [15.0, 47.0], [15.0, 55.0], [6.0, 55.0], [6.0, 47.0]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "id": "PT", "na": "Portugal" },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [
          [[[-9.5, 37.0], [-6.2, 37.0], [-6.2, 42.1], [-9.5, 42.1], [-9.5, 37.0]]],
          [[[-17.3, 32.6], [-16.2, 32.6], [-16.2, 33.1], [-17.3, 33.1], [-17.3, 32.6]]]
        ]
      }
    },
    {
      "type": "Feature",
      "properties": { "na": "no id, skipped" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "id": "XX" },
      "geometry": { "type": "Point", "coordinates": [1.0, 2.0] }
    }
  ]
}"#;

const LEVEL1: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "id": "DE1", "na": "Baden-Württemberg" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[7.5, 47.5], [10.5, 47.5], [10.5, 49.8], [7.5, 49.8], [7.5, 47.5]]]
      }
    }
  ]
}"#;

#[test]
fn flattens_polygons_and_multipolygons() {
    let fc = parse_collection(LEVEL0).unwrap();
    let mut out = Vec::new();
    flatten_into(&fc, &mut out);

    // the id-less and the non-polygonal features are skipped
    assert_eq!(out.len(), 2);

    let de = &out[0];
    assert_eq!(de.id, "DE");
    assert_eq!(de.name, "Deutschland");
    assert_eq!(de.rings.len(), 1);
    assert_eq!(de.rings[0][0], [6.0, 47.0]);

    // one outer ring per polygon of the multipolygon
    let pt = &out[1];
    assert_eq!(pt.id, "PT");
    assert_eq!(pt.rings.len(), 2);
}

#[test]
fn union_across_levels_keeps_id_scheme() {
    let mut out = Vec::new();
    flatten_into(&parse_collection(LEVEL0).unwrap(), &mut out);
    flatten_into(&parse_collection(LEVEL1).unwrap(), &mut out);

    let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["DE", "PT", "DE1"]);
    // code length still encodes the level after the union
    assert!(out.iter().all(|b| (2..=4).contains(&b.id.len())));
}

#[test]
fn bbox_spans_all_rings() {
    let mut out = Vec::new();
    flatten_into(&parse_collection(LEVEL0).unwrap(), &mut out);
    let (min, max) = bounding_box(&out).unwrap();
    assert_eq!(min, [-17.3, 32.6]);
    assert_eq!(max, [15.0, 55.0]);

    assert!(bounding_box(&[]).is_none());
}

#[test]
fn garbage_is_a_parse_error() {
    assert!(parse_collection("not geojson at all").is_err());
}
