// src/specs/boundaries.rs
//! Spec for the boundary geometry: three Nuts2json documents (levels 0..2),
//! each a GeoJSON FeatureCollection where `properties.id` matches the
//! dataset's geo codes and `properties.na` is the region name.
//!
//! The union of the three feature lists is flattened into render-friendly
//! records up front so the GUI never touches GeoJSON types. Features
//! without an `id` or a polygonal geometry are skipped — an observation
//! whose geo has no boundary simply draws nothing.

use geojson::{FeatureCollection, Value};

use crate::config::consts::{NUTS2JSON_URL, NUTS_LEVELS};
use crate::core::net;
use crate::error::{PipelineError, Result};

/// One drawable region: outer ring(s) in WGS84 lon/lat order.
/// Inner rings (holes) are ignored at 1:20M scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Boundary {
    pub id: String,
    pub name: String,
    pub rings: Vec<Vec<[f64; 2]>>,
}

pub fn level_url(level: usize) -> String {
    NUTS2JSON_URL.replace("{}", &level.to_string())
}

/// Fetch and union all levels into one id-addressable collection.
pub fn fetch_all() -> Result<Vec<Boundary>> {
    let mut out = Vec::new();
    for level in 0..NUTS_LEVELS {
        let url = level_url(level);
        let text = net::http_get(&url)?;
        let fc = parse_collection(&text)?;
        flatten_into(&fc, &mut out);
    }
    Ok(out)
}

pub fn parse_collection(text: &str) -> Result<FeatureCollection> {
    text.parse::<FeatureCollection>()
        .map_err(|e| PipelineError::Parse(format!("boundary document: {e}")))
}

/// Append every usable feature of `fc` to `out` as a `Boundary`.
pub fn flatten_into(fc: &FeatureCollection, out: &mut Vec<Boundary>) {
    for feature in &fc.features {
        let Some(id) = feature.property("id").and_then(|v| v.as_str()) else {
            continue;
        };
        let name = feature
            .property("na")
            .and_then(|v| v.as_str())
            .unwrap_or(id);
        let Some(geometry) = &feature.geometry else {
            continue;
        };

        let mut rings: Vec<Vec<[f64; 2]>> = Vec::new();
        match &geometry.value {
            Value::Polygon(poly) => push_outer_ring(poly, &mut rings),
            Value::MultiPolygon(polys) => {
                for poly in polys {
                    push_outer_ring(poly, &mut rings);
                }
            }
            _ => continue,
        }
        if rings.is_empty() {
            continue;
        }

        out.push(Boundary {
            id: s!(id),
            name: s!(name),
            rings,
        });
    }
}

fn push_outer_ring(poly: &[Vec<Vec<f64>>], rings: &mut Vec<Vec<[f64; 2]>>) {
    // GeoJSON polygon = [outer, hole, hole, ...]
    let Some(outer) = poly.first() else { return };
    let ring: Vec<[f64; 2]> = outer
        .iter()
        .filter(|pos| pos.len() >= 2)
        .map(|pos| [pos[0], pos[1]])
        .collect();
    if ring.len() >= 3 {
        rings.push(ring);
    }
}

/// Bounding box over all rings: ([min_lon, min_lat], [max_lon, max_lat]).
pub fn bounding_box(boundaries: &[Boundary]) -> Option<([f64; 2], [f64; 2])> {
    let mut min = [f64::INFINITY, f64::INFINITY];
    let mut max = [f64::NEG_INFINITY, f64::NEG_INFINITY];
    let mut any = false;
    for b in boundaries {
        for ring in &b.rings {
            for p in ring {
                any = true;
                min[0] = min[0].min(p[0]);
                min[1] = min[1].min(p[1]);
                max[0] = max[0].max(p[0]);
                max[1] = max[1].max(p[1]);
            }
        }
    }
    any.then_some((min, max))
}
