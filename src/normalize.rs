// src/normalize.rs
//
// Wide → long normalization of the statistical table. Pure and
// deterministic: same inputs, same output set (order follows input order,
// but nothing downstream depends on it).

use std::collections::HashMap;

use crate::config::consts::{AGGREGATE_GEOS, GERMANY, GERMANY_LONG, NACE_HIGH_TECH};
use crate::domain::{Observation, Sex, Unit};
use crate::error::{PipelineError, Result};
use crate::specs::dataset::RawTable;

/// Normalize the raw wide table into one `Observation` per (row, year).
///
/// - keeps only the high-tech sector aggregate (`HTC`); the classification
///   column is dropped by construction,
/// - excludes supranational aggregate geos entirely,
/// - resolves `location` from the geo dictionary; a missing entry is
///   schema drift and fails the whole run,
/// - recodes sex/unit into the fixed vocabularies,
/// - applies the single historical-name correction (reunification-era
///   Germany label → "Germany").
pub fn normalize(
    raw: &RawTable,
    locations: &HashMap<String, String>,
) -> Result<Vec<Observation>> {
    let mut out = Vec::new();

    for row in &raw.rows {
        if row.nace != NACE_HIGH_TECH {
            continue;
        }
        if AGGREGATE_GEOS.contains(&row.geo.as_str()) {
            continue;
        }

        let sex = Sex::from_code(&row.sex).ok_or_else(|| {
            PipelineError::Parse(format!("unknown sex code {:?} for geo {:?}", row.sex, row.geo))
        })?;
        let unit = Unit::from_code(&row.unit).ok_or_else(|| {
            PipelineError::Parse(format!("unknown unit code {:?} for geo {:?}", row.unit, row.geo))
        })?;

        let location = locations
            .get(&row.geo)
            .ok_or_else(|| PipelineError::SchemaDrift(row.geo.clone()))?;
        let location = if location == GERMANY_LONG {
            s!(GERMANY)
        } else {
            location.clone()
        };

        // Unpivot: one observation per year column.
        for (ix, &year) in raw.years.iter().enumerate() {
            out.push(Observation {
                year,
                sex,
                unit,
                value: row.values.get(ix).copied().flatten(),
                geo: row.geo.clone(),
                location: location.clone(),
            });
        }
    }

    Ok(out)
}
