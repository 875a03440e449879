// src/specs/dataset.rs
//! Spec for the statistical table.
//!
//! The dissemination API serves the dataset as one wide TSV:
//!
//! ```text
//! freq,nace_r2,sex,unit,geo\TIME_PERIOD<TAB>2008 <TAB>2009 <TAB>...
//! A,HTC,F,PC_EMP,AT<TAB>4.6 <TAB>: <TAB>5.1 e<TAB>...
//! ```
//!
//! The first header cell overloads a column name with the comma-joined
//! dimension list; the last dimension carries a `\` plus the time-axis
//! label. We resolve dimensions by *name*, so both the legacy bulk header
//! (`geo\time`) and the current one (`geo\TIME_PERIOD`) parse, and a
//! leading `freq` dimension is tolerated and ignored.

use crate::config::consts::DATASET_URL;
use crate::core::net;
use crate::error::{PipelineError, Result};

/// One wide row: the dimension key plus one cell per year column.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRow {
    pub nace: String,
    pub sex: String,
    pub unit: String,
    pub geo: String,
    /// Parallel to `RawTable::years`; `None` = missing (`:`).
    pub values: Vec<Option<f64>>,
}

/// The raw wide table as received. Not retained past normalization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    pub years: Vec<u16>,
    pub rows: Vec<RawRow>,
}

pub fn fetch() -> Result<RawTable> {
    let text = net::http_get(DATASET_URL)?;
    parse_tsv(&text)
}

pub fn parse_tsv(text: &str) -> Result<RawTable> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| PipelineError::Parse(s!("empty dataset document")))?;
    let mut cells = header.split('\t');

    // First cell: "freq,nace_r2,sex,unit,geo\TIME_PERIOD"
    let dim_cell = cells.next().unwrap_or_default();
    let dims: Vec<&str> = dim_cell
        .split(',')
        .map(|d| d.split('\\').next().unwrap_or(d).trim())
        .collect();

    let dim_ix = |name: &str| -> Result<usize> {
        dims.iter().position(|d| *d == name).ok_or_else(|| {
            PipelineError::Parse(format!("dimension {name:?} not found in header {dim_cell:?}"))
        })
    };
    let ix_nace = dim_ix("nace_r2")?;
    let ix_sex = dim_ix("sex")?;
    let ix_unit = dim_ix("unit")?;
    let ix_geo = dim_ix("geo")?;

    // Remaining header cells are the year columns.
    let years = cells
        .map(|c| {
            c.trim().parse::<u16>().map_err(|_| {
                PipelineError::Parse(format!("year column header {:?} is not a year", c.trim()))
            })
        })
        .collect::<Result<Vec<u16>>>()?;
    if years.is_empty() {
        return Err(PipelineError::Parse(s!("dataset header has no year columns")));
    }

    let mut rows = Vec::new();
    for line in lines {
        let mut cells = line.split('\t');
        let key_cell = cells.next().unwrap_or_default();
        let key: Vec<&str> = key_cell.split(',').map(str::trim).collect();
        if key.len() != dims.len() {
            return Err(PipelineError::Parse(format!(
                "row key {key_cell:?} has {} parts, header has {}",
                key.len(),
                dims.len()
            )));
        }

        let values = cells
            .map(|c| parse_value(c))
            .collect::<Result<Vec<Option<f64>>>>()?;
        if values.len() != years.len() {
            return Err(PipelineError::Parse(format!(
                "row {key_cell:?} has {} value cells, expected {}",
                values.len(),
                years.len()
            )));
        }

        rows.push(RawRow {
            nace: s!(key[ix_nace]),
            sex: s!(key[ix_sex]),
            unit: s!(key[ix_unit]),
            geo: s!(key[ix_geo]),
            values,
        });
    }

    Ok(RawTable { years, rows })
}

/// One value cell. `:` (plus optional flag letters) means missing; numeric
/// cells may carry trailing flag letters like `5.1 e`. Missing stays
/// `None` — never 0.0.
fn parse_value(cell: &str) -> Result<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || cell.starts_with(':') {
        return Ok(None);
    }
    let number = cell.split_whitespace().next().unwrap_or(cell);
    number
        .parse::<f64>()
        .map(Some)
        .map_err(|_| PipelineError::Parse(format!("bad value cell {cell:?}")))
}
