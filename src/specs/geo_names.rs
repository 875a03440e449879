// src/specs/geo_names.rs
//! Spec for the `geo` dictionary: a two-column TSV mapping every geo code
//! the provider uses to its English display name (`DE<TAB>Germany ...`).
//! The normalizer treats a code missing from this map as schema drift.

use std::collections::HashMap;

use crate::config::consts::GEO_DIC_URL;
use crate::core::net;
use crate::csv::parse_rows;
use crate::error::{PipelineError, Result};

pub fn fetch() -> Result<HashMap<String, String>> {
    let text = net::http_get(GEO_DIC_URL)?;
    parse_dic(&text)
}

pub fn parse_dic(text: &str) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for row in parse_rows(text, '\t') {
        let [code, name, ..] = row.as_slice() else {
            return Err(PipelineError::Parse(format!(
                "geo dictionary line without TAB: {row:?}"
            )));
        };
        map.insert(s!(code.trim()), s!(name.trim()));
    }
    if map.is_empty() {
        return Err(PipelineError::Parse(s!("geo dictionary is empty")));
    }
    Ok(map)
}
