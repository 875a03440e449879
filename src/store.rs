// src/store.rs
//
// Local cache of the three remote documents plus the load-or-fetch
// orchestration that turns them into in-memory data. The remote sources
// are fetched once per process lifetime (or on explicit refresh) and are
// immutable afterwards; cache writes are best-effort.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::config::consts::{
    BOUNDARIES_FILE, DATASET_FILE, DATASET_URL, GEO_DIC_FILE, GEO_DIC_URL, NUTS_LEVELS, STORE_DIR,
};
use crate::core::net;
use crate::domain::Observation;
use crate::error::Result;
use crate::normalize::normalize;
use crate::specs::{boundaries, dataset, geo_names};
use crate::specs::boundaries::Boundary;

/// Everything the app needs in memory, derived once per fetch.
#[derive(Clone, Debug, Default)]
pub struct LoadedData {
    pub observations: Vec<Observation>,
    pub boundaries: Vec<Boundary>,
}

pub fn store_path(file: &str) -> PathBuf {
    PathBuf::from(STORE_DIR).join(file)
}

/// Read the cached copy of a document, or fetch and cache it.
/// `refresh` skips the cache read (but still writes the fresh copy).
fn cached_or_fetch(file: &str, url: &str, refresh: bool) -> Result<String> {
    let path = store_path(file);

    if !refresh {
        if let Ok(text) = fs::read_to_string(&path) {
            logd!("Cache: hit {}", path.display());
            return Ok(text);
        }
    }

    logf!("Fetch: {url}");
    let text = net::http_get(url)?;

    // Best-effort cache write; a read-only disk shouldn't kill the run.
    if let Err(e) = fs::create_dir_all(STORE_DIR).and_then(|_| fs::write(&path, &text)) {
        loge!("Cache: write failed {}: {}", path.display(), e);
    }

    Ok(text)
}

/// Load the statistical table + geo dictionary and normalize.
pub fn load_observations(refresh: bool) -> Result<Vec<Observation>> {
    let raw_text = cached_or_fetch(DATASET_FILE, DATASET_URL, refresh)?;
    let raw = dataset::parse_tsv(&raw_text)?;

    let dic_text = cached_or_fetch(GEO_DIC_FILE, GEO_DIC_URL, refresh)?;
    let locations: HashMap<String, String> = geo_names::parse_dic(&dic_text)?;

    let obs = normalize(&raw, &locations)?;
    logf!(
        "Load: {} raw rows × {} years → {} observations",
        raw.rows.len(),
        raw.years.len(),
        obs.len()
    );
    Ok(obs)
}

/// Load and union the per-level boundary documents.
pub fn load_boundaries(refresh: bool) -> Result<Vec<Boundary>> {
    let mut out = Vec::new();
    for level in 0..NUTS_LEVELS {
        let file = BOUNDARIES_FILE.replace("{}", &level.to_string());
        let url = boundaries::level_url(level);
        let text = cached_or_fetch(&file, &url, refresh)?;
        let fc = boundaries::parse_collection(&text)?;
        boundaries::flatten_into(&fc, &mut out);
    }
    logf!("Load: {} boundary features", out.len());
    Ok(out)
}

/// The whole pipeline input in one call.
pub fn load(refresh: bool) -> Result<LoadedData> {
    Ok(LoadedData {
        observations: load_observations(refresh)?,
        boundaries: load_boundaries(refresh)?,
    })
}
