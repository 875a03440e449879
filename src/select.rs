// src/select.rs
//
// Selection filtering over the normalized observation slice.
//
// - select():       pure index filter for a typed Selection
// - SelectionView:  zero-copy view (row indices into the slice)
// - SelectionCache: explicit memo map Selection → indices; the observation
//                   set is immutable after normalize, so entries never go
//                   stale and no eviction is needed
// - select_labeled(): label-string front door for the CLI; surfaces
//                   InvalidSelection before any filtering happens

use std::collections::HashMap;

use crate::domain::{Level, Observation, Selection, Sex, Unit};
use crate::error::Result;

/// Return the indices of all observations matching `sel`.
/// Zero matches is a legitimate result, not an error.
pub fn select(observations: &[Observation], sel: &Selection) -> Vec<usize> {
    observations
        .iter()
        .enumerate()
        .filter(|(_, obs)| sel.matches(obs))
        .map(|(ix, _)| ix)
        .collect()
}

/// Parse label strings, then filter. Unknown labels fail with
/// InvalidSelection — never a silent fallback to a default mapping.
pub fn select_labeled(
    observations: &[Observation],
    year: u16,
    level: &str,
    sex: &str,
    unit: &str,
) -> Result<Vec<usize>> {
    let sel = Selection {
        year,
        level: Level::from_label(level)?,
        sex: Sex::from_label(sex)?,
        unit: Unit::from_label(unit)?,
    };
    Ok(select(observations, &sel))
}

/// Zero-copy filtered view for display/export.
/// Holds row indices into the canonical observation slice.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    /// Positions of kept rows in the observation slice
    pub row_ix: Vec<usize>,
    obs: &'a [Observation],
}

impl<'a> SelectionView<'a> {
    pub fn from_observations(obs: &'a [Observation], sel: &Selection) -> Self {
        Self {
            row_ix: select(obs, sel),
            obs,
        }
    }

    /// Build a view directly from precomputed indices (cache hit path).
    pub fn from_indices(obs: &'a [Observation], row_ix: Vec<usize>) -> Self {
        Self { row_ix, obs }
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }
    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    /// Borrow a single observation by projected index (no cloning).
    pub fn get(&self, i: usize) -> Option<&Observation> {
        self.row_ix.get(i).and_then(|&ix| self.obs.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.row_ix.iter().filter_map(|&ix| self.obs.get(ix))
    }

    /// Display order for the table dump: descending by value, missing
    /// values last, geo as tie-breaker so the order is deterministic.
    pub fn sort_by_value_desc(&mut self) {
        let obs = self.obs;
        self.row_ix.sort_by(|&a, &b| {
            let va = obs[a].value;
            let vb = obs[b].value;
            match (va, vb) {
                (Some(x), Some(y)) => y
                    .partial_cmp(&x)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| obs[a].geo.cmp(&obs[b].geo)),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => obs[a].geo.cmp(&obs[b].geo),
            }
        });
    }

    /// Materialize owned string rows (for the table/export boundary).
    /// Column shape: Year, Sex, Unit, Value, Geo, Location.
    pub fn to_owned_rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|o| {
                vec![
                    o.year.to_string(),
                    s!(o.sex.label()),
                    s!(o.unit.label()),
                    o.value.map(|v| v.to_string()).unwrap_or_default(),
                    o.geo.clone(),
                    o.location.clone(),
                ]
            })
            .collect()
    }

    pub fn headers() -> Vec<String> {
        ["Year", "Sex", "Unit", "Value", "Geo", "Location"]
            .iter()
            .map(|h| s!(*h))
            .collect()
    }
}

/// Process-lifetime memo of selection results. The input space is tiny
/// (14 years × 3 levels × 3 sexes × 2 units), so a plain map with no
/// eviction is the whole policy.
#[derive(Debug, Default)]
pub struct SelectionCache {
    map: HashMap<Selection, Vec<usize>>,
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or compute the row indices for `sel`.
    pub fn get_or_select(&mut self, observations: &[Observation], sel: Selection) -> &[usize] {
        self.map
            .entry(sel)
            .or_insert_with(|| select(observations, &sel))
    }

    /// Drop everything (after a data refresh).
    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
