// src/domain.rs
//
// Typed columns for the normalized employment table.
//
// The wide Eurostat table is dynamically shaped; everything downstream of
// normalize() works on these fixed vocabularies instead of raw code strings.
// One vocabulary, held here and nowhere else — the GUI, CLI and export all
// read labels off these enums.

use crate::error::{PipelineError, Result};

/// One normalized data point: employment in the high-tech sector for a
/// (year, sex, unit, region) coordinate.
///
/// `value == None` is a real, representable state ("no data for this
/// coordinate"); it must never collapse to 0.0.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub year: u16,
    pub sex: Sex,
    pub unit: Unit,
    pub value: Option<f64>,
    /// NUTS geo code. Its length is load-bearing: 2 chars = country,
    /// 3 = NUTS-1, 4 = NUTS-2. Never trimmed or padded.
    pub geo: String,
    /// Human-readable place name resolved from the geo dictionary.
    pub location: String,
}

/* ---------------- Sex ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
    Total,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Female, Sex::Total, Sex::Male];

    /// Source code as found in the raw table ("F"/"M"/"T").
    pub fn from_code(code: &str) -> Option<Sex> {
        match code {
            "F" => Some(Sex::Female),
            "M" => Some(Sex::Male),
            "T" => Some(Sex::Total),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "Females",
            Sex::Male => "Males",
            Sex::Total => "Total",
        }
    }

    /// User-facing label → value. Accepts the display label and the short
    /// source code, case-insensitively. Anything else is an InvalidSelection.
    pub fn from_label(label: &str) -> Result<Sex> {
        match label.to_ascii_lowercase().as_str() {
            "f" | "female" | "females" => Ok(Sex::Female),
            "m" | "male" | "males" => Ok(Sex::Male),
            "t" | "total" => Ok(Sex::Total),
            _ => Err(PipelineError::InvalidSelection {
                field: "sex",
                value: s!(label),
                expected: "Females, Males, Total",
            }),
        }
    }
}

/* ---------------- Unit ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Percent of total employment (source code PC_EMP).
    Percent,
    /// Absolute head count in thousands (source code THS).
    Thousand,
}

impl Unit {
    pub const ALL: [Unit; 2] = [Unit::Thousand, Unit::Percent];

    pub fn from_code(code: &str) -> Option<Unit> {
        match code {
            "PC_EMP" => Some(Unit::Percent),
            "THS" => Some(Unit::Thousand),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Percent => "Percent",
            Unit::Thousand => "Thousand",
        }
    }

    /// Short selector label ("Rel." / "Abs." in the original UI).
    pub fn short_label(&self) -> &'static str {
        match self {
            Unit::Percent => "Rel.",
            Unit::Thousand => "Abs.",
        }
    }

    pub fn from_label(label: &str) -> Result<Unit> {
        match label.to_ascii_lowercase().trim_end_matches('.') {
            "rel" | "percent" | "pc_emp" => Ok(Unit::Percent),
            "abs" | "thousand" | "ths" => Ok(Unit::Thousand),
            _ => Err(PipelineError::InvalidSelection {
                field: "unit",
                value: s!(label),
                expected: "Rel. (Percent), Abs. (Thousand)",
            }),
        }
    }
}

/* ---------------- Level ---------------- */

/// Administrative level. Maps to a required geo-code length — a fixed
/// contract with the NUTS coding scheme (country = 2 chars, each
/// subdivision adds one), not configurable data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Country,
    Nuts1,
    Nuts2,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Country, Level::Nuts1, Level::Nuts2];

    pub fn geo_len(&self) -> usize {
        match self {
            Level::Country => 2,
            Level::Nuts1 => 3,
            Level::Nuts2 => 4,
        }
    }

    /// Inverse of `geo_len` for codes observed in normalized data.
    pub fn from_geo_len(len: usize) -> Option<Level> {
        match len {
            2 => Some(Level::Country),
            3 => Some(Level::Nuts1),
            4 => Some(Level::Nuts2),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Country => "Countries",
            Level::Nuts1 => "NUTS 1",
            Level::Nuts2 => "NUTS 2",
        }
    }

    pub fn from_label(label: &str) -> Result<Level> {
        // tolerate "nuts 1" / "nuts-1" / "nuts1"
        let lc = label.to_ascii_lowercase().replace(['-', ' '], "");
        match lc.as_str() {
            "country" | "countries" => Ok(Level::Country),
            "nuts1" => Ok(Level::Nuts1),
            "nuts2" => Ok(Level::Nuts2),
            _ => Err(PipelineError::InvalidSelection {
                field: "level",
                value: s!(label),
                expected: "Countries, NUTS 1, NUTS 2",
            }),
        }
    }
}

/* ---------------- Selection ---------------- */

/// The four-part user selection. Hash + Eq so it can key the selection
/// memo cache directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    pub year: u16,
    pub level: Level,
    pub sex: Sex,
    pub unit: Unit,
}

impl Selection {
    /// Does this observation match the selection tuple?
    #[inline]
    pub fn matches(&self, obs: &Observation) -> bool {
        obs.year == self.year
            && obs.geo.len() == self.level.geo_len()
            && obs.sex == self.sex
            && obs.unit == self.unit
    }
}
