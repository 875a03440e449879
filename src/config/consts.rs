// src/config/consts.rs

// Net config — Eurostat SDMX dissemination API + Nuts2json
pub const DATASET_CODE: &str = "htec_emp_reg2";
pub const DATASET_URL: &str = "https://ec.europa.eu/eurostat/api/dissemination/sdmx/2.1/data/htec_emp_reg2?format=TSV&compressed=false";
pub const GEO_DIC_URL: &str =
    "https://ec.europa.eu/eurostat/api/dissemination/files?file=dic%2Fen%2Fgeo.dic";
// One document per NUTS level; {} is replaced with 0/1/2
pub const NUTS2JSON_URL: &str =
    "https://raw.githubusercontent.com/eurostat/Nuts2json/master/pub/v2/2021/4326/20M/nutsrg_{}.json";
pub const NUTS_LEVELS: usize = 3;

// Source domain constants (fixed contracts with the coding scheme,
// not user-configurable)
pub const NACE_HIGH_TECH: &str = "HTC";
/// Supranational aggregates. Not drawable as single regions at any level
/// and they'd corrupt length-based level filtering; excluded entirely.
pub const AGGREGATE_GEOS: [&str; 4] = ["EU27_2020", "EU28", "EU15", "EA19"];
/// The one manual name correction the pipeline applies.
pub const GERMANY_LONG: &str = "Germany (until 1990 former territory of the FRG)";
pub const GERMANY: &str = "Germany";

// Observed dataset coverage. The GUI slider uses this range; the selector
// itself does not enforce it (the data is authoritative).
pub const YEAR_MIN: u16 = 2008;
pub const YEAR_MAX: u16 = 2021;

// Local cache (the run log lives alongside the cached documents)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DATASET_FILE: &str = "htec_emp_reg2.tsv";
pub const GEO_DIC_FILE: &str = "geo.dic";
// {} is replaced with the NUTS level
pub const BOUNDARIES_FILE: &str = "nutsrg_{}.json";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "selection";

// Net
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "htec_map/0.1";
