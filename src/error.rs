// src/error.rs
//
// Typed errors for the fetch → normalize → select pipeline.
// Empty selections are NOT an error (they render as "no data");
// everything here is a genuine failure that must reach the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A geo code in the statistical table has no entry in the geo
    /// dictionary. The remote schema drifted; surface it, never mask it
    /// with a null location.
    #[error("geo code {0:?} has no entry in the geo dictionary (source schema drift)")]
    SchemaDrift(String),

    /// Caller passed a level/sex/unit label outside the fixed domain.
    /// This is a bug in the calling layer, not a data condition.
    #[error("invalid {field}: {value:?} (expected one of: {expected})")]
    InvalidSelection {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Remote fetch failed. The pipeline either has data or it doesn't;
    /// there is no partial-data mode.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The source document didn't parse as the expected shape.
    #[error("malformed source document: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
