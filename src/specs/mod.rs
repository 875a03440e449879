// src/specs/mod.rs
//! # Remote source "specs"
//!
//! One module per remote document, each encoding *where the ground truth
//! lives in the source format* and *how to read it tolerantly*:
//!
//! - `dataset` — the wide `htec_emp_reg2` TSV from the SDMX dissemination
//!   API (dimension header with the overloaded `geo\TIME_PERIOD` key, year
//!   columns, `:` for missing, trailing flag letters on values).
//! - `geo_names` — the provider's `geo` dictionary (code → display name).
//! - `boundaries` — the three Nuts2json documents (one per NUTS level),
//!   unioned into a single id-addressable collection.
//!
//! ## What does **not** live here
//! - **Caching/persistence** — `store` decides whether to hit the network.
//! - **Normalization/filtering** — `normalize` and `select` own semantics;
//!   specs only parse.
//!
//! Every parser here takes `&str` and is testable offline against inline
//! fixtures; only the `fetch*` entry points touch the network.

pub mod boundaries;
pub mod dataset;
pub mod geo_names;
