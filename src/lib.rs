// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod domain;
pub mod error;
pub mod gui;
pub mod normalize;
pub mod select;
pub mod store;
