// src/gui/components/mod.rs
pub mod controls;
pub mod data_table;
pub mod export_bar;
pub mod map_canvas;
