// src/gui/components/mod.rs
pub mod filters;
pub mod regions;
pub mod scores;
pub mod status_bar;
pub mod summary;
pub mod top_table;
