// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod enrich;
pub mod file;
pub mod progress;
pub mod query;
pub mod scrape;
pub mod store;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
