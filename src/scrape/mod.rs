// src/scrape/mod.rs
mod scrape;
pub mod select;

pub use scrape::{CategoryOutcome, RunReport};
pub use scrape::{collect_rankings, run_category, run_pipeline};
pub use select::select_top;
