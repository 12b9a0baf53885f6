// src/specs/mod.rs
//! # Site knowledge
//!
//! Page-specific knowledge of the ranking site: *which* pages exist
//! (`categories`) and *how* to read one (`ranking`).
//!
//! ## What lives here
//! - The category catalogue (label → page URL, file slug).
//! - Pure parsing of a ranking page into normalized `RankingRow`s.
//!
//! ## What does **not** live here
//! - Networking (`core::net`), top-N selection and worker scheduling (`scrape`),
//!   enrichment (`enrich`), exports (`file`), dashboards (`gui`).
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_rankings → core::net::fetch_page → specs::ranking::parse_page
//!                          → scrape::select::select_top → enrich::enrich_table
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against saved HTML fixtures (`tests/fixtures`).
pub mod categories;
pub mod ranking;
