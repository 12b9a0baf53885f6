// src/model.rs
//! Typed shapes flowing through the pipeline:
//! `RawPage` → `RankingRow` → `RankedEntry` → `CombinedDataset`.

use std::fmt;

/// Label of the "every real category" view.
pub const ALL: &str = "All";

/// Closed set of geographic groupings. `Other` is the universal fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    North,
    South,
    East,
    West,
    NorthEast,
    Central,
    Other,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::NorthEast,
        Region::Central,
        Region::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::NorthEast => "North East",
            Region::Central => "Central",
            Region::Other => "Other",
        }
    }

    /// Exact label match (surrounding whitespace ignored).
    pub fn from_label(s: &str) -> Option<Region> {
        let s = s.trim();
        Region::ALL.into_iter().find(|r| r.label() == s)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Markup for one category, straight off the wire.
#[derive(Clone, Debug)]
pub struct RawPage {
    pub category: String,
    pub html: String,
}

/// One normalized row of a category table. `rank >= 1` always holds.
#[derive(Clone, Debug, PartialEq)]
pub struct RankingRow {
    pub rank: u32,
    pub institute_id: Option<String>,
    pub name: String,
    pub score: Option<f64>,
}

/// A ranking row after enrichment. `state == None` means unmapped.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub rank: u32,
    pub institute_id: Option<String>,
    pub name: String,
    pub score: Option<f64>,
    pub category: String,
    pub state: Option<String>,
    pub region: Region,
}

/// Enriched rows of every real category, in catalogue order.
///
/// Never contains `All`-tagged rows: the "all categories" view is a union taken
/// at query time, and the duplicates only exist in the exported file
/// (see `export_rows`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombinedDataset {
    entries: Vec<RankedEntry>,
}

impl CombinedDataset {
    /// Builds a dataset, discarding any `All`-tagged or category-less rows.
    pub fn new(entries: Vec<RankedEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|e| !e.category.is_empty() && e.category != ALL)
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for e in &self.entries {
            if !out.iter().any(|c| c == &e.category) {
                out.push(e.category.clone());
            }
        }
        out
    }

    /// Rows as written to the combined file: every real row, then an `All`-tagged copy of each.
    pub fn export_rows(&self) -> impl Iterator<Item = RankedEntry> + '_ {
        let all = self.entries.iter().map(|e| RankedEntry {
            category: s!(ALL),
            ..e.clone()
        });
        self.entries.iter().cloned().chain(all)
    }
}
