// src/enrich.rs
//! Attach state and region to ranked rows.
//!
//! Institute → state comes from an external JSON map, matched by exact display
//! name. No case folding or punctuation cleanup is attempted: names the map
//! does not know end up with an unknown state and region `Other`, and are
//! collected in `EnrichmentGaps` for review.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use crate::model::{RankedEntry, RankingRow, Region};

/// State/UT → region. Anything not listed is `Other`.
pub static STATE_REGIONS: LazyLock<HashMap<&'static str, Region>> = LazyLock::new(|| {
    use Region::*;
    HashMap::from([
        ("Jammu and Kashmir", North),
        ("Ladakh", North),
        ("Himachal Pradesh", North),
        ("Punjab", North),
        ("Haryana", North),
        ("Delhi", North),
        ("Uttar Pradesh", North),
        ("Uttarakhand", North),
        ("Rajasthan", North),
        ("Chandigarh", North),
        ("Tamil Nadu", South),
        ("Kerala", South),
        ("Karnataka", South),
        ("Andhra Pradesh", South),
        ("Telangana", South),
        ("Puducherry", South),
        ("West Bengal", East),
        ("Odisha", East),
        ("Bihar", East),
        ("Jharkhand", East),
        ("Maharashtra", West),
        ("Gujarat", West),
        ("Goa", West),
        ("Dadra and Nagar Haveli and Daman and Diu", West),
        ("Assam", NorthEast),
        ("Arunachal Pradesh", NorthEast),
        ("Manipur", NorthEast),
        ("Meghalaya", NorthEast),
        ("Mizoram", NorthEast),
        ("Nagaland", NorthEast),
        ("Sikkim", NorthEast),
        ("Tripura", NorthEast),
        ("Madhya Pradesh", Central),
        ("Chhattisgarh", Central),
        ("Andaman and Nicobar Islands", Other),
        ("Lakshadweep", Other),
    ])
});

/// Region for a state; unknown or unlisted states resolve to `Other`.
pub fn region_for(state: Option<&str>) -> Region {
    state
        .and_then(|s| STATE_REGIONS.get(s).copied())
        .unwrap_or(Region::Other)
}

/// Exact institute display name → state. Read-only once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstituteStateMap {
    by_name: HashMap<String, String>,
}

impl InstituteStateMap {
    /// Load a JSON object `{ "<institute>": "<state>" }`. `null` states are skipped.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let raw: HashMap<String, Option<String>> = serde_json::from_str(&text)?;
        let map: Self = raw
            .into_iter()
            .filter_map(|(name, state)| state.map(|s| (name, s)))
            .collect();
        logf!("Enrich: loaded {} institute→state entries from {}", map.len(), path.display());
        Ok(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<(String, String)> for InstituteStateMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { by_name: iter.into_iter().collect() }
    }
}

/// Names that had no state mapping, sorted and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnrichmentGaps {
    names: BTreeSet<String>,
}

impl EnrichmentGaps {
    pub fn record(&mut self, name: &str) {
        self.names.insert(s!(name));
    }

    pub fn merge(&mut self, other: EnrichmentGaps) {
        self.names.extend(other.names);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Pure join of one row: same inputs, same `(state, region)`.
pub fn enrich(row: RankingRow, category: &str, states: &InstituteStateMap) -> RankedEntry {
    let state = states.get(&row.name).map(|s| s!(s));
    let region = region_for(state.as_deref());
    RankedEntry {
        rank: row.rank,
        institute_id: row.institute_id,
        name: row.name,
        score: row.score,
        category: s!(category),
        state,
        region,
    }
}

/// Enrich a whole category table, recording unmapped names in `gaps`.
pub fn enrich_table(
    rows: Vec<RankingRow>,
    category: &str,
    states: &InstituteStateMap,
    gaps: &mut EnrichmentGaps,
) -> Vec<RankedEntry> {
    rows.into_iter()
        .map(|row| {
            let entry = enrich(row, category, states);
            if entry.state.is_none() {
                logd!("Enrich: no state for '{}' ({category})", entry.name);
                gaps.record(&entry.name);
            }
            entry
        })
        .collect()
}
