// src/query.rs
//! Read-only views over a `CombinedDataset` for the dashboard and the CLI.
//!
//! Every function is pure: same dataset and filters, same answer. The dataset is
//! never mutated, so it can be shared behind an `Arc` and queried from any thread.

use std::cmp::Ordering;

use crate::model::{ALL, CombinedDataset, RankedEntry, Region};
use crate::specs::categories;

/// Category selector; `All` is the union of every real category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"All"` (any case) → `All`; anything else is an exact category label.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s!(s))
        }
    }

    /// Like `parse`, but a category label or slug (any case) resolves to its catalogue
    /// label. `None` for a name the catalogue does not know.
    pub fn resolve(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Some(CategoryFilter::All);
        }
        categories::find(s).map(|c| CategoryFilter::Only(s!(c.label)))
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => category != ALL,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Only(c) => c,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    /// `"All"` or one of the seven region labels; anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Some(RegionFilter::All);
        }
        Region::from_label(s).map(RegionFilter::Only)
    }

    pub fn matches(&self, region: Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(r) => *r == region,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegionFilter::All => ALL,
            RegionFilter::Only(r) => r.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Distinct institute names.
    pub count: usize,
    /// Mean of the scores present; `0.0` when there are none.
    pub avg_score: f64,
}

/// Rows matching both filters, in dataset order.
pub fn filter<'a>(
    ds: &'a CombinedDataset,
    category: &CategoryFilter,
    region: RegionFilter,
) -> Vec<&'a RankedEntry> {
    ds.entries()
        .iter()
        .filter(|e| category.matches(&e.category) && region.matches(e.region))
        .collect()
}

pub fn summary(subset: &[&RankedEntry]) -> Summary {
    let mut names: Vec<&str> = subset.iter().map(|e| e.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();

    let scores: Vec<f64> = subset.iter().filter_map(|e| e.score).collect();
    let avg_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    Summary { count: names.len(), avg_score }
}

/// The `k` best-scoring rows, descending. Ties keep dataset order; rows without
/// a score sort after every scored row.
pub fn top_bar<'a>(subset: &[&'a RankedEntry], k: usize) -> Vec<&'a RankedEntry> {
    let mut rows = subset.to_vec();
    rows.sort_by(|a, b| by_score_desc(a, b));
    rows.truncate(k);
    rows
}

fn by_score_desc(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    match (a.score, b.score) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Row count per region for a category scope, all seven regions listed (zeros included).
/// Ignores any region filter: this is the breakdown the filter chooses from.
pub fn region_distribution(ds: &CombinedDataset, category: &CategoryFilter) -> Vec<(Region, usize)> {
    let mut counts = [0usize; 7];
    for e in ds.entries().iter().filter(|e| category.matches(&e.category)) {
        if let Some(ix) = Region::ALL.iter().position(|r| *r == e.region) {
            counts[ix] += 1;
        }
    }
    Region::ALL.into_iter().zip(counts).collect()
}

/// One category's scores, in row order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreSeries {
    pub category: String,
    pub scores: Vec<f64>,
}

/// Five-number summary for box plots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ScoreSeries {
    /// `None` when the category has no scores.
    pub fn box_stats(&self) -> Option<BoxStats> {
        let mut sorted = self.scores.clone();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.total_cmp(b));
        Some(BoxStats {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Linear interpolation between closest ranks. `sorted` must be non-empty and ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Scores grouped per category, categories in first-seen order. Rows without a
/// score are skipped; a category whose rows all lack scores still appears, empty.
pub fn score_distribution(subset: &[&RankedEntry]) -> Vec<ScoreSeries> {
    let mut out: Vec<ScoreSeries> = Vec::new();
    for e in subset {
        let ix = match out.iter().position(|s| s.category == e.category) {
            Some(ix) => ix,
            None => {
                out.push(ScoreSeries { category: e.category.clone(), scores: Vec::new() });
                out.len() - 1
            }
        };
        if let Some(score) = e.score {
            out[ix].scores.push(score);
        }
    }
    out
}

/// Everything a dashboard frame shows for one filter combination.
#[derive(Clone, Debug)]
pub struct View<'a> {
    pub category: CategoryFilter,
    pub region: RegionFilter,
    pub rows: Vec<&'a RankedEntry>,
    pub summary: Summary,
    pub top: Vec<&'a RankedEntry>,
    pub regions: Vec<(Region, usize)>,
    pub scores: Vec<ScoreSeries>,
}

impl<'a> View<'a> {
    pub fn build(
        ds: &'a CombinedDataset,
        category: &CategoryFilter,
        region: RegionFilter,
        top_k: usize,
    ) -> Self {
        let rows = filter(ds, category, region);
        Self {
            category: category.clone(),
            region,
            summary: summary(&rows),
            top: top_bar(&rows, top_k),
            regions: region_distribution(ds, category),
            scores: score_distribution(&rows),
            rows,
        }
    }
}
