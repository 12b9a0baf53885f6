// src/specs/ranking.rs
//! How to read a ranking page.
//!
//! Purpose:
//! - Read the first table of a category page (`core::html::first_table`).
//! - Keep the canonical columns `Rank`, `Institute ID`, `Name`, `Score`; ignore the rest
//!   (`City`, `State`, …) since column sets drift between categories.
//! - Coerce each row: a bad `Rank` drops the row, a bad `Score` just leaves it empty.
//! - Strip the trailing "More Details" annotation from names.
//! - Stable-sort by rank so ties keep page order.
//!
//! Non-Responsibilities:
//! - **No networking** (see `core::net`), **no top-N cut** (see `scrape::select`).

use crate::core::html::{self, RawTable};
use crate::core::sanitize::strip_annotation;
use crate::error::ParseError;
use crate::model::{RankingRow, RawPage};

pub const RANK: &str = "Rank";
pub const INSTITUTE_ID: &str = "Institute ID";
pub const NAME: &str = "Name";
pub const SCORE: &str = "Score";

/// Parse and normalize one fetched page.
pub fn parse_page(page: &RawPage) -> Result<Vec<RankingRow>, ParseError> {
    let table = html::first_table(&page.html, RANK)?;
    let rows = normalize(&table)?;
    logd!(
        "Parse: {} → {} ranked rows ({} raw)",
        page.category,
        rows.len(),
        table.nrows()
    );
    Ok(rows)
}

/// Phase two: untyped cells → typed rows, sorted by rank.
pub fn normalize(table: &RawTable) -> Result<Vec<RankingRow>, ParseError> {
    let cols = Columns::locate(&table.headers)?;

    let mut rows: Vec<RankingRow> = table
        .rows
        .iter()
        .filter_map(|cells| cols.coerce(cells))
        .collect();

    // stable: duplicate ranks stay in page order
    rows.sort_by_key(|r| r.rank);
    Ok(rows)
}

/// Column positions of the canonical fields. Only `rank` is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Columns {
    rank: usize,
    institute_id: Option<usize>,
    name: Option<usize>,
    score: Option<usize>,
}

impl Columns {
    fn locate(headers: &[String]) -> Result<Self, ParseError> {
        // First occurrence wins when a header repeats.
        let find = |want: &str| headers.iter().position(|h| h.trim() == want);

        let rank = find(RANK).ok_or_else(|| ParseError::NoRecognizedColumns {
            headers: headers.to_vec(),
        })?;
        Ok(Self {
            rank,
            institute_id: find(INSTITUTE_ID),
            name: find(NAME),
            score: find(SCORE),
        })
    }

    fn coerce(&self, cells: &[String]) -> Option<RankingRow> {
        let cell = |ix: usize| cells.get(ix).map(|s| s.trim()).unwrap_or("");

        let rank = coerce_rank(cell(self.rank))?;
        let institute_id = self
            .institute_id
            .map(cell)
            .filter(|s| !s.is_empty())
            .map(|s| s!(s));
        let name = self.name.map(|ix| strip_annotation(cell(ix))).unwrap_or_default();
        let score = self.score.and_then(|ix| coerce_score(cell(ix)));

        Some(RankingRow { rank, institute_id, name, score })
    }
}

/// Whole numbers `>= 1` (`"3"`, `" 3 "`, `"3.0"`); anything else is `None`.
pub fn coerce_rank(cell: &str) -> Option<u32> {
    let cell = cell.trim();
    if let Ok(n) = cell.parse::<u32>() {
        return (n >= 1).then_some(n);
    }
    let f = cell.parse::<f64>().ok()?;
    let whole = f.is_finite() && f.fract() == 0.0 && f >= 1.0 && f <= u32::MAX as f64;
    whole.then_some(f as u32)
}

/// Finite decimals only; `"--"`, `"NaN"`, `"inf"` and blanks are `None`.
pub fn coerce_score(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_coercion() {
        assert_eq!(coerce_rank("1"), Some(1));
        assert_eq!(coerce_rank(" 7 "), Some(7));
        assert_eq!(coerce_rank("4.0"), Some(4));
        assert_eq!(coerce_rank("0"), None);
        assert_eq!(coerce_rank("-2"), None);
        assert_eq!(coerce_rank("2.5"), None);
        assert_eq!(coerce_rank("101-150"), None);
        assert_eq!(coerce_rank(""), None);
    }

    #[test]
    fn score_coercion() {
        assert_eq!(coerce_score("89.5"), Some(89.5));
        assert_eq!(coerce_score(" 70 "), Some(70.0));
        assert_eq!(coerce_score("--"), None);
        assert_eq!(coerce_score("NaN"), None);
        assert_eq!(coerce_score("inf"), None);
    }
}
