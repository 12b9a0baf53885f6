// src/scrape/select.rs
use crate::model::RankingRow;

/// Keep rows ranked `1..=n`, in their existing order.
///
/// A short table is not an error: six ranked rows and `n = 10` gives six rows.
/// Applying it twice changes nothing.
pub fn select_top(rows: Vec<RankingRow>, n: u32) -> Vec<RankingRow> {
    rows.into_iter().filter(|r| r.rank <= n).collect()
}
