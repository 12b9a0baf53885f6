// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::model::{CombinedDataset, RankedEntry, RankingRow};
use crate::specs::categories::Category;

/// One row of a per-category file.
#[derive(Debug, Serialize)]
struct CategoryRecord<'a> {
    #[serde(rename = "Rank")]
    rank: u32,
    #[serde(rename = "Institute ID")]
    institute_id: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Score")]
    score: String,
}

/// One row of the combined file. Every field is text so files written by other
/// tools (ranks like `1.0`, blank states) load without a schema fight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedRecord {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Institute_ID", default)]
    pub institute_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Score", default)]
    pub score: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Region", default)]
    pub region: String,
}

impl From<&RankedEntry> for CombinedRecord {
    fn from(e: &RankedEntry) -> Self {
        Self {
            rank: e.rank.to_string(),
            institute_id: e.institute_id.clone().unwrap_or_default(),
            name: e.name.clone(),
            score: score_cell(e.score),
            category: e.category.clone(),
            state: e.state.clone().unwrap_or_default(),
            region: s!(e.region.label()),
        }
    }
}

fn score_cell(score: Option<f64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

fn writer_for(path: &Path, format: ExportFormat) -> io::Result<csv::Writer<fs::File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let w = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .from_path(path)?;
    Ok(w)
}

/// Write one category's top-N table: `Rank, Institute ID, Name, Score`.
pub fn write_category(
    export: &ExportOptions,
    year: u16,
    top_n: u32,
    category: &Category,
    rows: &[RankingRow],
) -> io::Result<PathBuf> {
    let path = export.category_path(year, top_n, category);
    let mut w = writer_for(&path, export.format)?;
    for r in rows {
        w.serialize(CategoryRecord {
            rank: r.rank,
            institute_id: r.institute_id.as_deref().unwrap_or(""),
            name: &r.name,
            score: score_cell(r.score),
        })?;
    }
    // header-only file for an empty table
    if rows.is_empty() {
        w.write_record(["Rank", "Institute ID", "Name", "Score"])?;
    }
    w.flush()?;
    logf!("Export: {} → {}", category.label, path.display());
    Ok(path)
}

/// Write the combined file: real rows then their `All`-tagged copies.
pub fn write_combined(export: &ExportOptions, year: u16, ds: &CombinedDataset) -> io::Result<PathBuf> {
    let path = export.combined_path(year);
    write_combined_to(&path, export.format, ds)?;
    Ok(path)
}

pub fn write_combined_to(path: &Path, format: ExportFormat, ds: &CombinedDataset) -> io::Result<()> {
    let mut w = writer_for(path, format)?;
    let mut n = 0usize;
    for e in ds.export_rows() {
        w.serialize(CombinedRecord::from(&e))?;
        n += 1;
    }
    if n == 0 {
        w.write_record(["Rank", "Institute_ID", "Name", "Score", "Category", "State", "Region"])?;
    }
    w.flush()?;
    logf!("Export: combined ({n} rows) → {}", path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
