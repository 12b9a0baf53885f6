// src/store.rs
//
// Load a combined file back into memory for querying without re-fetching.
// `All`-tagged rows are dropped here; the "all categories" view is rebuilt at
// query time from the real rows.

use std::fs::File;
use std::path::Path;

use crate::config::options::ExportFormat;
use crate::enrich::region_for;
use crate::error::StoreError;
use crate::file::CombinedRecord;
use crate::model::{ALL, CombinedDataset, RankedEntry, Region};
use crate::specs::ranking::{coerce_rank, coerce_score};

pub fn load_combined(path: &Path) -> Result<CombinedDataset, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(ExportFormat::from_path(path).delim())
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.deserialize::<CombinedRecord>() {
        let rec = rec.map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if rec.category.is_empty() || rec.category == ALL {
            continue;
        }
        match entry_from_record(rec) {
            Some(e) => entries.push(e),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        logw!("Store: skipped {skipped} row(s) without a usable rank in {}", path.display());
    }
    let ds = CombinedDataset::new(entries);
    logf!("Store: loaded {} rows from {}", ds.len(), path.display());
    Ok(ds)
}

fn entry_from_record(rec: CombinedRecord) -> Option<RankedEntry> {
    let rank = coerce_rank(&rec.rank)?;
    let state = Some(rec.state).filter(|s| !s.is_empty());
    let region = Region::from_label(&rec.region).unwrap_or_else(|| region_for(state.as_deref()));
    Some(RankedEntry {
        rank,
        institute_id: Some(rec.institute_id).filter(|s| !s.is_empty()),
        name: rec.name,
        score: coerce_score(&rec.score),
        category: rec.category,
        state,
        region,
    })
}
