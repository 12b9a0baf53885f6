// tests/store.rs
use std::fs;

use nirf_scrape::config::options::ExportFormat;
use nirf_scrape::error::StoreError;
use nirf_scrape::file::write_combined_to;
use nirf_scrape::model::{CombinedDataset, RankedEntry, Region};
use nirf_scrape::store::load_combined;

// Shape produced by pandas: float ranks, blank cells, `All` copies appended.
const PANDAS_STYLE: &str = "\
Rank,Institute_ID,Name,Score,Category,State,Region
1.0,IR-O-U-0456,Indian Institute of Technology Madras,88.72,Overall,Tamil Nadu,South
2.0,IR-O-U-0052,Indian Institute of Technology Guwahati,,Overall,,Other
1.0,IR-L-U-0467,National Law School of India University,77.61,Law,Karnataka,
,IR-X,No Rank Institute,50.0,Law,Delhi,North
1.0,IR-O-U-0456,Indian Institute of Technology Madras,88.72,All,Tamil Nadu,South
2.0,IR-O-U-0052,Indian Institute of Technology Guwahati,,All,,Other
1.0,IR-L-U-0467,National Law School of India University,77.61,All,Karnataka,
";

#[test]
fn loads_pandas_style_file_without_all_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nirf_2025_combined.csv");
    fs::write(&path, PANDAS_STYLE).unwrap();

    let ds = load_combined(&path).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.categories(), vec!["Overall", "Law"]);

    let e = &ds.entries()[0];
    assert_eq!(e.rank, 1);
    assert_eq!(e.institute_id.as_deref(), Some("IR-O-U-0456"));
    assert_eq!(e.score, Some(88.72));
    assert_eq!(e.region, Region::South);

    let gap = &ds.entries()[1];
    assert_eq!(gap.state, None);
    assert_eq!(gap.score, None);
    assert_eq!(gap.region, Region::Other);

    // blank region label re-derived from the state
    assert_eq!(ds.entries()[2].region, Region::South);
}

#[test]
fn written_tsv_reads_back_to_the_same_dataset() {
    let ds = CombinedDataset::new(vec![
        RankedEntry {
            rank: 1,
            institute_id: Some("IR-E-U-0456".into()),
            name: "Indian Institute of Technology Madras".into(),
            score: Some(89.46),
            category: "Engineering".into(),
            state: Some("Tamil Nadu".into()),
            region: Region::South,
        },
        RankedEntry {
            rank: 2,
            institute_id: None,
            name: "Institute, with a comma".into(),
            score: None,
            category: "Engineering".into(),
            state: None,
            region: Region::Other,
        },
    ]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("combined.tsv");
    write_combined_to(&path, ExportFormat::Tsv, &ds).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Rank\tInstitute_ID\tName\tScore\tCategory\tState\tRegion"));
    assert_eq!(text.lines().count(), 1 + 2 * ds.len());

    assert_eq!(load_combined(&path).unwrap(), ds);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_combined(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
