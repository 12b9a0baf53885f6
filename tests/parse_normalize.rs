// tests/parse_normalize.rs
use nirf_scrape::core::html::{first_table, RawTable};
use nirf_scrape::error::ParseError;
use nirf_scrape::model::{RankingRow, RawPage};
use nirf_scrape::specs::ranking::{normalize, parse_page, RANK};

fn page(category: &str, html: &str) -> RawPage {
    RawPage { category: category.into(), html: html.into() }
}

fn overall() -> Vec<RankingRow> {
    parse_page(&page("Overall", include_str!("fixtures/overall.html"))).unwrap()
}

#[test]
fn nested_detail_tables_stay_inside_their_cell() {
    let table = first_table(include_str!("fixtures/overall.html"), RANK).unwrap();
    assert_eq!(table.headers, vec!["Institute ID", "Name", "City", "State", "Score", "Rank"]);
    assert_eq!(table.nrows(), 12, "nested <table> rows must not become outer rows");
    assert!(table.rows.iter().all(|r| r.len() == 6));
    assert!(table.rows[0][1].starts_with("Indian Institute of Technology MadrasMore Details"));
}

#[test]
fn overall_rows_are_sorted_and_clean() {
    let rows = overall();

    // banded "101-150" rank dropped
    assert_eq!(rows.len(), 11);
    assert!(rows.iter().all(|r| r.rank >= 1));
    assert!(rows.windows(2).all(|w| w[0].rank <= w[1].rank));
    assert!(rows.iter().all(|r| !r.name.contains("More Details")));
    assert!(!rows.iter().any(|r| r.name == "Regional Institute of Studies"));

    let first = &rows[0];
    assert_eq!(first.rank, 1);
    assert_eq!(first.institute_id.as_deref(), Some("IR-O-U-0456"));
    assert_eq!(first.name, "Indian Institute of Technology Madras");
    assert_eq!(first.score, Some(88.72));

    assert_eq!(rows[1].name, "Indian Institute of Science");
    assert_eq!(rows[2].name, "Indian Institute of Technology Bombay");
}

#[test]
fn tied_ranks_keep_page_order_and_bad_scores_stay_rows() {
    let rows = overall();
    let eights: Vec<&RankingRow> = rows.iter().filter(|r| r.rank == 8).collect();
    assert_eq!(eights.len(), 2);
    assert_eq!(eights[0].name, "Indian Institute of Technology Roorkee");
    assert_eq!(eights[1].name, "Indian Institute of Technology Guwahati");
    assert_eq!(eights[1].score, None);
}

#[test]
fn header_row_without_thead_is_recognized() {
    let rows = parse_page(&page("Law", include_str!("fixtures/law_short.html"))).unwrap();
    // seventh row has a blank rank
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].name, "National Law School of India University");
    assert_eq!(rows[0].institute_id.as_deref(), Some("IR-L-U-0467"));
    assert_eq!(rows[5].name, "Jamia Millia Islamia");
}

#[test]
fn page_without_table_fails() {
    let err = parse_page(&page("Medical", include_str!("fixtures/no_table.html"))).unwrap_err();
    assert_eq!(err, ParseError::NoTableFound);
}

#[test]
fn table_without_rank_column_fails() {
    let err = parse_page(&page("Dental", include_str!("fixtures/no_rank.html"))).unwrap_err();
    assert_eq!(
        err,
        ParseError::NoRecognizedColumns { headers: vec!["Name".into(), "Score".into()] }
    );
}

#[test]
fn thead_with_td_cells_is_the_header() {
    let html = include_str!("fixtures/td_header.html");
    let table = first_table(html, RANK).unwrap();
    assert_eq!(table.headers, vec!["Rank", "Name", "Score"]);
    assert_eq!(table.nrows(), 2);

    let rows = parse_page(&page("Pharmacy", html)).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Jamia Hamdard");
    assert_eq!(rows[0].score, Some(78.95));
}

#[test]
fn title_row_above_header_is_skipped() {
    let html = include_str!("fixtures/titled_header.html");
    let table = first_table(html, RANK).unwrap();
    assert_eq!(table.headers, vec!["Rank", "Name", "Score"]);
    assert_eq!(table.nrows(), 2, "the title row is not data");

    let rows = parse_page(&page("Dental", html)).unwrap();
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].name, "Saveetha Institute of Medical and Technical Sciences");
    assert_eq!(rows[1].name, "Manipal College of Dental Sciences, Manipal");
}

#[test]
fn annotation_scenario() {
    let table = RawTable {
        headers: vec!["Rank".into(), "Name".into(), "Score".into()],
        rows: vec![vec!["1".into(), "IIT Madras More Details...".into(), "89.5".into()]],
    };
    let rows = normalize(&table).unwrap();
    assert_eq!(
        rows,
        vec![RankingRow { rank: 1, institute_id: None, name: "IIT Madras".into(), score: Some(89.5) }]
    );
}

#[test]
fn extra_and_missing_optional_columns() {
    let table = RawTable {
        headers: vec!["City".into(), "Rank".into(), "Name".into()],
        rows: vec![
            vec!["Pune".into(), "2".into(), "B".into()],
            vec!["Goa".into(), "x".into(), "Dropped".into()],
            vec!["Agra".into(), "1".into(), "A".into()],
            vec!["Short".into()],
        ],
    };
    let rows = normalize(&table).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "A");
    assert!(rows.iter().all(|r| r.score.is_none() && r.institute_id.is_none()));
}
