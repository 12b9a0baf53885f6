// tests/query.rs
use nirf_scrape::model::{CombinedDataset, RankedEntry, Region, ALL};
use nirf_scrape::query::{
    filter, region_distribution, score_distribution, summary, top_bar, CategoryFilter,
    RegionFilter, ScoreSeries, View,
};

fn entry(rank: u32, name: &str, score: Option<f64>, category: &str, region: Region) -> RankedEntry {
    RankedEntry {
        rank,
        institute_id: None,
        name: name.into(),
        score,
        category: category.into(),
        state: None,
        region,
    }
}

fn dataset() -> CombinedDataset {
    CombinedDataset::new(vec![
        entry(1, "IIT Madras", Some(88.7), "Overall", Region::South),
        entry(2, "IISc", Some(84.5), "Overall", Region::South),
        entry(3, "IIT Delhi", Some(82.5), "Overall", Region::North),
        entry(4, "Jamia", Some(69.0), "Overall", Region::North),
        entry(1, "NLSIU", Some(77.6), "Law", Region::South),
        entry(2, "Jamia", Some(61.9), "Law", Region::North),
        entry(3, "Symbiosis", None, "Law", Region::Other),
        // stray duplicate from an old export
        entry(1, "IIT Madras", Some(88.7), ALL, Region::South),
    ])
}

#[test]
fn all_tagged_rows_never_enter_the_dataset() {
    let ds = dataset();
    assert_eq!(ds.len(), 7);
    assert!(ds.entries().iter().all(|e| e.category != ALL));
    assert_eq!(ds.categories(), vec!["Overall", "Law"]);
}

#[test]
fn export_rows_append_all_copies() {
    let ds = dataset();
    let rows: Vec<RankedEntry> = ds.export_rows().collect();
    assert_eq!(rows.len(), 14);
    assert_eq!(rows.iter().filter(|e| e.category == ALL).count(), 7);
    assert_eq!(rows[7].name, "IIT Madras");
    assert_eq!(rows[7].category, ALL);
}

#[test]
fn all_south_is_the_union_of_real_categories() {
    let ds = dataset();
    let rows = filter(&ds, &CategoryFilter::All, RegionFilter::Only(Region::South));
    let names: Vec<&str> = rows.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["IIT Madras", "IISc", "NLSIU"]);

    let s = summary(&rows);
    assert_eq!(s.count, 3);
    assert!((s.avg_score - (88.7 + 84.5 + 77.6) / 3.0).abs() < 1e-9);
}

#[test]
fn summary_counts_distinct_names() {
    let ds = dataset();
    let rows = filter(&ds, &CategoryFilter::All, RegionFilter::Only(Region::North));
    assert_eq!(rows.len(), 3);
    assert_eq!(summary(&rows).count, 2);
}

#[test]
fn exact_category_and_region() {
    let ds = dataset();
    let rows = filter(&ds, &CategoryFilter::parse("Law"), RegionFilter::Only(Region::North));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Jamia");

    assert!(filter(&ds, &CategoryFilter::parse("law"), RegionFilter::All).is_empty());
    assert_eq!(CategoryFilter::parse(" all "), CategoryFilter::All);
}

#[test]
fn empty_summary_is_zero() {
    let s = summary(&[]);
    assert_eq!(s.count, 0);
    assert_eq!(s.avg_score, 0.0);

    let ds = dataset();
    let rows = filter(&ds, &CategoryFilter::All, RegionFilter::Only(Region::Central));
    assert_eq!(summary(&rows).avg_score, 0.0);
}

#[test]
fn top_bar_orders_by_score_with_stable_ties() {
    let ds = CombinedDataset::new(vec![
        entry(1, "A", Some(70.0), "Law", Region::North),
        entry(2, "B", None, "Law", Region::North),
        entry(3, "C", Some(90.0), "Law", Region::North),
        entry(4, "D", Some(70.0), "Law", Region::North),
        entry(5, "E", Some(80.0), "Law", Region::North),
    ]);
    let rows = filter(&ds, &CategoryFilter::All, RegionFilter::All);

    let names = |v: Vec<&RankedEntry>| v.iter().map(|e| e.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(top_bar(&rows, 10)), vec!["C", "E", "A", "D", "B"]);
    assert_eq!(names(top_bar(&rows, 3)), vec!["C", "E", "A"]);
    assert!(top_bar(&rows, 0).is_empty());
}

#[test]
fn region_distribution_lists_all_seven() {
    let ds = dataset();

    let all = region_distribution(&ds, &CategoryFilter::All);
    assert_eq!(all.len(), 7);
    assert_eq!(all.iter().map(|(_, n)| n).sum::<usize>(), ds.len());
    assert!(all.contains(&(Region::South, 3)));
    assert!(all.contains(&(Region::North, 3)));
    assert!(all.contains(&(Region::Other, 1)));
    assert!(all.contains(&(Region::Central, 0)));

    let law = region_distribution(&ds, &CategoryFilter::parse("Law"));
    assert_eq!(law.iter().map(|(_, n)| n).sum::<usize>(), 3);
}

#[test]
fn score_distribution_groups_by_category() {
    let ds = dataset();
    let rows = filter(&ds, &CategoryFilter::All, RegionFilter::All);
    let series = score_distribution(&rows);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].category, "Overall");
    assert_eq!(series[0].scores, vec![88.7, 84.5, 82.5, 69.0]);
    assert_eq!(series[1].scores, vec![77.6, 61.9]);
}

#[test]
fn box_stats_interpolate_quartiles() {
    let odd = ScoreSeries { category: "X".into(), scores: vec![5.0, 1.0, 3.0, 2.0, 4.0] };
    let b = odd.box_stats().unwrap();
    assert_eq!((b.min, b.q1, b.median, b.q3, b.max), (1.0, 2.0, 3.0, 4.0, 5.0));

    let even = ScoreSeries { category: "Y".into(), scores: vec![1.0, 2.0, 3.0, 4.0] };
    let b = even.box_stats().unwrap();
    assert_eq!(b.median, 2.5);
    assert!((b.q1 - 1.75).abs() < 1e-12);
    assert!((b.q3 - 3.25).abs() < 1e-12);

    let empty = ScoreSeries { category: "Z".into(), scores: vec![] };
    assert!(empty.box_stats().is_none());
}

#[test]
fn view_bundles_one_filter_combination() {
    let ds = dataset();
    let view = View::build(&ds, &CategoryFilter::parse("Overall"), RegionFilter::Only(Region::North), 1);
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.summary.count, 2);
    assert_eq!(view.top.len(), 1);
    assert_eq!(view.top[0].name, "IIT Delhi");
    // region breakdown ignores the region filter
    assert_eq!(view.regions.iter().map(|(_, n)| n).sum::<usize>(), 4);
    assert_eq!(view.scores.len(), 1);
}

#[test]
fn region_filter_parsing() {
    assert_eq!(RegionFilter::parse("All"), Some(RegionFilter::All));
    assert_eq!(RegionFilter::parse("North East"), Some(RegionFilter::Only(Region::NorthEast)));
    assert_eq!(RegionFilter::parse("Other"), Some(RegionFilter::Only(Region::Other)));
    assert_eq!(RegionFilter::parse("Northeast"), None);
}

#[test]
fn category_names_resolve_to_catalogue_labels() {
    assert_eq!(CategoryFilter::resolve("law"), Some(CategoryFilter::Only("Law".into())));
    assert_eq!(
        CategoryFilter::resolve("state_public_university"),
        Some(CategoryFilter::Only("State Public University".into()))
    );
    assert_eq!(CategoryFilter::resolve(" ALL "), Some(CategoryFilter::All));
    assert_eq!(CategoryFilter::resolve("Astrology"), None);

    let ds = dataset();
    let resolved = CategoryFilter::resolve("law").unwrap();
    assert_eq!(
        filter(&ds, &resolved, RegionFilter::All).len(),
        filter(&ds, &CategoryFilter::parse("Law"), RegionFilter::All).len()
    );
}
