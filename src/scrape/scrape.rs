// src/scrape/scrape.rs
use std::{
    path::PathBuf, thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::consts::JITTER_MS,
    config::options::AppOptions,
    core::net::{ self, Fetch, HttpFetcher },
    enrich::{ self, EnrichmentGaps, InstituteStateMap },
    error::{ CategoryError, CategoryFailure, PipelineError },
    file,
    model::{ CombinedDataset, RankedEntry },
    progress::Progress,
    specs::{ categories::Category, ranking },
};

use super::select::select_top;

/// What one category contributed to a run.
#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: &'static Category,
    pub entries: Vec<RankedEntry>,
    pub gaps: EnrichmentGaps,
    pub path: PathBuf,
}

/// Result of a run that produced at least one category.
#[derive(Debug)]
pub struct RunReport {
    pub dataset: CombinedDataset,
    pub files_written: Vec<PathBuf>,
    pub failures: Vec<CategoryFailure>,
    pub gaps: EnrichmentGaps,
}

impl RunReport {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// fetch → parse → top-N → per-category file → enrich, for one category.
pub fn run_category(
    fetcher: &dyn Fetch,
    states: &InstituteStateMap,
    category: &'static Category,
    options: &AppOptions,
) -> Result<CategoryOutcome, CategoryError> {
    let year = options.pipeline.year;
    let top_n = options.pipeline.top_n;

    let page = net::fetch_page(fetcher, category, year)?;
    let rows = ranking::parse_page(&page)?;
    let top = select_top(rows, top_n);
    if top.is_empty() {
        logw!("Scrape: {} has no rows ranked 1..={top_n}", category.label);
    }

    let path = file::write_category(&options.export, year, top_n, category, &top)?;

    let mut gaps = EnrichmentGaps::default();
    let entries = enrich::enrich_table(top, category.label, states, &mut gaps);
    Ok(CategoryOutcome { category, entries, gaps, path })
}

/// Run every selected category on a small worker pool and build the combined dataset.
///
/// A failing category is logged, reported in `RunReport::failures` and left out;
/// the run only fails as a whole when no category succeeds.
pub fn collect_rankings(
    options: &AppOptions,
    fetcher: Arc<dyn Fetch>,
    states: Arc<InstituteStateMap>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunReport, PipelineError> {
    let categories = options.pipeline.categories.resolve()?;
    if categories.is_empty() {
        return Err(PipelineError::NothingSelected);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(categories.len());
    }
    logf!(
        "Scrape: Begin year={} categories={} top_n={}",
        options.pipeline.year,
        categories.len(),
        options.pipeline.top_n
    );

    // Concurrency
    type Msg = (usize, Result<CategoryOutcome, CategoryError>);

    let cats = Arc::new(categories);
    let opts = Arc::new(options.clone());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Msg>();

    let workers = options.pipeline.workers.min(cats.len()).max(1);
    let pause_ms = options.pipeline.request_pause_ms;

    for _ in 0..workers {
        let cats = Arc::clone(&cats);
        let opts = Arc::clone(&opts);
        let idx = Arc::clone(&counter);
        let fetcher = Arc::clone(&fetcher);
        let states = Arc::clone(&states);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= cats.len() {
                    break;
                }
                let result = run_category(fetcher.as_ref(), &states, cats[i], &opts);
                if tx.send((i, result)).is_err() {
                    break;
                }
                if pause_ms > 0 {
                    let jitter = (i as u64 * 17) % JITTER_MS;
                    thread::sleep(Duration::from_millis(pause_ms + jitter)); // be polite
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate; slots keep catalogue order regardless of completion order.
    let mut slots: Vec<Option<Result<CategoryOutcome, CategoryError>>> =
        (0..cats.len()).map(|_| None).collect();

    for (i, result) in res_rx.iter() {
        let label = cats[i].label;
        match &result {
            Ok(outcome) => {
                logf!("Scrape: {label} OK ({} rows)", outcome.entries.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(label, outcome.entries.len());
                }
            }
            Err(e) => {
                loge!("Scrape: {label} failed: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(label, &e.to_string());
                }
            }
        }
        slots[i] = Some(result);
    }

    let mut entries: Vec<RankedEntry> = Vec::new();
    let mut files_written = Vec::new();
    let mut failures = Vec::new();
    let mut gaps = EnrichmentGaps::default();
    let mut succeeded = 0usize;

    for (i, slot) in slots.into_iter().enumerate() {
        let label = s!(cats[i].label);
        match slot {
            Some(Ok(outcome)) => {
                succeeded += 1;
                entries.extend(outcome.entries);
                files_written.push(outcome.path);
                gaps.merge(outcome.gaps);
            }
            Some(Err(error)) => failures.push(CategoryFailure { category: label, error }),
            None => {
                // a worker died before reporting
                let error = CategoryError::Export(std::io::Error::other("worker exited without a result"));
                failures.push(CategoryFailure { category: label, error });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        if !gaps.is_empty() {
            p.log(&format!("{} institute(s) without a state mapping", gaps.len()));
        }
        p.finish();
    }

    if succeeded == 0 {
        return Err(PipelineError::NoCategories { failures });
    }

    let dataset = CombinedDataset::new(entries);
    let combined = file::write_combined(&options.export, options.pipeline.year, &dataset)?;
    files_written.push(combined);

    if !gaps.is_empty() {
        logw!(
            "Enrich: {} institute(s) without a state mapping: {}",
            gaps.len(),
            gaps.names().collect::<Vec<_>>().join("; ")
        );
    }
    logf!(
        "Scrape: Done rows={} ok={succeeded} failed={}",
        dataset.len(),
        failures.len()
    );

    Ok(RunReport { dataset, files_written, failures, gaps })
}

/// Full run against the live site: load the state map, build the HTTP fetcher, collect.
pub fn run_pipeline(
    options: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunReport, PipelineError> {
    let path = &options.pipeline.state_map;
    let states = InstituteStateMap::load(path).map_err(|source| PipelineError::StateMap {
        path: path.clone(),
        source,
    })?;

    let fetcher = HttpFetcher::new(
        Duration::from_secs(options.pipeline.timeout_secs),
        options.pipeline.retry.clone(),
    )?;
    collect_rankings(options, Arc::new(fetcher), Arc::new(states), progress)
}
