// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    enrich::EnrichmentGaps,
    error::PipelineError,
    model::CombinedDataset,
    query::{CategoryFilter, View},
    scrape::{self, RunReport},
    store,
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "NIRF Rankings",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

type Pending = mpsc::Receiver<Result<RunReport, PipelineError>>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // immutable snapshot; replaced wholesale after a refresh
    pub dataset: Arc<CombinedDataset>,
    pub categories: Vec<String>,

    // last run's gap list
    pub gaps: EnrichmentGaps,
    pub failures: Vec<String>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pending: Option<Pending>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let year = state.options.pipeline.year;
        let path = state.options.export.combined_path(year);

        let (dataset, status) = match store::load_combined(&path) {
            Ok(ds) => {
                logf!("Init: loaded {} rows from {}", ds.len(), path.display());
                (ds, s!("Loaded local data"))
            }
            Err(e) => {
                logd!("Init: no local data ({e})");
                (CombinedDataset::default(), s!("No local data; press Refresh"))
            }
        };

        Self {
            categories: dataset.categories(),
            dataset: Arc::new(dataset),
            state,
            gaps: EnrichmentGaps::default(),
            failures: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            pending: None,
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Run the pipeline on a background thread; the result is picked up by `poll`.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        if self.running() {
            return;
        }
        let options = self.state.options.clone();
        let status = Arc::clone(&self.status);
        let ctx = ctx.clone();
        let (tx, rx) = mpsc::channel();

        logf!("UI: Refresh year={}", options.pipeline.year);
        thread::spawn(move || {
            let mut prog = GuiProgress::new(status, ctx.clone());
            let result = scrape::run_pipeline(&options, Some(&mut prog));
            let _ = tx.send(result);
            ctx.request_repaint();
        });
        self.pending = Some(rx);
    }

    fn poll(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(Ok(report)) => {
                self.pending = None;
                self.apply(report);
            }
            Ok(Err(e)) => {
                self.pending = None;
                loge!("UI: Refresh failed: {e}");
                self.status(format!("Error: {e}"));
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending = None;
                self.status("Error: refresh worker stopped");
            }
        }
    }

    fn apply(&mut self, report: RunReport) {
        self.failures = report.failures.iter().map(|f| f.to_string()).collect();
        self.gaps = report.gaps;
        self.categories = report.dataset.categories();
        self.dataset = Arc::new(report.dataset);

        // drop a category selection that no longer exists
        if let CategoryFilter::Only(c) = &self.state.gui.category {
            if !self.categories.contains(c) {
                self.state.gui.category = CategoryFilter::All;
            }
        }

        let msg = if self.failures.is_empty() {
            format!("Ready ({} rows)", self.dataset.len())
        } else {
            format!("Ready ({} rows, {} categories failed)", self.dataset.len(), self.failures.len())
        };
        self.status(msg);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            components::filters::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        let ds = Arc::clone(&self.dataset);
        let gui = &self.state.gui;
        let view = View::build(&ds, &gui.category, gui.region, gui.top_k);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .show(ui, |ui| {
                    components::summary::draw(ui, &view);
                    ui.separator();
                    components::top_table::draw(ui, &view);
                    ui.separator();
                    ui.columns(2, |cols| {
                        components::regions::draw(&mut cols[0], &view);
                        components::scores::draw(&mut cols[1], &view);
                    });
                });
        });
    }
}
