// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};

use crate::{
    config::options::{AppOptions, CategorySelector, ExportFormat},
    progress::Progress,
    query::{CategoryFilter, RegionFilter, View},
    scrape::{self, RunReport},
    specs::categories::CATALOGUE,
    store,
};

/// Aggregate NIRF ranking tables into one enriched dataset.
#[derive(Parser, Debug)]
#[command(name = "cli", version, about)]
pub struct Cli {
    /// JSON options file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, rank, enrich and export
    Run {
        /// Ranking year
        #[arg(short, long)]
        year: Option<u16>,
        /// Comma-separated labels or slugs (default: every category)
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<String>,
        /// Keep ranks 1..=N per category
        #[arg(short = 'n', long)]
        top: Option<u32>,
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
        /// Institute → state JSON map
        #[arg(long)]
        state_map: Option<PathBuf>,
        #[arg(short, long)]
        workers: Option<usize>,
    },
    /// Query a combined file
    Query {
        /// Combined CSV/TSV written by `run`
        input: PathBuf,
        #[arg(short, long, default_value = "All")]
        category: String,
        #[arg(short, long, default_value = "All")]
        region: String,
        /// Rows in the top-score table
        #[arg(short = 'k', long, default_value_t = 10)]
        top: usize,
    },
    /// List known categories
    Categories,
}

pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => AppOptions::load(path)?,
        None => AppOptions::default(),
    };

    match cli.command {
        Command::Run { year, categories, top, out, format, state_map, workers } => {
            let p = &mut options.pipeline;
            if let Some(y) = year {
                p.year = y;
            }
            if !categories.is_empty() {
                p.categories = CategorySelector::Only(categories);
            }
            if let Some(n) = top {
                p.top_n = n;
            }
            if let Some(m) = state_map {
                p.state_map = m;
            }
            if let Some(w) = workers {
                p.workers = w;
            }
            let e = &mut options.export;
            if let Some(o) = out {
                e.out_dir = o;
            }
            if let Some(f) = format {
                e.format = f;
            }

            let mut progress = CliProgress::default();
            let report = scrape::run_pipeline(&options, Some(&mut progress))?;
            print_report(&report);
        }
        Command::Query { input, category, region, top } => {
            let ds = store::load_combined(&input)
                .wrap_err_with(|| format!("loading {}", input.display()))?;
            let category = CategoryFilter::resolve(&category)
                .ok_or_else(|| eyre!("unknown category '{category}' (see `categories`)"))?;
            let region = RegionFilter::parse(&region)
                .ok_or_else(|| eyre!("unknown region '{region}'"))?;
            let view = View::build(&ds, &category, region, top);
            print_view(&view);
        }
        Command::Categories => {
            for c in CATALOGUE {
                println!("{}\t{}", c.slug(), c.label);
            }
        }
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    for path in &report.files_written {
        println!("wrote {}", path.display());
    }
    if report.is_partial() {
        eprintln!("{} categor(ies) failed:", report.failures.len());
        for f in &report.failures {
            eprintln!("  {f}");
        }
    }
    if !report.gaps.is_empty() {
        eprintln!("{} institute(s) without a state mapping:", report.gaps.len());
        for name in report.gaps.names() {
            eprintln!("  {name}");
        }
    }
}

fn print_view(view: &View<'_>) {
    println!(
        "Category: {}  Region: {}",
        view.category.label(),
        view.region.label()
    );
    println!(
        "Institutes: {}  Avg score: {:.2}\n",
        view.summary.count, view.summary.avg_score
    );

    println!("Top {} by score", view.top.len());
    for e in &view.top {
        let score = e.score.map(|s| format!("{s:.2}")).unwrap_or_else(|| s!("-"));
        println!("  {score:>6}  {}  [{}]", e.name, e.category);
    }

    println!("\nBy region");
    for (region, n) in &view.regions {
        println!("  {:<11} {n}", region.label());
    }

    println!("\nScores by category (min / q1 / median / q3 / max)");
    for series in &view.scores {
        match series.box_stats() {
            Some(b) => println!(
                "  {:<24} {:.2} / {:.2} / {:.2} / {:.2} / {:.2}",
                series.category, b.min, b.q1, b.median, b.q3, b.max
            ),
            None => println!("  {:<24} no scores", series.category),
        }
    }
}

/// Progress lines on stderr.
#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} categor(ies)…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, category: &str, rows: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {category}: {rows} rows", self.done, self.total);
    }
    fn item_failed(&mut self, category: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {category}: FAILED ({reason})", self.done, self.total);
    }
}
