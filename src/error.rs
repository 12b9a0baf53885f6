// src/error.rs
//! Error taxonomy for the ranking pipeline.
//!
//! `TransportError` and `ParseError` are per-category and never abort sibling
//! categories; `PipelineError` is reserved for whole-run failures. A missing
//! institute → state mapping is *not* an error (see `enrich::EnrichmentGaps`).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fetch failed before any markup was obtained.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("timed out fetching {url}")]
    Timeout { url: String },
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },
    #[error("could not build HTTP client: {reason}")]
    Client { reason: String },
}

impl TransportError {
    /// Timeouts and 5xx are worth another attempt; 4xx and connection failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Status { status, .. } => *status >= 500,
            TransportError::Timeout { .. } => true,
            TransportError::Network { .. } | TransportError::Client { .. } => false,
        }
    }
}

/// Markup arrived but did not yield a usable ranking table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no table found in page")]
    NoTableFound,
    #[error("no recognized columns (found headers: {headers:?})")]
    NoRecognizedColumns { headers: Vec<String> },
}

/// Anything that stops one category from reaching the combined dataset.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("export failed: {0}")]
    Export(#[from] io::Error),
}

/// A category that was dropped from the run, with the reason.
#[derive(Debug, Error)]
#[error("{category}: {error}")]
pub struct CategoryFailure {
    pub category: String,
    #[source]
    pub error: CategoryError,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown category '{0}' (see `categories`)")]
    UnknownCategory(String),
    #[error("could not read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
}

/// Whole-run failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no categories selected")]
    NothingSelected,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not load institute-state map {path}: {source}")]
    StateMap { path: PathBuf, source: io::Error },
    #[error("no category produced a ranking ({} failed)", .failures.len())]
    NoCategories { failures: Vec<CategoryFailure> },
    #[error(transparent)]
    Http(#[from] TransportError),
    #[error("combined export failed: {0}")]
    Export(#[from] io::Error),
}

/// Reading a previously exported combined file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed combined file {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}
