// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::core::retry::RetryPolicy;
use crate::error::ConfigError;
use crate::specs::categories::{self, Category};

/// Everything a run needs. Loadable from JSON; every field falls back to its default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub pipeline: PipelineOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelector {
    #[default]
    All,
    Only(Vec<String>),
}

impl CategorySelector {
    /// Catalogue entries in catalogue order. Keys are labels or slugs, any case.
    pub fn resolve(&self) -> Result<Vec<&'static Category>, ConfigError> {
        match self {
            CategorySelector::All => Ok(categories::CATALOGUE.iter().collect()),
            CategorySelector::Only(keys) => {
                let mut picked: Vec<&'static Category> = Vec::with_capacity(keys.len());
                for key in keys {
                    let cat = categories::find(key)
                        .ok_or_else(|| ConfigError::UnknownCategory(key.clone()))?;
                    if !picked.iter().any(|c| c.label == cat.label) {
                        picked.push(cat);
                    }
                }
                picked.sort_by_key(|c| categories::position(c));
                Ok(picked)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub year: u16,
    pub categories: CategorySelector,
    pub top_n: u32,
    pub state_map: PathBuf,
    pub workers: usize,
    pub timeout_secs: u64,
    pub request_pause_ms: u64,
    pub retry: RetryPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            categories: CategorySelector::All,
            top_n: TOP_N,
            state_map: PathBuf::from(DEFAULT_STATE_MAP),
            workers: WORKERS,
            timeout_secs: REQUEST_TIMEOUT_SECS,
            request_pause_ms: REQUEST_PAUSE_MS,
            retry: RetryPolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
    pub fn delim(&self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }
    /// Guess from a file extension; anything but `.tsv` reads as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/nirf_<year>_top<n>_<slug>.<ext>`
    pub fn category_path(&self, year: u16, top_n: u32, category: &Category) -> PathBuf {
        let stem = format!("nirf_{year}_top{top_n}_{}", category.slug());
        self.out_dir.join(join!(&stem, ".", self.format.ext()))
    }

    /// `<out_dir>/nirf_<year>_combined.<ext>`
    pub fn combined_path(&self, year: u16) -> PathBuf {
        let year = year.to_string();
        self.out_dir
            .join(join!("nirf_", &year, "_combined.", self.format.ext()))
    }
}
