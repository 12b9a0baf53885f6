// src/config/state.rs
use super::consts::DASHBOARD_TOP_K;
use super::options::AppOptions;
use crate::query::{CategoryFilter, RegionFilter};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Dashboard filters
    pub category: CategoryFilter,
    pub region: RegionFilter,

    /// Rows in the top-score table
    pub top_k: usize,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            region: RegionFilter::All,
            top_k: DASHBOARD_TOP_K,
            window_w: 1100,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
