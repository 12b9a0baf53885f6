// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.nirfindia.org/Rankings";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; nirf_scrape/0.1)";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;
pub const RETRY_ATTEMPTS: usize = 3;
pub const RETRY_BACKOFF_MS: u64 = 500;

// Rankings
pub const DEFAULT_YEAR: u16 = 2025;
pub const TOP_N: u32 = 10;
pub const DEFAULT_STATE_MAP: &str = "institute_state_map.json";

// Local store / logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Dashboard
pub const DASHBOARD_TOP_K: usize = 10;
