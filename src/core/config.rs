//! # Configuration
//!
//! Settings resolve with a fixed override hierarchy:
//! defaults → env vars (a `.env` file is loaded first, if present) → CLI.
//!
//! There is no config file. The request timeout is a constant.

use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

/// How long the single GET may take before it counts as failed.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_LOG_FILE: &str = "statuscheck.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_LOG_FILE: &str = "STATUSCHECK_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "STATUSCHECK_LOG_LEVEL";

// ============================================================================
// Resolved Config
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub url: String,
    pub timeout: Duration,
    /// `None` disables file logging.
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve config from the process environment.
pub fn resolve(url: String) -> ResolvedConfig {
    resolve_with(url, |key| std::env::var(key).ok())
}

/// Resolve config using `lookup` in place of the process environment.
pub fn resolve_with(url: String, lookup: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    // Log file: env → default; an empty value turns logging off
    let log_file = match lookup(ENV_LOG_FILE) {
        Some(path) if path.trim().is_empty() => None,
        Some(path) => Some(PathBuf::from(path)),
        None => Some(PathBuf::from(DEFAULT_LOG_FILE)),
    };

    // Log level: env → default; garbage falls back to the default
    let log_level = lookup(ENV_LOG_LEVEL)
        .and_then(|level| LevelFilter::from_str(level.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        url,
        timeout: CHECK_TIMEOUT,
        log_file,
        log_level,
    }
}
