//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "portal_client=info,warn";
pub const LOG_FILE_PREFIX: &str = "portal-client.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "portal_client=debug,info")
    pub log_level: String,
    /// Directory for daily-rotated log files; stderr when `None`
    pub log_dir: Option<PathBuf>,
    /// Emit ANSI colours (stderr only)
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from `RUST_LOG`, `PORTAL_LOG_DIR` and `NO_COLOR`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: lookup("PORTAL_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            ansi: lookup("NO_COLOR").is_none(),
        }
    }
}
