//! Logging setup

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init, LogInitError};
