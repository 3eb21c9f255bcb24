//! wxdash Core Library
//!
//! Shared utilities for the dashboard and fetcher binaries:
//! - Configuration loading (XDG-compliant)
//! - Logger setup

mod config;
mod logging;

pub use config::{find_config_file, load_config, ConfigSource};
pub use logging::{get_log_level, setup_logger};

/// Application name used for XDG paths
pub const APP_NAME: &str = "wxdash";

/// Default dashboard port
pub const DEFAULT_DASHBOARD_PORT: u16 = 9810;
