//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Every value can be overridden through the environment (see `logic::config`).

/// Default model artifact bundle directory
pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

/// Default prediction log path (CSV table)
pub const DEFAULT_LOG_PATH: &str = "Prediction_Log.csv";

/// Record every completed prediction unless disabled
pub const DEFAULT_AUTO_SAVE: bool = true;

/// Rows shown in the recent-activity listing
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Disaster Risk Core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get artifact directory from environment or use default
pub fn get_artifact_dir() -> String {
    std::env::var("DISASTER_ARTIFACT_DIR")
        .unwrap_or_else(|_| DEFAULT_ARTIFACT_DIR.to_string())
}

/// Get prediction log path from environment or use default
pub fn get_log_path() -> String {
    std::env::var("DISASTER_LOG_PATH")
        .unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string())
}

/// Check if auto-save of predictions is enabled
pub fn is_auto_save_enabled() -> bool {
    std::env::var("DISASTER_AUTO_SAVE")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(DEFAULT_AUTO_SAVE)
}

/// Get recent-activity row limit from environment or use default
pub fn get_recent_limit() -> usize {
    std::env::var("DISASTER_RECENT_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RECENT_LIMIT)
}
