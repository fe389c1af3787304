//! Application configuration

use std::path::PathBuf;

use crate::constants;

/// Runtime configuration for one process
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Model artifact bundle directory
    pub artifact_dir: PathBuf,

    /// Prediction log (CSV) path
    pub log_path: PathBuf,

    /// Record every completed prediction
    pub auto_save: bool,

    /// Rows in the recent-activity listing
    pub recent_limit: usize,
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {:?}", path);
        }

        Self {
            artifact_dir: PathBuf::from(constants::get_artifact_dir()),
            log_path: PathBuf::from(constants::get_log_path()),
            auto_save: constants::is_auto_save_enabled(),
            recent_limit: constants::get_recent_limit(),
        }
    }

    /// Override paths given on the command line
    pub fn with_overrides(mut self, artifact_dir: Option<PathBuf>, log_path: Option<PathBuf>) -> Self {
        if let Some(dir) = artifact_dir {
            self.artifact_dir = dir;
        }
        if let Some(path) = log_path {
            self.log_path = path;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from(constants::DEFAULT_ARTIFACT_DIR),
            log_path: PathBuf::from(constants::DEFAULT_LOG_PATH),
            auto_save: constants::DEFAULT_AUTO_SAVE,
            recent_limit: constants::DEFAULT_RECENT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_path, PathBuf::from("Prediction_Log.csv"));
        assert_eq!(config.artifact_dir, PathBuf::from("artifacts"));
        assert!(config.auto_save);
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn test_overrides_replace_paths() {
        let config = AppConfig::default()
            .with_overrides(Some(PathBuf::from("/tmp/model")), None);
        assert_eq!(config.artifact_dir, PathBuf::from("/tmp/model"));
        assert_eq!(config.log_path, PathBuf::from("Prediction_Log.csv"));
    }
}
