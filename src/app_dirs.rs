use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "solve-timer";
const FALLBACK_HISTORY_FILE: &str = ".solve_timer_solves.json";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn state_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join(APP_NAME),
            )
        } else {
            ProjectDirs::from("", "", APP_NAME).map(|pd| pd.data_local_dir().to_path_buf())
        }
    }

    pub fn history_path() -> PathBuf {
        Self::state_dir()
            .map(|dir| dir.join("solves.json"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_HISTORY_FILE))
    }

    /// Where the first release kept its history: straight in the home dir
    pub fn legacy_history_path() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|base| base.home_dir().join(FALLBACK_HISTORY_FILE))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join(format!("{APP_NAME}.log")))
    }

    pub fn config_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", APP_NAME) {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("solve_timer_config.json")
        }
    }
}
