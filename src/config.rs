use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_dirs::AppDirs;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// run the 15 second inspection before each solve
    pub inspection: bool,
    /// past solves shown under the timer
    pub recent_solves: usize,
    pub tick_rate_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inspection: true,
            recent_solves: 5,
            tick_rate_ms: 30,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

pub trait ConfigStore {
    /// Read the stored config without side effects
    fn read(&self) -> Result<Config, ConfigError>;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;

    /// Settle a `read` result once logging is up: a missing file gets the
    /// defaults written out, an unusable one is reported and left alone.
    fn resolve(&self, loaded: Result<Config, ConfigError>) -> Config {
        match loaded {
            Ok(cfg) => cfg,
            Err(ConfigError::Missing) => {
                let cfg = Config::default();
                match self.save(&cfg) {
                    Ok(()) => tracing::info!("wrote default config"),
                    Err(e) => tracing::warn!(error = %e, "could not write default config"),
                }
                cfg
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default config");
                Config::default()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self::with_path(AppDirs::config_path())
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn read(&self) -> Result<Config, ConfigError> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::Missing,
            _ => ConfigError::Io(e),
        })?;
        Ok(serde_json::from_slice::<Config>(&bytes)?)
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}
