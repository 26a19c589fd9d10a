use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::core::now_marker::MAX_REFRESH;
use crate::core::planner::DEFAULT_HISTORY_LIMIT;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub history_limit: usize,
    pub now_marker_refresh_secs: u64,
    /// Columns used for the 24h grid of a log sheet.
    pub grid_width: usize,
    pub color: bool,
    /// Draw rest/fuel breaks on their own row instead of only in the legend.
    pub show_rest_break_row: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            now_marker_refresh_secs: MAX_REFRESH.as_secs(),
            grid_width: 48,
            color: true,
            show_rest_break_row: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("rtripplanner"),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtripplanner"),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtripplanner.conf")
    }

    /// Load `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn now_marker_interval(&self) -> Duration {
        Duration::from_secs(self.now_marker_refresh_secs).clamp(Duration::from_secs(1), MAX_REFRESH)
    }

    pub fn grid_width(&self) -> usize {
        self.grid_width.clamp(24, 240)
    }
}
