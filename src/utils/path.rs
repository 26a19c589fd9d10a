//! Path utilities: resolve the configuration file, expand ~.

use crate::config::Config;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// `--config-file` override if given, platform default otherwise.
pub fn config_path(custom: Option<&str>) -> PathBuf {
    match custom {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    }
}
