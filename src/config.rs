use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/urlblock/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlBlockConfig {
    /// Blocklist file used when no `--blocklist` is given on the command line.
    #[serde(default)]
    pub blocklist_path: Option<PathBuf>,
}

impl UrlBlockConfig {
    /// Picks the blocklist file: an explicit override wins over the configured path.
    pub fn resolve_blocklist_path(&self, override_path: Option<&Path>) -> Option<PathBuf> {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.blocklist_path.clone())
    }
}

/// Path of the config file: `~/.config/urlblock/config.toml`. Nothing is created.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlblock")
        .context("locate XDG config directory")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the default location. A missing file means defaults;
/// the config file is never written.
pub fn load() -> Result<UrlBlockConfig> {
    load_if_present(&config_path()?)
}

/// Load configuration from `path`, or the defaults if no such file exists.
pub fn load_if_present(path: &Path) -> Result<UrlBlockConfig> {
    if !path.is_file() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(UrlBlockConfig::default());
    }
    load_from(path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlBlockConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlBlockConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
