use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Content-quality thresholds for trashing undersized downloads
/// (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Minimum number of non-empty lines a downloaded book must have.
    pub min_lines: usize,
    /// Minimum number of whitespace-separated words a downloaded book must have.
    pub min_words: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_lines: 10,
            min_words: 100,
        }
    }
}

/// Global configuration loaded from `~/.config/bookpile/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookpileConfig {
    /// Connect timeout for each fetch, in seconds.
    pub connect_timeout_secs: u64,
    /// Total transfer timeout for each fetch, in seconds.
    pub transfer_timeout_secs: u64,
    /// User-Agent header sent with each request.
    pub user_agent: String,
    /// Re-download files that already exist in the output directory.
    /// The CLI `--overwrite` flag takes precedence when given.
    #[serde(default)]
    pub overwrite_existing: bool,
    /// Optional quality thresholds; if missing, built-in defaults are used.
    #[serde(default)]
    pub quality: Option<QualityConfig>,
}

impl Default for BookpileConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            transfer_timeout_secs: 600,
            user_agent: concat!("bookpile/", env!("CARGO_PKG_VERSION")).to_string(),
            overwrite_existing: false,
            quality: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bookpile")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, writing a default file on first run.
pub fn load_or_init() -> Result<BookpileConfig> {
    let path = config_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)?;
        return Ok(toml::from_str(&data)?);
    }

    let cfg = BookpileConfig::default();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml::to_string_pretty(&cfg)?)?;
    tracing::info!("created default config at {}", path.display());
    Ok(cfg)
}
