use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::scheduler::BatchPolicy;

/// External remux process settings (optional `[mux]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuxConfig {
    /// Program to spawn; looked up on `PATH` when not absolute.
    pub program: PathBuf,
    /// Value passed to `-threads`.
    pub threads: u32,
    /// Value passed to `-preset`.
    pub preset: String,
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
            threads: 8,
            preset: "ultrafast".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/tsgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsgrabConfig {
    /// Directory under which per-job folders (`1`, `2`, `2_1`, ...) are created.
    pub base_dir: PathBuf,
    /// Maximum number of links processed per run; extra links are ignored.
    pub max_links: usize,
    /// Segment index at which scheduling stops (exclusive bound on batch start).
    pub max_parts: u64,
    /// First segment index fetched.
    pub start_part: u64,
    /// Consecutive missing segments that end the stream (checked on empty batches).
    pub stop_after_misses: u32,
    /// Fetches per batch; also the worker pool size.
    pub concurrent_downloads: usize,
    /// Connect and stall timeout for a single segment GET, in seconds.
    pub fetch_timeout_secs: u64,
    #[serde(default)]
    pub mux: MuxConfig,
}

impl Default for TsgrabConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("/sdcard/IIT"),
            max_links: 15,
            max_parts: 10_000,
            start_part: 0,
            stop_after_misses: 3,
            concurrent_downloads: 3,
            fetch_timeout_secs: 10,
            mux: MuxConfig::default(),
        }
    }
}

impl TsgrabConfig {
    pub fn batch_policy(&self) -> BatchPolicy {
        BatchPolicy {
            start_part: self.start_part,
            max_parts: self.max_parts,
            concurrent_downloads: self.concurrent_downloads.max(1),
            stop_after_misses: self.stop_after_misses,
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tsgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TsgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TsgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TsgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
