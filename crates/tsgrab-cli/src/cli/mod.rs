//! CLI for tsgrab.

mod progress;

use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;
use tsgrab_core::config::{self, TsgrabConfig};
use tsgrab_core::credentials::MessagingCredentials;
use tsgrab_core::events::JobEvent;
use tsgrab_core::fetch::CurlFetcher;
use tsgrab_core::job::Orchestrator;

/// Capacity of the progress channel between the pipeline thread and the printer.
const EVENT_BUFFER: usize = 256;

/// Top-level CLI for tsgrab.
#[derive(Debug, Parser)]
#[command(name = "tsgrab")]
#[command(
    about = "Download numbered .ts segments for each link and remux them into one file",
    long_about = None
)]
#[command(override_usage = "tsgrab <START_INDEX> <LINK1> [<LINK2> ... up to 15 links]")]
pub struct Cli {
    /// Lecture number of the first link; each following link gets the next number.
    #[arg(allow_negative_numbers = true)]
    pub start_index: i64,

    /// One example segment URL per video, e.g. https://host/path/seg0001.ts
    #[arg(required = true)]
    pub links: Vec<String>,

    #[command(flatten)]
    pub overrides: Overrides,
}

/// Per-run overrides of config.toml values.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Directory that receives the numbered output folders.
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Segments fetched per batch (and worker threads).
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Consecutive missing segments that end a stream.
    #[arg(long, value_name = "N")]
    pub stop_after_misses: Option<u32>,

    /// Highest segment index a batch may start at (exclusive).
    #[arg(long, value_name = "N")]
    pub max_parts: Option<u64>,

    /// First segment index to fetch.
    #[arg(long, value_name = "N")]
    pub start_part: Option<u64>,

    /// Muxer executable to use instead of `ffmpeg`.
    #[arg(long, value_name = "PATH")]
    pub ffmpeg: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(&self, cfg: &mut TsgrabConfig) {
        if let Some(dir) = &self.base_dir {
            cfg.base_dir = dir.clone();
        }
        if let Some(n) = self.concurrency {
            cfg.concurrent_downloads = n;
        }
        if let Some(n) = self.stop_after_misses {
            cfg.stop_after_misses = n;
        }
        if let Some(n) = self.max_parts {
            cfg.max_parts = n;
        }
        if let Some(n) = self.start_part {
            cfg.start_part = n;
        }
        if let Some(p) = &self.ffmpeg {
            cfg.mux.program = p.clone();
        }
    }
}

impl Cli {
    /// Parses process args and runs. Bad arguments print usage and return Ok.
    pub async fn run_from_args() -> Result<()> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(e) => {
                let _ = e.print();
                return Ok(());
            }
        };
        cli.run().await
    }

    pub async fn run(self) -> Result<()> {
        let mut cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("could not load config, using defaults: {:#}", e);
            TsgrabConfig::default()
        });
        self.overrides.apply(&mut cfg);
        tracing::debug!("effective config: {:?}", cfg);

        match MessagingCredentials::from_env() {
            Ok(Some(creds)) => tracing::debug!("messaging credentials present: {:?}", creds),
            Ok(None) => tracing::debug!("messaging credentials not set"),
            Err(e) => tracing::warn!("ignoring messaging credentials: {}", e),
        }

        let (tx, rx) = tokio::sync::mpsc::channel::<JobEvent>(EVENT_BUFFER);
        let printer = tokio::spawn(progress::print_events(rx));

        let start_index = self.start_index;
        let links = self.links;
        let summary = tokio::task::spawn_blocking(move || {
            let fetcher = CurlFetcher::new(cfg.fetch_timeout());
            Orchestrator::new(&cfg, &fetcher)
                .with_events(&tx)
                .run(start_index, &links)
        })
        .await
        .map_err(|e| anyhow::anyhow!("pipeline task join: {}", e))?;

        let _ = printer.await;
        println!(
            "Done: {} of {} video(s) merged.",
            summary.completed(),
            summary.reports.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
