//! Job orchestration: one job per link, run strictly one after another.
//!
//! A job's failure (bad URL, empty stream, muxer error) is recorded in its
//! report and never stops the remaining jobs.

mod output_dir;
mod run;

pub use output_dir::{allocate_output_dir, output_file_name};

use crate::config::TsgrabConfig;
use crate::error::JobError;
use crate::events::{emit, EventSender, JobEvent};
use crate::fetch::SegmentFetcher;
use std::path::PathBuf;

/// One link's processing unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub link: String,
    /// 1-based position in the link list; names the output folder.
    pub folder_index: usize,
    /// Lecture number used in the output file name.
    pub video_index: i64,
}

/// Assigns folder and video indices to at most `max_links` links.
pub fn plan_jobs(links: &[String], start_index: i64, max_links: usize) -> Vec<Job> {
    if links.len() > max_links {
        tracing::warn!(
            "{} links given, only the first {} are processed",
            links.len(),
            max_links
        );
    }
    let mut jobs = Vec::new();
    for (pos, link) in links.iter().take(max_links).enumerate() {
        let Some(video_index) = i64::try_from(pos)
            .ok()
            .and_then(|p| start_index.checked_add(p))
        else {
            tracing::warn!(
                "lecture number overflows after {}, remaining {} link(s) dropped",
                start_index,
                links.len().min(max_links) - pos
            );
            break;
        };
        jobs.push(Job {
            link: link.clone(),
            folder_index: pos + 1,
            video_index,
        });
    }
    jobs
}

/// What a finished job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    pub output_path: PathBuf,
    pub segments: usize,
    pub bytes: u64,
}

#[derive(Debug)]
pub struct JobReport {
    pub job: Job,
    pub result: Result<Completed, JobError>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<JobReport>,
}

impl RunSummary {
    pub fn completed(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_ok()).count()
    }

    pub fn skipped(&self) -> usize {
        self.reports.len() - self.completed()
    }
}

/// Runs the fetch → assemble → mux pipeline for each link.
pub struct Orchestrator<'a> {
    cfg: &'a TsgrabConfig,
    fetcher: &'a dyn SegmentFetcher,
    events: Option<&'a EventSender>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(cfg: &'a TsgrabConfig, fetcher: &'a dyn SegmentFetcher) -> Self {
        Self {
            cfg,
            fetcher,
            events: None,
        }
    }

    pub fn with_events(mut self, events: &'a EventSender) -> Self {
        self.events = Some(events);
        self
    }

    /// Processes `links` in order. Blocks until every job has finished.
    pub fn run(&self, start_index: i64, links: &[String]) -> RunSummary {
        let mut summary = RunSummary::default();
        for job in plan_jobs(links, start_index, self.cfg.max_links) {
            let result = self.run_job(&job);
            if let Err(e) = &result {
                tracing::warn!(folder = job.folder_index, link = %job.link, "job skipped: {}", e);
                emit(
                    self.events,
                    JobEvent::JobSkipped {
                        folder_index: job.folder_index,
                        reason: e.to_string(),
                    },
                );
            }
            summary.reports.push(JobReport { job, result });
        }
        tracing::info!(
            "run finished: {} completed, {} skipped",
            summary.completed(),
            summary.skipped()
        );
        summary
    }

    pub fn run_job(&self, job: &Job) -> Result<Completed, JobError> {
        run::run_job(self.cfg, self.fetcher, self.events, job)
    }
}
