//! One job end to end: template, output dir, fetch, assemble, mux.

use super::output_dir::{allocate_output_dir, output_file_name};
use super::{Completed, Job};
use crate::assembler::OrderedSegments;
use crate::config::TsgrabConfig;
use crate::error::JobError;
use crate::events::{emit, EventSender, JobEvent};
use crate::fetch::SegmentFetcher;
use crate::mux::MuxSink;
use crate::scheduler::run_batches;
use crate::template::SegmentTemplate;

pub(super) fn run_job(
    cfg: &TsgrabConfig,
    fetcher: &dyn SegmentFetcher,
    events: Option<&EventSender>,
    job: &Job,
) -> Result<Completed, JobError> {
    let template = SegmentTemplate::from_url(&job.link)?;

    let output_dir = allocate_output_dir(&cfg.base_dir, job.folder_index).map_err(|source| {
        JobError::OutputDir {
            path: cfg.base_dir.join(job.folder_index.to_string()),
            source,
        }
    })?;
    let output_path = output_dir.join(output_file_name(job.video_index));

    tracing::info!("[Folder {}] Downloading parts:", output_dir.display());
    emit(
        events,
        JobEvent::JobStarted {
            folder_index: job.folder_index,
            video_index: job.video_index,
            output_dir: output_dir.clone(),
        },
    );

    let fetched = run_batches(&template, fetcher, &cfg.batch_policy(), events);
    tracing::debug!(
        segments = fetched.segments.len(),
        batches = fetched.batches,
        stop = ?fetched.stop,
        "fetch phase finished"
    );

    let ordered = OrderedSegments::new(fetched.segments)?;
    let segments = ordered.segment_count();
    if let (Some(first), Some(last)) = (ordered.indices().next(), ordered.indices().last()) {
        tracing::debug!(first, last, "assembled {} segments", segments);
    }

    tracing::info!("Merging {} parts with {}...", segments, cfg.mux.program.display());
    emit(events, JobEvent::Merging { segments });

    let mut sink = MuxSink::spawn(&cfg.mux, &output_path)?;
    let bytes = match ordered.write_to(&mut sink) {
        Ok(n) => n,
        // The exit status and stderr usually explain a broken pipe better.
        Err(write_err) => return Err(sink.close().err().unwrap_or(write_err)),
    };
    sink.close()?;

    tracing::info!("Merged to: {}", output_path.display());
    emit(
        events,
        JobEvent::Merged {
            output: output_path.clone(),
        },
    );

    Ok(Completed {
        output_path,
        segments,
        bytes,
    })
}
