//! Line-per-event progress output.

use tokio::sync::mpsc::Receiver;
use tsgrab_core::events::JobEvent;

pub(super) fn render(event: &JobEvent) -> String {
    match event {
        JobEvent::JobStarted { output_dir, .. } => {
            format!("[Folder {}] Downloading parts:", output_dir.display())
        }
        JobEvent::SegmentDownloaded { name, .. } => format!("Downloaded: {}", name),
        JobEvent::SegmentMissing { name, .. } => format!("Missing: {}", name),
        JobEvent::StreamEnded { threshold, .. } => {
            format!("Stopped after {} consecutive missing parts.", threshold)
        }
        JobEvent::Merging { segments } => format!("Merging {} parts...", segments),
        JobEvent::Merged { output } => format!("Merged to: {}", output.display()),
        JobEvent::JobSkipped {
            folder_index,
            reason,
        } => format!("[Link {}] skipped: {}", folder_index, reason),
    }
}

/// Prints events until the pipeline drops its sender.
pub(super) async fn print_events(mut rx: Receiver<JobEvent>) {
    while let Some(event) = rx.recv().await {
        if matches!(event, JobEvent::JobStarted { .. }) {
            println!();
        }
        println!("{}", render(&event));
    }
}
