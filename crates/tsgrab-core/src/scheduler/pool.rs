//! Fixed-size pool of fetch workers living for one job.
//!
//! Workers pull `(index, url)` pairs from a shared queue and push a
//! [`Segment`] back for each, in completion order. Every submitted pair
//! produces exactly one result, even if the fetcher panics.

use crate::fetch::{Segment, SegmentFetcher, SegmentOutcome};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::Scope;

pub(super) struct FetchPool {
    work_tx: mpsc::Sender<(u64, String)>,
    results: mpsc::Receiver<Segment>,
}

impl FetchPool {
    /// Spawns `size` workers on `scope`. They exit once the pool is dropped.
    pub(super) fn start<'scope, 'env>(
        scope: &'scope Scope<'scope, 'env>,
        fetcher: &'env dyn SegmentFetcher,
        size: usize,
    ) -> Self {
        let (work_tx, work_rx) = mpsc::channel::<(u64, String)>();
        let work_rx = Arc::new(Mutex::new(work_rx));
        let (result_tx, results) = mpsc::channel();

        for _ in 0..size.max(1) {
            let work_rx = Arc::clone(&work_rx);
            let result_tx = result_tx.clone();
            scope.spawn(move || loop {
                let next = match work_rx.lock() {
                    Ok(rx) => rx.recv(),
                    Err(_) => break,
                };
                let Ok((index, url)) = next else {
                    break;
                };
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| fetcher.fetch(&url)))
                    .unwrap_or_else(|_| {
                        tracing::warn!(index, "segment fetcher panicked; treating as missing");
                        SegmentOutcome::Absent
                    });
                if result_tx.send(Segment { index, outcome }).is_err() {
                    break;
                }
            });
        }

        Self { work_tx, results }
    }

    /// Queues one fetch. Returns false if no worker is left to take it.
    pub(super) fn submit(&self, index: u64, url: String) -> bool {
        self.work_tx.send((index, url)).is_ok()
    }

    /// Next finished fetch, blocking until one is available.
    pub(super) fn recv(&self) -> Option<Segment> {
        self.results.recv().ok()
    }
}
