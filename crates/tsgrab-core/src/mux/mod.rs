//! External remux process wrapper.
//!
//! Spawns the muxer (ffmpeg by default) reading MPEG-TS on stdin and writing
//! a stream-copied container to the output path. Writes go straight into the
//! child's stdin pipe, so a slow muxer blocks the writer instead of letting
//! data pile up in memory.
//!
//! The stdin pipe is closed and the child reaped on every path: explicitly in
//! [`MuxSink::close`], or on drop if the sink is abandoned after a failure.

mod command;
mod stderr;

pub use command::mux_args;

use crate::assembler::SegmentSink;
use crate::config::MuxConfig;
use crate::error::JobError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::thread::JoinHandle;

pub struct MuxSink {
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: Option<JoinHandle<String>>,
    output: PathBuf,
    status: Option<ExitStatus>,
}

impl MuxSink {
    /// Spawns the muxer for `output`.
    pub fn spawn(cfg: &MuxConfig, output: &Path) -> Result<Self, JobError> {
        let mut child = Command::new(&cfg.program)
            .args(mux_args(cfg, output))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| JobError::MuxFailure {
                output: output.to_path_buf(),
                message: format!("failed to spawn {}: {}", cfg.program.display(), e),
            })?;
        tracing::debug!(
            program = %cfg.program.display(),
            pid = child.id(),
            output = %output.display(),
            "mux process started"
        );

        let stdin = child.stdin.take();
        let stderr = child.stderr.take().map(stderr::drain);
        Ok(Self {
            child,
            stdin,
            stderr,
            output: output.to_path_buf(),
            status: None,
        })
    }

    /// Forwards `bytes` to the muxer's stdin, blocking until the pipe accepts them.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), JobError> {
        let res = match self.stdin.as_mut() {
            Some(stdin) => stdin.write_all(bytes),
            None => return Err(self.failure("input already closed".to_string())),
        };
        res.map_err(|e| self.failure(format!("write to mux input failed: {}", e)))
    }

    /// Closes stdin, waits for the muxer to exit, and checks its status.
    pub fn close(mut self) -> Result<(), JobError> {
        let status = self
            .finish()
            .map_err(|e| self.failure(format!("waiting for mux process: {}", e)))?;
        let stderr_tail = self
            .stderr
            .take()
            .and_then(|h| h.join().ok())
            .unwrap_or_default();
        if status.success() {
            tracing::debug!(output = %self.output.display(), "mux process exited cleanly");
            return Ok(());
        }
        let message = if stderr_tail.is_empty() {
            format!("exited with {}", status)
        } else {
            format!("exited with {}: {}", status, stderr_tail)
        };
        Err(self.failure(message))
    }

    fn finish(&mut self) -> io::Result<ExitStatus> {
        if let Some(status) = self.status {
            return Ok(status);
        }
        // Dropping stdin is the end-of-input signal.
        drop(self.stdin.take());
        let status = self.child.wait()?;
        self.status = Some(status);
        Ok(status)
    }

    fn failure(&self, message: String) -> JobError {
        JobError::MuxFailure {
            output: self.output.clone(),
            message,
        }
    }
}

impl SegmentSink for MuxSink {
    type Error = JobError;

    fn write_segment(&mut self, bytes: &[u8]) -> Result<(), JobError> {
        self.write(bytes)
    }
}

impl Drop for MuxSink {
    fn drop(&mut self) {
        if self.status.is_none() {
            if let Err(e) = self.finish() {
                tracing::warn!(output = %self.output.display(), "mux process not reaped: {}", e);
            }
        }
    }
}
