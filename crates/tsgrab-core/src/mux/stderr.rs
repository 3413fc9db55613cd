//! Background drain for the mux process's stderr.

use std::io::Read;
use std::process::ChildStderr;
use std::thread::JoinHandle;

/// Bytes of stderr kept for error messages.
pub(super) const TAIL_BYTES: usize = 4096;

/// Reads `stderr` to EOF on its own thread so the child never blocks on a
/// full pipe. Resolves to the last [`TAIL_BYTES`] bytes, lossily decoded.
pub(super) fn drain(mut stderr: ChildStderr) -> JoinHandle<String> {
    std::thread::spawn(move || {
        let mut tail = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            match stderr.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => push_tail(&mut tail, &buf[..n]),
            }
        }
        String::from_utf8_lossy(&tail).trim().to_string()
    })
}

fn push_tail(tail: &mut Vec<u8>, data: &[u8]) {
    tail.extend_from_slice(data);
    if tail.len() > TAIL_BYTES {
        let excess = tail.len() - TAIL_BYTES;
        tail.drain(..excess);
    }
}
