#![allow(dead_code)]

pub mod segment_server;

use std::path::{Path, PathBuf};

/// Executable stand-in for ffmpeg: copies stdin to the last argument.
#[cfg(unix)]
pub fn fake_muxer(dir: &Path) -> PathBuf {
    script(dir, "fake-ffmpeg", "for last; do :; done\ncat > \"$last\"")
}

/// Muxer that rejects its input and exits non-zero.
#[cfg(unix)]
pub fn failing_muxer(dir: &Path) -> PathBuf {
    script(
        dir,
        "failing-ffmpeg",
        "cat > /dev/null\necho 'pipe:0: Invalid data found when processing input' >&2\nexit 1",
    )
}

#[cfg(unix)]
fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Body served for segment `i`; distinct per index so ordering is checkable.
pub fn segment_body(i: u64) -> Vec<u8> {
    let mut body = vec![0x47u8; 188];
    body[1..9].copy_from_slice(&i.to_be_bytes());
    body
}
