//! Remux command line.

use crate::config::MuxConfig;
use std::ffi::OsString;
use std::path::Path;

/// Arguments for a stream-copy remux of MPEG-TS read from stdin into `output`.
pub fn mux_args(cfg: &MuxConfig, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-f",
        "mpegts",
        "-i",
        "pipe:0",
        "-c",
        "copy",
        "-threads",
    ]
    .iter()
    .map(OsString::from)
    .collect();
    args.push(cfg.threads.to_string().into());
    args.push("-preset".into());
    args.push(cfg.preset.as_str().into());
    args.push(output.as_os_str().to_owned());
    args
}
