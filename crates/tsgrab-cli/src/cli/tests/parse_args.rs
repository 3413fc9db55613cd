//! Argument parsing and config overrides.

use super::parse;
use crate::cli::Cli;
use clap::Parser;
use std::path::{Path, PathBuf};
use tsgrab_core::config::TsgrabConfig;

#[test]
fn start_index_and_links() {
    let cli = parse(&[
        "tsgrab",
        "5",
        "https://h/a/seg001.ts",
        "https://h/b/seg001.ts?x=1",
    ]);
    assert_eq!(cli.start_index, 5);
    assert_eq!(
        cli.links,
        vec!["https://h/a/seg001.ts", "https://h/b/seg001.ts?x=1"]
    );
    assert!(cli.overrides.base_dir.is_none());
    assert!(cli.overrides.ffmpeg.is_none());
}

#[test]
fn negative_start_index() {
    let cli = parse(&["tsgrab", "-2", "https://h/a/seg1.ts"]);
    assert_eq!(cli.start_index, -2);
}

#[test]
fn missing_links_is_an_error() {
    assert!(Cli::try_parse_from(["tsgrab", "1"]).is_err());
    assert!(Cli::try_parse_from(["tsgrab"]).is_err());
}

#[test]
fn non_integer_start_index_is_an_error() {
    assert!(Cli::try_parse_from(["tsgrab", "one", "https://h/a/seg1.ts"]).is_err());
    assert!(Cli::try_parse_from(["tsgrab", "1.5", "https://h/a/seg1.ts"]).is_err());
}

#[test]
fn overrides_parse() {
    let cli = parse(&[
        "tsgrab",
        "1",
        "https://h/a/seg1.ts",
        "--base-dir",
        "/tmp/out",
        "--concurrency",
        "6",
        "--stop-after-misses",
        "9",
        "--max-parts",
        "50",
        "--start-part",
        "2",
        "--ffmpeg",
        "/usr/local/bin/ffmpeg",
    ]);
    let o = &cli.overrides;
    assert_eq!(o.base_dir.as_deref(), Some(Path::new("/tmp/out")));
    assert_eq!(o.concurrency, Some(6));
    assert_eq!(o.stop_after_misses, Some(9));
    assert_eq!(o.max_parts, Some(50));
    assert_eq!(o.start_part, Some(2));
    assert_eq!(o.ffmpeg.as_deref(), Some(Path::new("/usr/local/bin/ffmpeg")));
}

#[test]
fn overrides_apply_only_what_was_given() {
    let cli = parse(&[
        "tsgrab",
        "1",
        "https://h/a/seg1.ts",
        "--concurrency",
        "4",
        "--ffmpeg",
        "avconv",
    ]);
    let mut cfg = TsgrabConfig::default();
    cli.overrides.apply(&mut cfg);
    assert_eq!(cfg.concurrent_downloads, 4);
    assert_eq!(cfg.mux.program, PathBuf::from("avconv"));
    assert_eq!(cfg.stop_after_misses, 3);
    assert_eq!(cfg.base_dir, TsgrabConfig::default().base_dir);
}
