//! Per-job output directory allocation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Creates `base/<folder_index>`, or `base/<folder_index>_1`, `_2`, ... if
/// taken. Never reuses an existing path. `base` is created if missing.
pub fn allocate_output_dir(base: &Path, folder_index: usize) -> io::Result<PathBuf> {
    fs::create_dir_all(base)?;
    let name = folder_index.to_string();
    let mut candidate = base.join(&name);
    let mut suffix = 0u32;
    loop {
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                suffix += 1;
                candidate = base.join(format!("{}_{}", name, suffix));
            }
            Err(e) => return Err(e),
        }
    }
}

/// Output file name for a lecture number.
pub fn output_file_name(video_index: i64) -> String {
    format!("Lecture{}.mp4", video_index)
}
