//! Input-file discovery for the wizard's file-selection step.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::AUDIO_EXTENSIONS;

/// Scan `dir` for audio files.
///
/// Matches regular files whose lowercased extension is one of
/// [`AUDIO_EXTENSIONS`].  The result is deduplicated and sorted by
/// case-insensitive file name, so repeated scans of an unchanged directory
/// return the identical list.
pub fn discover_audio_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| AUDIO_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
        if matches {
            files.push(path);
        }
    }

    files.sort_by_key(|p| sort_key(p));
    files.dedup_by_key(|p| sort_key(p));
    Ok(files)
}

fn sort_key(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
