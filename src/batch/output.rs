//! Transcript artifact writing.
//!
//! One line per segment: a bracketed start timestamp in seconds with one
//! decimal, a space, the trimmed segment text, then a blank line:
//!
//! ```text
//! [12.3s] hello
//!
//! [15.0s] and welcome back
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::stt::Segment;

/// Render a start offset as `[12.3s]`.
///
/// ```
/// use whisper_transcriber::batch::format_timestamp;
///
/// assert_eq!(format_timestamp(12_300), "[12.3s]");
/// assert_eq!(format_timestamp(0), "[0.0s]");
/// ```
pub fn format_timestamp(start_ms: u64) -> String {
    format!("[{:.1}s]", start_ms as f64 / 1000.0)
}

/// Write `segments` to `path`, replacing any existing artifact.
pub fn write_transcript(path: &Path, segments: &[Segment]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for segment in segments {
        writeln!(
            writer,
            "{} {}\n",
            format_timestamp(segment.start_ms),
            segment.text.trim()
        )?;
    }
    writer.flush()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
