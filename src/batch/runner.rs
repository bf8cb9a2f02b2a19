//! The batch queue runner.
//!
//! [`process_queue`] drives a transcription engine over an ordered file
//! queue.  One item's failure never aborts the batch: engine and write
//! failures are caught at a single boundary ([`transcribe_item`]) and
//! converted into a failed [`FileOutcome`]; the loop then continues with
//! the next item.  The injected [`BatchObserver`] is notified before and
//! after every item, strictly in queue order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::stt::{SttEngine, SttError, TranscribeOptions};

use super::ledger::{FileOutcome, RunLedger};
use super::output::write_transcript;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Batch-fatal failures — only possible before the first item runs.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to create output directory {dir}: {source}")]
    OutputDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-item failure, converted to outcome data at the loop boundary.
#[derive(Debug, Error)]
enum ItemError {
    #[error(transparent)]
    Engine(#[from] SttError),

    #[error("failed to write transcript: {0}")]
    Write(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// BatchObserver
// ---------------------------------------------------------------------------

/// Progress sink over the running batch.
///
/// `item_finished` is invoked after every item completes — success or
/// failure — never out of order and never batched.
pub trait BatchObserver {
    fn item_started(&mut self, index: usize, total: usize, file: &str);
    fn item_finished(&mut self, index: usize, total: usize, file: &str, success: bool);
}

/// Observer that ignores all notifications.
pub struct NullObserver;

impl BatchObserver for NullObserver {
    fn item_started(&mut self, _index: usize, _total: usize, _file: &str) {}
    fn item_finished(&mut self, _index: usize, _total: usize, _file: &str, _success: bool) {}
}

// ---------------------------------------------------------------------------
// process_queue
// ---------------------------------------------------------------------------

/// Process every file exactly once, in order, and return the ledger.
///
/// Ensures `output_dir` exists first (idempotent).  The returned ledger has
/// exactly one record per input file, in input order.
pub fn process_queue(
    engine: &dyn SttEngine,
    files: &[PathBuf],
    output_dir: &Path,
    opts: &TranscribeOptions,
    observer: &mut dyn BatchObserver,
) -> Result<RunLedger, BatchError> {
    fs::create_dir_all(output_dir).map_err(|source| BatchError::OutputDir {
        dir: output_dir.to_path_buf(),
        source,
    })?;

    let total = files.len();
    let mut ledger = RunLedger::new();

    for (i, input) in files.iter().enumerate() {
        let name = display_name(input);
        observer.item_started(i + 1, total, &name);
        log::info!("transcribing {}/{total}: {name}", i + 1);

        let error = match transcribe_item(engine, input, output_dir, opts) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("{name}: {e}");
                Some(e.to_string())
            }
        };
        let success = error.is_none();

        ledger.push(FileOutcome {
            file: name.clone(),
            success,
            error,
        });
        observer.item_finished(i + 1, total, &name, success);
    }

    Ok(ledger)
}

/// Run one queue item: inference, then artifact write.  This is the single
/// boundary where per-item failures are caught and turned into data.
fn transcribe_item(
    engine: &dyn SttEngine,
    input: &Path,
    output_dir: &Path,
    opts: &TranscribeOptions,
) -> Result<(), ItemError> {
    let segments = engine.transcribe(input, opts)?;
    let output = transcript_path(output_dir, input);
    write_transcript(&output, &segments)?;
    log::debug!("wrote {} segment(s) to {}", segments.len(), output.display());
    Ok(())
}

/// `<output_dir>/<input stem>.txt`.
pub fn transcript_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".txt");
    output_dir.join(name)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
