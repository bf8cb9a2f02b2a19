//! Batch processing: the queue runner, the results ledger and the
//! transcript writer.
//!
//! # Architecture
//!
//! ```text
//! RunConfig.files (ordered queue)
//!        │
//!        ▼
//! process_queue()                 ← sequential, one item at a time
//!        │
//!        ├─ SttEngine::transcribe(file)   ┐ per-item failures caught
//!        ├─ write_transcript(<stem>.txt)  ┘ here, recorded, never raised
//!        ├─ BatchObserver::item_finished  ← after every item, in order
//!        ▼
//! RunLedger (one FileOutcome per file, input order)
//! ```

pub mod ledger;
pub mod output;
pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use ledger::{FileOutcome, RunLedger};
pub use output::{format_timestamp, write_transcript};
pub use runner::{process_queue, transcript_path, BatchError, BatchObserver, NullObserver};
