//! STT (Speech-to-Text) engine module.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 SttEngine (trait)                   │
//! │                                                     │
//! │   ┌─────────────┐      ┌───────────────┐            │
//! │   │  ModelPaths │      │ WhisperEngine │            │
//! │   │ - resolve   │─────▶│ - ctx         │            │
//! │   │ - exists?   │      └───────┬───────┘            │
//! │   └─────────────┘              │                    │
//! │                                ▼                    │
//! │                   ┌─────────────────────────┐       │
//! │                   │  transcribe(path, opts) │       │
//! │                   │  file → Vec<Segment>    │       │
//! │                   └─────────────────────────┘       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use whisper_transcriber::stt::{SttEngine, TranscribeOptions, WhisperEngine};
//!
//! let engine = WhisperEngine::load("models/ggml-small.bin")
//!     .expect("model file missing");
//!
//! let opts = TranscribeOptions::default(); // auto-detect language, transcribe
//! let segments = engine
//!     .transcribe("audio/interview.m4a".as_ref(), &opts)
//!     .unwrap();
//! for s in &segments {
//!     println!("{} {}", s.start_ms, s.text);
//! }
//! ```

pub mod engine;
pub mod model;
pub mod transcribe;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use engine::{SttEngine, SttError, WhisperEngine};
pub use model::{ModelPaths, ModelSize};
pub use transcribe::{Segment, Task, TranscribeOptions};

// test-only re-export so the batch runner test module can import
// MockSttEngine without the full `engine::` path.
#[cfg(test)]
pub use engine::MockSttEngine;
