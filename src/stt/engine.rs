//! Core STT engine trait and implementations.
//!
//! # Overview
//!
//! [`SttEngine`] is the interface the batch runner drives: one audio file in,
//! time-aligned [`Segment`]s out.  It is object-safe and `Send + Sync` so it
//! can be held behind a `&dyn SttEngine` or `Arc<dyn SttEngine>`.
//!
//! [`WhisperEngine`] is the production implementation wrapping a
//! `whisper_rs::WhisperContext`.  Per call it decodes the input file,
//! downmixes and resamples to 16 kHz mono f32, runs inference on a fresh
//! `WhisperState`, and collects the segments.
//!
//! [`MockSttEngine`] (available under `#[cfg(test)]`) scripts per-file
//! outcomes so the batch runner can be tested without a GGML model file or
//! real audio.

use std::path::Path;

use thiserror::Error;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::{decode_audio, to_mono_16k, DecodeError};
use crate::stt::transcribe::{Segment, Task, TranscribeOptions};

// ---------------------------------------------------------------------------
// SttError
// ---------------------------------------------------------------------------

/// All errors that can arise from the STT subsystem.
#[derive(Debug, Error)]
pub enum SttError {
    /// The GGML model file was not found at the given path.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// `whisper_rs` failed to initialise a `WhisperContext` or `WhisperState`.
    #[error("whisper context initialisation failed: {0}")]
    ContextInit(String),

    /// The input file could not be decoded to PCM.
    #[error("failed to decode {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: DecodeError,
    },

    /// The decoded audio is shorter than the 0.5 s minimum Whisper needs.
    #[error("audio too short — minimum 0.5 s of decodable audio required")]
    AudioTooShort,

    /// An error occurred during the inference pass.
    #[error("transcription error: {0}")]
    Transcription(String),
}

// ---------------------------------------------------------------------------
// SttEngine trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for speech-to-text engines.
///
/// # Contract
///
/// - Produces segments in audio order, with start offsets in milliseconds.
/// - `opts.language == None` requests built-in language detection.
/// - Any failure (decode, inference) is returned as an `Err`; the engine
///   never writes output artifacts itself.
pub trait SttEngine: Send + Sync {
    /// Transcribe the audio file at `input` into time-aligned segments.
    fn transcribe(&self, input: &Path, opts: &TranscribeOptions)
        -> Result<Vec<Segment>, SttError>;
}

// Compile-time assertion: Box<dyn SttEngine> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SttEngine>) {}
};

/// Minimum conditioned audio length: 0.5 s × 16 000 Hz = 8 000 samples.
const MIN_AUDIO_SAMPLES: usize = 8_000;

// ---------------------------------------------------------------------------
// WhisperEngine
// ---------------------------------------------------------------------------

/// Production STT engine that wraps a `whisper_rs::WhisperContext`.
///
/// A new `WhisperState` is created for every [`SttEngine::transcribe`] call,
/// so the engine can be shared across callers without locking; the model
/// weights are read-only after [`WhisperEngine::load`].
pub struct WhisperEngine {
    ctx: WhisperContext,
}

impl std::fmt::Debug for WhisperEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperEngine").finish_non_exhaustive()
    }
}

// SAFETY: WhisperContext is Send+Sync as declared by whisper-rs — the model
// weights are read-only after loading.
unsafe impl Send for WhisperEngine {}
unsafe impl Sync for WhisperEngine {}

impl WhisperEngine {
    /// Load a GGML model from `model_path` and prepare it for inference.
    ///
    /// # Errors
    ///
    /// - [`SttError::ModelNotFound`] — `model_path` does not exist.
    /// - [`SttError::ContextInit`]  — whisper-rs failed to load the file.
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, SttError> {
        let path = model_path.as_ref();

        if !path.exists() {
            return Err(SttError::ModelNotFound(path.display().to_string()));
        }

        let path_str = path.to_str().ok_or_else(|| {
            SttError::ModelNotFound(format!(
                "model path contains non-UTF-8 characters: {}",
                path.display()
            ))
        })?;

        let ctx_params = WhisperContextParameters::default();
        let ctx = WhisperContext::new_with_params(path_str, ctx_params)
            .map_err(|e| SttError::ContextInit(e.to_string()))?;

        log::debug!("whisper model loaded from {}", path.display());
        Ok(Self { ctx })
    }

    /// Decode `input` and condition it to the 16 kHz mono f32 samples
    /// Whisper expects.
    fn load_samples(&self, input: &Path) -> Result<Vec<f32>, SttError> {
        let decoded = decode_audio(input).map_err(|source| SttError::Decode {
            file: input.display().to_string(),
            source,
        })?;

        let samples = to_mono_16k(&decoded.samples, decoded.channels, decoded.sample_rate);

        if samples.len() < MIN_AUDIO_SAMPLES {
            return Err(SttError::AudioTooShort);
        }
        Ok(samples)
    }
}

impl SttEngine for WhisperEngine {
    fn transcribe(
        &self,
        input: &Path,
        opts: &TranscribeOptions,
    ) -> Result<Vec<Segment>, SttError> {
        let samples = self.load_samples(input)?;

        let mut fp = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        // set_language takes an Option<&str> whose lifetime is tied to fp.
        // The borrow of `opts.language` remains alive until state.full()
        // returns, so the borrow is valid.
        fp.set_language(opts.language.as_deref());
        fp.set_translate(opts.task == Task::Translate);
        fp.set_n_threads(opts.n_threads);
        fp.set_print_progress(false);
        fp.set_print_realtime(false);
        fp.set_print_timestamps(false);

        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| SttError::ContextInit(e.to_string()))?;

        state
            .full(fp, &samples)
            .map_err(|e| SttError::Transcription(e.to_string()))?;

        let n_segments = state
            .full_n_segments()
            .map_err(|e| SttError::Transcription(e.to_string()))?;

        let mut segments: Vec<Segment> = Vec::with_capacity(n_segments as usize);

        for i in 0..n_segments {
            let text = state
                .full_get_segment_text(i)
                .map_err(|e| SttError::Transcription(format!("segment {i}: {e}")))?;

            // Timestamps are in centiseconds → multiply by 10 for ms.
            let t0 = state.full_get_segment_t0(i).unwrap_or(0).max(0) as u64 * 10;
            let t1 = state.full_get_segment_t1(i).unwrap_or(0).max(0) as u64 * 10;

            segments.push(Segment {
                text,
                start_ms: t0,
                end_ms: t1,
            });
        }

        log::debug!(
            "{}: {} segments",
            input.display(),
            segments.len()
        );
        Ok(segments)
    }
}

// ---------------------------------------------------------------------------
// MockSttEngine  (test-only)
// ---------------------------------------------------------------------------

/// A test double with a default response plus per-file-name overrides, so
/// runner tests can script mixed success/failure batches without any model
/// file or real audio on disk.
#[cfg(test)]
pub struct MockSttEngine {
    default: MockResponse,
    by_file: std::collections::HashMap<String, MockResponse>,
}

#[cfg(test)]
#[derive(Clone)]
enum MockResponse {
    Segments(Vec<Segment>),
    Fail(String),
}

#[cfg(test)]
impl MockSttEngine {
    /// Create a mock that returns `segments` for every file.
    pub fn ok(segments: Vec<Segment>) -> Self {
        Self {
            default: MockResponse::Segments(segments),
            by_file: std::collections::HashMap::new(),
        }
    }

    /// Create a mock that fails for every file.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            default: MockResponse::Fail(message.into()),
            by_file: std::collections::HashMap::new(),
        }
    }

    /// Override the response for one file name (not the full path).
    pub fn with_file(
        mut self,
        file_name: impl Into<String>,
        response: Result<Vec<Segment>, &str>,
    ) -> Self {
        let response = match response {
            Ok(segments) => MockResponse::Segments(segments),
            Err(message) => MockResponse::Fail(message.to_string()),
        };
        self.by_file.insert(file_name.into(), response);
        self
    }
}

#[cfg(test)]
impl SttEngine for MockSttEngine {
    fn transcribe(
        &self,
        input: &Path,
        _opts: &TranscribeOptions,
    ) -> Result<Vec<Segment>, SttError> {
        let key = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.by_file.get(&key).unwrap_or(&self.default) {
            MockResponse::Segments(segments) => Ok(segments.clone()),
            MockResponse::Fail(message) => Err(SttError::Transcription(message.clone())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
