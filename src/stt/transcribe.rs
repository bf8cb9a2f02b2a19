//! Transcription option and result types.
//!
//! [`TranscribeOptions`] carries all settings that control a single
//! inference run.  [`Segment`] is the time-aligned output unit every
//! [`crate::stt::SttEngine`] produces.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// What the engine does with recognised speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Transcribe in the spoken language.
    Transcribe,
    /// Translate the speech to English.
    Translate,
}

impl Task {
    /// Both tasks, in prompt order.
    pub const ALL: &'static [Task] = &[Task::Transcribe, Task::Translate];

    /// Stable lowercase identifier.
    ///
    /// ```
    /// use whisper_transcriber::stt::Task;
    ///
    /// assert_eq!(Task::Transcribe.label(), "transcribe");
    /// assert_eq!(Task::Translate.label(), "translate");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Task::Transcribe => "transcribe",
            Task::Translate => "translate",
        }
    }
}

impl Default for Task {
    fn default() -> Self {
        Task::Transcribe
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TranscribeOptions
// ---------------------------------------------------------------------------

/// All parameters for a single transcription run.
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    /// ISO-639-1 language code (e.g. `"ja"`), or `None` to let the engine
    /// detect the spoken language itself.
    pub language: Option<String>,

    /// Transcribe in the source language, or translate to English.
    pub task: Task,

    /// Number of CPU threads handed to the engine.  Defaults to
    /// [`optimal_threads()`], capped at 8.
    pub n_threads: i32,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            language: None,
            task: Task::default(),
            n_threads: optimal_threads(),
        }
    }
}

/// Returns the number of physical CPU threads to use for inference,
/// capped at 8 to avoid diminishing returns on Whisper.
pub(crate) fn optimal_threads() -> i32 {
    std::thread::available_parallelism()
        .map(|n| n.get().min(8) as i32)
        .unwrap_or(4)
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A single time-aligned text chunk produced by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Segment text (may include punctuation inserted by the model).
    pub text: String,
    /// Segment start time in milliseconds from the start of the audio.
    pub start_ms: u64,
    /// Segment end time in milliseconds from the start of the audio.
    pub end_ms: u64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_auto_detect() {
        let opts = TranscribeOptions::default();
        assert!(opts.language.is_none());
        assert_eq!(opts.task, Task::Transcribe);
        assert!(opts.n_threads >= 1);
    }

    #[test]
    fn task_display_matches_label() {
        for task in Task::ALL {
            assert_eq!(task.to_string(), task.label());
        }
    }

    #[test]
    fn optimal_threads_is_positive_and_at_most_8() {
        let t = optimal_threads();
        assert!((1..=8).contains(&t));
    }
}
