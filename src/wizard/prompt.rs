//! Prompt seam between the setup wizard and the terminal.
//!
//! Every step prompt returns a [`Nav`], so navigation intent is a typed
//! variant rather than a sentinel mixed into the value space.  The wizard
//! is constructor-injected with a [`SetupPrompt`] implementation; the
//! production one lives in [`crate::ui::prompt`], and tests drive the state
//! machine with a scripted double.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::stt::{ModelSize, Task};

use super::steps::RunConfig;

// ---------------------------------------------------------------------------
// Nav
// ---------------------------------------------------------------------------

/// Outcome of one wizard prompt: a value, or a navigation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Nav<T> {
    /// The user supplied a value; the wizard advances.
    Value(T),
    /// Return to the previous step, discarding this step's tentative value.
    Back,
    /// Leave the wizard entirely.
    Exit,
}

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Failures of the prompt surface itself, as opposed to navigation.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user interrupted the prompt (e.g. Ctrl-C).  Distinct from both
    /// [`Nav::Exit`] and a declined confirmation — it aborts the wizard.
    #[error("interrupted")]
    Interrupted,

    #[error("terminal error: {0}")]
    Terminal(String),
}

// ---------------------------------------------------------------------------
// SetupPrompt
// ---------------------------------------------------------------------------

/// The interactive surface the wizard collects its configuration through.
pub trait SetupPrompt {
    /// Step 0 — language.  `Nav::Value(None)` selects auto-detect.  The
    /// surface offers no Back affordance here: there is no step before it.
    fn select_language(&mut self) -> Result<Nav<Option<String>>, PromptError>;

    /// Model size selection.
    fn select_model(&mut self) -> Result<Nav<ModelSize>, PromptError>;

    /// Task selection (transcribe / translate).
    fn select_task(&mut self) -> Result<Nav<Task>, PromptError>;

    /// Multi-select over `discovered` (already deduplicated and sorted).
    /// An empty selection is handed back as `Nav::Value(vec![])`; the
    /// wizard treats it as Back.
    fn select_files(&mut self, discovered: &[PathBuf])
        -> Result<Nav<Vec<PathBuf>>, PromptError>;

    /// Show the assembled configuration and ask for final yes/no
    /// confirmation.  An interrupt here must surface as
    /// [`PromptError::Interrupted`], never as `Ok(false)`.
    fn confirm(&mut self, config: &RunConfig) -> Result<bool, PromptError>;

    /// Discovery found no matching audio files under `dir`.
    fn notify_no_files(&mut self, dir: &Path);
}
