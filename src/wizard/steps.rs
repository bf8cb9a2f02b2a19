//! The setup wizard state machine.
//!
//! Steps run in a fixed order, with backward navigation and early exit:
//!
//! ```text
//! Language ──▶ Model ──▶ Task ──▶ Files ──▶ Confirm
//!    │          ▲ │       ▲ │      ▲ │         │
//!   Exit      Back│     Back│    Back│     No → restart at Language
//!                Exit      Exit     Exit   Yes → RunConfig
//! ```
//!
//! Back discards only the current step's tentative value; everything chosen
//! earlier is retained.  Declining the confirmation restarts the whole
//! sequence with a clean slate.  An interrupt at any prompt aborts the
//! wizard with [`WizardError::Interrupted`] — distinguishable from both the
//! explicit Exit path and a declined confirmation.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::stt::{ModelSize, Task};

use super::discovery::discover_audio_files;
use super::prompt::{Nav, PromptError, SetupPrompt};

// ---------------------------------------------------------------------------
// RunConfig
// ---------------------------------------------------------------------------

/// A fully-specified, user-confirmed run configuration.
///
/// Only the wizard constructs this, and only after the confirmation step —
/// a partially-collected draft never escapes.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// ISO-639-1 code, or `None` for auto-detect.
    pub language: Option<String>,
    /// Selected model size.
    pub model_size: ModelSize,
    /// Transcribe or translate.
    pub task: Task,
    /// Selected input files, in discovery order.  Non-empty by construction.
    pub files: Vec<PathBuf>,
}

// ---------------------------------------------------------------------------
// WizardError
// ---------------------------------------------------------------------------

/// Abnormal wizard terminations.  The normal "no configuration" paths
/// (explicit exit, empty discovery) are `Ok(None)`, not errors.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The user interrupted a prompt; the whole wizard aborts.
    #[error("interrupted")]
    Interrupted,

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("failed to scan {dir}: {source}")]
    Scan {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<PromptError> for WizardError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Interrupted => WizardError::Interrupted,
            PromptError::Terminal(msg) => WizardError::Terminal(msg),
        }
    }
}

// ---------------------------------------------------------------------------
// Step / Draft
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Language,
    Model,
    Task,
    Files,
    Confirm,
}

/// Values collected so far.  Each field is set when its step accepts a value
/// and only cleared by the confirm-declined full restart.
#[derive(Debug, Default)]
struct Draft {
    language: Option<Option<String>>,
    model_size: Option<ModelSize>,
    task: Option<Task>,
    files: Vec<PathBuf>,
}

impl Draft {
    /// All fields are present once the Confirm step is reached.
    fn assemble(&self) -> Option<RunConfig> {
        Some(RunConfig {
            language: self.language.clone()?,
            model_size: self.model_size?,
            task: self.task?,
            files: self.files.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// SetupWizard
// ---------------------------------------------------------------------------

/// Collects a [`RunConfig`] through the ordered prompt sequence.
pub struct SetupWizard<'a, P: SetupPrompt> {
    prompt: &'a mut P,
    input_dir: &'a Path,
}

impl<'a, P: SetupPrompt> SetupWizard<'a, P> {
    pub fn new(prompt: &'a mut P, input_dir: &'a Path) -> Self {
        Self { prompt, input_dir }
    }

    /// Run the step sequence to completion.
    ///
    /// Returns `Ok(None)` when the user exits, or when discovery finds no
    /// audio files (reported through the prompt surface first).  Any
    /// interrupt or prompt failure is an `Err`.
    pub fn run(&mut self) -> Result<Option<RunConfig>, WizardError> {
        let mut draft = Draft::default();
        let mut step = Step::Language;

        loop {
            match step {
                Step::Language => match self.prompt.select_language()? {
                    Nav::Value(language) => {
                        draft.language = Some(language);
                        step = Step::Model;
                    }
                    // No step before this one; a Back from a non-conforming
                    // surface re-prompts.
                    Nav::Back => {}
                    Nav::Exit => return Ok(None),
                },

                Step::Model => match self.prompt.select_model()? {
                    Nav::Value(model_size) => {
                        draft.model_size = Some(model_size);
                        step = Step::Task;
                    }
                    Nav::Back => step = Step::Language,
                    Nav::Exit => return Ok(None),
                },

                Step::Task => match self.prompt.select_task()? {
                    Nav::Value(task) => {
                        draft.task = Some(task);
                        step = Step::Files;
                    }
                    Nav::Back => step = Step::Model,
                    Nav::Exit => return Ok(None),
                },

                Step::Files => {
                    let discovered =
                        discover_audio_files(self.input_dir).map_err(|source| {
                            WizardError::Scan {
                                dir: self.input_dir.to_path_buf(),
                                source,
                            }
                        })?;

                    if discovered.is_empty() {
                        log::info!(
                            "no audio files found in {}",
                            self.input_dir.display()
                        );
                        self.prompt.notify_no_files(self.input_dir);
                        return Ok(None);
                    }

                    match self.prompt.select_files(&discovered)? {
                        // Selecting nothing is equivalent to going back.
                        Nav::Value(files) if files.is_empty() => step = Step::Task,
                        Nav::Value(files) => {
                            draft.files = files;
                            step = Step::Confirm;
                        }
                        Nav::Back => step = Step::Task,
                        Nav::Exit => return Ok(None),
                    }
                }

                Step::Confirm => {
                    let config = draft
                        .assemble()
                        .expect("confirm step reached with incomplete draft");

                    if self.prompt.confirm(&config)? {
                        log::debug!(
                            "setup confirmed: {} file(s), model {}, task {}",
                            config.files.len(),
                            config.model_size,
                            config.task
                        );
                        return Ok(Some(config));
                    }

                    // Declined: restart the whole sequence with a clean slate.
                    draft = Draft::default();
                    step = Step::Language;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use tempfile::tempdir;

    // -----------------------------------------------------------------------
    // Scripted prompt double
    // -----------------------------------------------------------------------

    /// Pops pre-programmed responses per prompt; counts how often each
    /// prompt was shown so navigation can be asserted precisely.
    #[derive(Default)]
    struct ScriptedPrompt {
        languages: VecDeque<Nav<Option<String>>>,
        models: VecDeque<Nav<ModelSize>>,
        tasks: VecDeque<Nav<Task>>,
        files: VecDeque<Nav<Vec<PathBuf>>>,
        confirms: VecDeque<Result<bool, PromptError>>,

        language_asks: usize,
        model_asks: usize,
        task_asks: usize,
        file_asks: usize,
        empty_reports: usize,
    }

    impl SetupPrompt for ScriptedPrompt {
        fn select_language(&mut self) -> Result<Nav<Option<String>>, PromptError> {
            self.language_asks += 1;
            Ok(self.languages.pop_front().expect("unscripted language prompt"))
        }

        fn select_model(&mut self) -> Result<Nav<ModelSize>, PromptError> {
            self.model_asks += 1;
            Ok(self.models.pop_front().expect("unscripted model prompt"))
        }

        fn select_task(&mut self) -> Result<Nav<Task>, PromptError> {
            self.task_asks += 1;
            Ok(self.tasks.pop_front().expect("unscripted task prompt"))
        }

        fn select_files(
            &mut self,
            _discovered: &[PathBuf],
        ) -> Result<Nav<Vec<PathBuf>>, PromptError> {
            self.file_asks += 1;
            Ok(self.files.pop_front().expect("unscripted file prompt"))
        }

        fn confirm(&mut self, _config: &RunConfig) -> Result<bool, PromptError> {
            self.confirms.pop_front().expect("unscripted confirm prompt")
        }

        fn notify_no_files(&mut self, _dir: &Path) {
            self.empty_reports += 1;
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn audio_dir(names: &[&str]) -> (tempfile::TempDir, Vec<PathBuf>) {
        let dir = tempdir().expect("temp dir");
        for name in names {
            std::fs::write(dir.path().join(name), b"").expect("touch");
        }
        let files = discover_audio_files(dir.path()).expect("scan");
        (dir, files)
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[test]
    fn happy_path_returns_confirmed_config() {
        let (dir, files) = audio_dir(&["a.mp3", "b.mp3"]);

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Value(Some("ja".into())));
        prompt.models.push_back(Nav::Value(ModelSize::Small));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));
        prompt.files.push_back(Nav::Value(files.clone()));
        prompt.confirms.push_back(Ok(true));

        let config = SetupWizard::new(&mut prompt, dir.path())
            .run()
            .expect("wizard")
            .expect("config");

        assert_eq!(config.language.as_deref(), Some("ja"));
        assert_eq!(config.model_size, ModelSize::Small);
        assert_eq!(config.task, Task::Transcribe);
        assert_eq!(config.files, files);
    }

    #[test]
    fn auto_detect_language_is_none() {
        let (dir, files) = audio_dir(&["a.wav"]);

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Value(None));
        prompt.models.push_back(Nav::Value(ModelSize::Tiny));
        prompt.tasks.push_back(Nav::Value(Task::Translate));
        prompt.files.push_back(Nav::Value(files));
        prompt.confirms.push_back(Ok(true));

        let config = SetupWizard::new(&mut prompt, dir.path())
            .run()
            .expect("wizard")
            .expect("config");
        assert!(config.language.is_none());
        assert_eq!(config.task, Task::Translate);
    }

    #[test]
    fn exit_at_first_step_returns_none() {
        let (dir, _) = audio_dir(&["a.mp3"]);

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Exit);

        let result = SetupWizard::new(&mut prompt, dir.path()).run().expect("wizard");
        assert!(result.is_none());
        assert_eq!(prompt.model_asks, 0);
    }

    #[test]
    fn exit_mid_sequence_returns_none() {
        let (dir, _) = audio_dir(&["a.mp3"]);

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Value(None));
        prompt.models.push_back(Nav::Exit);

        let result = SetupWizard::new(&mut prompt, dir.path()).run().expect("wizard");
        assert!(result.is_none());
        assert_eq!(prompt.task_asks, 0);
    }

    /// BACK from file selection returns to the task step; the language and
    /// model chosen earlier are retained, not re-asked.
    #[test]
    fn back_from_files_retains_earlier_choices() {
        let (dir, files) = audio_dir(&["a.mp3"]);

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Value(Some("de".into())));
        prompt.models.push_back(Nav::Value(ModelSize::Medium));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));
        prompt.files.push_back(Nav::Back);
        prompt.tasks.push_back(Nav::Value(Task::Translate));
        prompt.files.push_back(Nav::Value(files));
        prompt.confirms.push_back(Ok(true));

        let config = SetupWizard::new(&mut prompt, dir.path())
            .run()
            .expect("wizard")
            .expect("config");

        assert_eq!(prompt.language_asks, 1);
        assert_eq!(prompt.model_asks, 1);
        assert_eq!(prompt.task_asks, 2);
        assert_eq!(config.language.as_deref(), Some("de"));
        assert_eq!(config.model_size, ModelSize::Medium);
        assert_eq!(config.task, Task::Translate);
    }

    /// Selecting zero files is equivalent to BACK.
    #[test]
    fn empty_selection_is_treated_as_back() {
        let (dir, files) = audio_dir(&["a.mp3"]);

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Value(None));
        prompt.models.push_back(Nav::Value(ModelSize::Small));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));
        prompt.files.push_back(Nav::Value(vec![]));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));
        prompt.files.push_back(Nav::Value(files));
        prompt.confirms.push_back(Ok(true));

        let config = SetupWizard::new(&mut prompt, dir.path())
            .run()
            .expect("wizard")
            .expect("config");
        assert_eq!(prompt.task_asks, 2);
        assert!(!config.files.is_empty());
    }

    /// Zero discovered files: report, terminate, never show the file prompt.
    #[test]
    fn empty_discovery_reports_and_returns_none() {
        let dir = tempdir().expect("temp dir");

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Value(None));
        prompt.models.push_back(Nav::Value(ModelSize::Small));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));

        let result = SetupWizard::new(&mut prompt, dir.path()).run().expect("wizard");
        assert!(result.is_none());
        assert_eq!(prompt.empty_reports, 1);
        assert_eq!(prompt.file_asks, 0);
    }

    /// Declining the confirmation restarts from step 0 with a clean slate.
    #[test]
    fn confirm_no_restarts_from_language() {
        let (dir, files) = audio_dir(&["a.mp3"]);

        let mut prompt = ScriptedPrompt::default();
        // First pass
        prompt.languages.push_back(Nav::Value(Some("fr".into())));
        prompt.models.push_back(Nav::Value(ModelSize::Base));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));
        prompt.files.push_back(Nav::Value(files.clone()));
        prompt.confirms.push_back(Ok(false));
        // Second pass
        prompt.languages.push_back(Nav::Value(Some("it".into())));
        prompt.models.push_back(Nav::Value(ModelSize::Large));
        prompt.tasks.push_back(Nav::Value(Task::Translate));
        prompt.files.push_back(Nav::Value(files));
        prompt.confirms.push_back(Ok(true));

        let config = SetupWizard::new(&mut prompt, dir.path())
            .run()
            .expect("wizard")
            .expect("config");

        assert_eq!(prompt.language_asks, 2);
        assert_eq!(config.language.as_deref(), Some("it"));
        assert_eq!(config.model_size, ModelSize::Large);
    }

    /// An interrupt during confirmation aborts the wizard — it must not be
    /// conflated with answering "no".
    #[test]
    fn interrupt_during_confirm_propagates() {
        let (dir, files) = audio_dir(&["a.mp3"]);

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Value(None));
        prompt.models.push_back(Nav::Value(ModelSize::Small));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));
        prompt.files.push_back(Nav::Value(files));
        prompt.confirms.push_back(Err(PromptError::Interrupted));

        let err = SetupWizard::new(&mut prompt, dir.path()).run().unwrap_err();
        assert!(matches!(err, WizardError::Interrupted));
        // The sequence did not restart.
        assert_eq!(prompt.language_asks, 1);
    }

    /// A Back at the first step (from a non-conforming surface) re-prompts
    /// instead of guessing an intent.
    #[test]
    fn back_at_first_step_reprompts() {
        let (dir, files) = audio_dir(&["a.mp3"]);

        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Back);
        prompt.languages.push_back(Nav::Value(None));
        prompt.models.push_back(Nav::Value(ModelSize::Small));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));
        prompt.files.push_back(Nav::Value(files));
        prompt.confirms.push_back(Ok(true));

        let config = SetupWizard::new(&mut prompt, dir.path()).run().expect("wizard");
        assert!(config.is_some());
        assert_eq!(prompt.language_asks, 2);
    }

    #[test]
    fn unreadable_input_dir_is_scan_error() {
        let mut prompt = ScriptedPrompt::default();
        prompt.languages.push_back(Nav::Value(None));
        prompt.models.push_back(Nav::Value(ModelSize::Small));
        prompt.tasks.push_back(Nav::Value(Task::Transcribe));

        let missing = Path::new("/nonexistent/audio");
        let err = SetupWizard::new(&mut prompt, missing).run().unwrap_err();
        assert!(matches!(err, WizardError::Scan { .. }));
    }
}
