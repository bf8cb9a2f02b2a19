//! Setup wizard: prompt seam, step state machine and file discovery.
//!
//! [`SetupWizard`] collects a user-confirmed [`RunConfig`] through an
//! ordered prompt sequence with BACK/EXIT navigation (see [`steps`] for the
//! state diagram).  The interactive surface is injected as a
//! [`SetupPrompt`], so the machine is tested with a scripted double and
//! rendered by `crate::ui` in production.

pub mod discovery;
pub mod prompt;
pub mod steps;

pub use discovery::discover_audio_files;
pub use prompt::{Nav, PromptError, SetupPrompt};
pub use steps::{RunConfig, SetupWizard, WizardError};
