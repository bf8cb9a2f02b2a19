//! Configuration module for the batch transcriber.
//!
//! Provides `AppConfig` (working directories + wizard defaults) with TOML
//! persistence, `AppPaths` for cross-platform config/model directories, and
//! the static language / audio-extension catalogues.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    language_name, AppConfig, WizardDefaults, AUDIO_EXTENSIONS, LANGUAGES,
};
