//! Application settings, wizard defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through `settings.toml`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::stt::{ModelSize, Task};

use super::AppPaths;

// ---------------------------------------------------------------------------
// Catalogues
// ---------------------------------------------------------------------------

/// Languages offered by the setup wizard, as `(ISO-639-1 code, display name)`
/// pairs.  Whisper takes the code; the prompt shows the name.  Auto-detect
/// and free-text entry are offered by the prompt surface on top of this list.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("ko", "Korean"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("pt", "Portuguese"),
    ("it", "Italian"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("vi", "Vietnamese"),
    ("th", "Thai"),
    ("id", "Indonesian"),
];

/// Lowercased file extensions accepted by input discovery.
pub const AUDIO_EXTENSIONS: &[&str] = &["m4a", "mp3", "wav", "flac", "ogg"];

/// Look up the display name for an ISO-639-1 code from [`LANGUAGES`].
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

// ---------------------------------------------------------------------------
// WizardDefaults
// ---------------------------------------------------------------------------

/// Initial cursor positions for the setup wizard's prompts.
///
/// These only pre-select a row — every run still requires an explicit
/// selection and a final confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardDefaults {
    /// ISO-639-1 code the language prompt starts on; `"auto"` starts on
    /// the auto-detect row.
    pub language: String,
    /// Model size the model prompt starts on.
    pub model_size: ModelSize,
    /// Task the task prompt starts on.
    pub task: Task,
}

impl Default for WizardDefaults {
    fn default() -> Self {
        Self {
            language: "ja".into(),
            model_size: ModelSize::Small,
            task: Task::Transcribe,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use whisper_transcriber::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory scanned for audio files.
    pub input_dir: PathBuf,
    /// Directory transcript artifacts are written to.
    pub output_dir: PathBuf,
    /// Initial cursor positions for the wizard prompts.
    pub defaults: WizardDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("audio"),
            output_dir: PathBuf::from("transcripts"),
            defaults: WizardDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet — the startup
    /// code writes the defaults out so the user has a file to edit.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// A default `AppConfig` survives a TOML round trip without data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.input_dir, PathBuf::from("audio"));
        assert_eq!(cfg.output_dir, PathBuf::from("transcripts"));
        assert_eq!(cfg.defaults.language, "ja");
        assert_eq!(cfg.defaults.model_size, ModelSize::Small);
        assert_eq!(cfg.defaults.task, Task::Transcribe);
    }

    /// Modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.input_dir = PathBuf::from("/data/interviews");
        cfg.output_dir = PathBuf::from("/data/transcripts");
        cfg.defaults.language = "auto".into();
        cfg.defaults.model_size = ModelSize::Large;
        cfg.defaults.task = Task::Translate;

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(cfg, loaded);
    }

    // ---- catalogues ----

    #[test]
    fn language_name_known_code() {
        assert_eq!(language_name("ja"), Some("Japanese"));
        assert_eq!(language_name("en"), Some("English"));
    }

    #[test]
    fn language_name_unknown_code() {
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn audio_extensions_are_lowercase() {
        for ext in AUDIO_EXTENSIONS {
            assert_eq!(*ext, ext.to_lowercase(), "extension {ext} not lowercase");
        }
    }
}
