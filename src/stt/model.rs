//! Model catalogue and on-disk path resolution.
//!
//! The five standard multilingual Whisper GGML sizes are modelled as
//! [`ModelSize`]; [`ModelPaths`] resolves where each file lives given an
//! [`crate::config::AppPaths`] instance.  GGML files are published at
//! <https://huggingface.co/ggerganov/whisper.cpp>.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::AppPaths;

// ---------------------------------------------------------------------------
// ModelSize
// ---------------------------------------------------------------------------

/// Capacity tier of a Whisper GGML model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    /// All sizes, smallest to largest — the prompt order.
    pub const ALL: &'static [ModelSize] = &[
        ModelSize::Tiny,
        ModelSize::Base,
        ModelSize::Small,
        ModelSize::Medium,
        ModelSize::Large,
    ];

    /// Stable lowercase identifier (`"tiny"` … `"large"`).
    pub fn id(self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        }
    }

    /// File name under the models directory (e.g. `"ggml-small.bin"`).
    pub fn file_name(self) -> String {
        format!("ggml-{}.bin", self.id())
    }

    /// Approximate GGML file size in megabytes.
    pub fn file_size_mb(self) -> u64 {
        match self {
            ModelSize::Tiny => 75,
            ModelSize::Base => 142,
            ModelSize::Small => 466,
            ModelSize::Medium => 1_500,
            ModelSize::Large => 2_900,
        }
    }

    /// Human-readable label shown in the model prompt.
    pub fn display_label(self) -> String {
        format!("{} (~{} MB)", self.id(), self.file_size_mb())
    }
}

impl Default for ModelSize {
    fn default() -> Self {
        ModelSize::Small
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// ModelPaths
// ---------------------------------------------------------------------------

/// Resolves the on-disk location of model files.
#[derive(Debug, Clone)]
pub struct ModelPaths {
    /// Directory that contains (or will contain) GGML `.bin` files.
    pub models_dir: PathBuf,
}

impl ModelPaths {
    /// Build a [`ModelPaths`] from the application's [`AppPaths`].
    pub fn from_app_paths(app_paths: &AppPaths) -> Self {
        Self {
            models_dir: app_paths.models_dir.clone(),
        }
    }

    /// Construct directly from a models directory path (useful in tests).
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }

    /// Full path to the GGML file for the given size.
    pub fn model_path(&self, size: ModelSize) -> PathBuf {
        self.models_dir.join(size.file_name())
    }

    /// Returns `true` if the model file exists on disk.
    pub fn is_available(&self, size: ModelSize) -> bool {
        self.model_path(size).exists()
    }

    /// All sizes whose GGML file is present on disk.
    pub fn list_local_models(&self) -> Vec<ModelSize> {
        ModelSize::ALL
            .iter()
            .copied()
            .filter(|m| self.is_available(*m))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
