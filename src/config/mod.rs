//! Configuration for the model registry.

use std::path::{Path, PathBuf};

use crate::models::Disease;

/// Configuration for loading the model registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Directory holding one serialized model artifact per disease
    pub models_dir: PathBuf,
    /// Whether a missing or unreadable artifact aborts registry
    /// construction instead of leaving that disease unavailable
    pub fail_on_missing_model: bool,
}

impl RegistryConfig {
    /// Configuration rooted at a specific models directory
    #[must_use]
    pub fn with_models_dir(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
            ..Self::default()
        }
    }

    /// Artifact path for a disease: `<models_dir>/<disease>_model.json`
    #[must_use]
    pub fn artifact_path(&self, disease: Disease) -> PathBuf {
        self.models_dir.join(format!("{disease}_model.json"))
    }

    /// The configured models directory
    #[must_use]
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            fail_on_missing_model: false,
        }
    }
}
