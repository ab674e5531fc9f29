//! Model registry: one loaded classifier per disease
//!
//! The registry is populated once at startup by deserializing the artifact
//! for each supported disease, and is read-only afterwards. A disease whose
//! artifact is missing or unreadable is logged as a warning and left out of
//! the registry; predictions against it fail with
//! [`Error::ModelUnavailable`](crate::Error::ModelUnavailable) instead of
//! crashing.

pub mod schemas;

use std::sync::Arc;

use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::classifier::{Classifier, load_artifact};
use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::models::Disease;
use crate::registry::schemas::schema_for;

/// Immutable mapping from disease to its loaded classifier
#[derive(Default)]
pub struct ModelRegistry {
    models: FxHashMap<Disease, Arc<dyn Classifier>>,
}

impl ModelRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load classifiers for all supported diseases.
    ///
    /// Artifacts are read in parallel. A disease whose artifact fails to
    /// load is skipped with a warning unless
    /// [`fail_on_missing_model`](RegistryConfig::fail_on_missing_model) is
    /// set, in which case the first failure aborts construction.
    pub fn load(config: &RegistryConfig) -> Result<Self> {
        if config.fail_on_missing_model {
            crate::error::util::validate_directory(config.models_dir(), "loading model artifacts")?;
        }

        let results: Vec<(Disease, Result<Arc<dyn Classifier>>)> = Disease::ALL
            .par_iter()
            .map(|&disease| (disease, load_one(config, disease)))
            .collect();

        let mut models = FxHashMap::default();
        for (disease, result) in results {
            match result {
                Ok(classifier) => {
                    models.insert(disease, classifier);
                }
                Err(e) if config.fail_on_missing_model => return Err(e),
                Err(e) => {
                    log::warn!("Skipping {disease}: {e}");
                }
            }
        }

        let registry = Self { models };
        if registry.is_empty() {
            log::warn!(
                "No model artifacts loaded from {}",
                config.models_dir().display()
            );
        } else {
            log::info!(
                "Loaded {} of {} models: {}",
                registry.len(),
                Disease::ALL.len(),
                registry.diseases().iter().map(Disease::as_str).join(", ")
            );
        }
        Ok(registry)
    }

    /// Register a classifier for a disease.
    ///
    /// Used by embedders and tests that construct a registry without
    /// touching the filesystem.
    pub fn insert(&mut self, disease: Disease, classifier: Arc<dyn Classifier>) {
        self.models.insert(disease, classifier);
    }

    /// Get the classifier for a disease
    pub fn classifier(&self, disease: Disease) -> Result<Arc<dyn Classifier>> {
        self.models
            .get(&disease)
            .cloned()
            .ok_or(Error::ModelUnavailable(disease))
    }

    /// Whether a model is loaded for the disease
    #[must_use]
    pub fn contains(&self, disease: Disease) -> bool {
        self.models.contains_key(&disease)
    }

    /// Diseases with a loaded model, in registry order
    #[must_use]
    pub fn diseases(&self) -> Vec<Disease> {
        Disease::ALL
            .into_iter()
            .filter(|d| self.models.contains_key(d))
            .collect()
    }

    /// Number of loaded models
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no models are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Load and sanity-check one disease's artifact
fn load_one(config: &RegistryConfig, disease: Disease) -> Result<Arc<dyn Classifier>> {
    let path = config.artifact_path(disease);
    let artifact = load_artifact(&path)?;

    if artifact.disease != disease {
        log::warn!(
            "Artifact {} is tagged {} but registered for {disease}",
            path.display(),
            artifact.disease
        );
    }
    let expected = schema_for(disease).len();
    let trained = artifact.model.n_features();
    if trained != expected {
        log::warn!(
            "{disease} model expects {trained} features, schema defines {expected}"
        );
    }
    if let Some(trained_at) = artifact.trained_at {
        log::debug!("{disease} model trained at {trained_at}");
    }

    Ok(Arc::from(artifact.model.into_classifier()))
}
