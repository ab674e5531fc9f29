//! Prediction service
//!
//! The single operational path of the crate: reshape a feature vector into
//! a one-row batch, ask the classifier for per-class probabilities, take
//! the positive-class column, and band the result. Purely read/compute/
//! return: no retries, no fallback values, no side effects beyond
//! debug-level logging.

use ndarray::Array2;

use crate::classifier::Classifier;
use crate::error::{Error, Result};
use crate::models::{Disease, Prediction};
use crate::registry::ModelRegistry;

/// Score one feature vector against one classifier.
///
/// The feature vector must match the length and order the classifier was
/// trained on; no cross-checking against a schema happens here. An arity
/// mismatch surfaces as the classifier's own rejection.
pub fn predict_disease(model: &dyn Classifier, features: &[f64]) -> Result<Prediction> {
    let batch = Array2::from_shape_vec((1, features.len()), features.to_vec())
        .map_err(|e| Error::Prediction(format!("failed to shape input batch: {e}")))?;

    let probabilities = model.estimate_probabilities(&batch)?;
    if probabilities.nrows() == 0 || probabilities.ncols() < 2 {
        return Err(Error::Prediction(format!(
            "{} returned a {}x{} probability matrix, expected 1x2",
            model.kind(),
            probabilities.nrows(),
            probabilities.ncols()
        )));
    }

    let probability = probabilities[[0, 1]];
    log::debug!(
        "{} scored {} features: p = {probability:.4}",
        model.kind(),
        features.len()
    );
    Ok(Prediction::new(probability))
}

/// Prediction front end over an explicit model registry
///
/// Owns the registry so every call site's dependency is visible; there is
/// no ambient global model state.
pub struct Predictor {
    registry: ModelRegistry,
}

impl Predictor {
    /// Create a predictor over a loaded registry
    #[must_use]
    pub fn new(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry
    #[must_use]
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Predict the risk of a disease from an ordered feature vector.
    ///
    /// # Errors
    ///
    /// [`Error::ModelUnavailable`] if no model is loaded for the disease,
    /// or [`Error::Prediction`] if the classifier rejects the input.
    pub fn predict(&self, disease: Disease, features: &[f64]) -> Result<Prediction> {
        let classifier = self.registry.classifier(disease)?;
        predict_disease(classifier.as_ref(), features)
    }
}
