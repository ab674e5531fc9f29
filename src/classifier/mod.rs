//! Classifier capability and concrete model implementations
//!
//! The prediction service depends only on the [`Classifier`] trait; any
//! model that can turn a batch of feature vectors into per-class
//! probabilities can sit behind the registry. Two implementations ship with
//! the crate: logistic regression and gradient-boosted decision trees,
//! matching the artifact formats the training side exports.

pub mod artifact;
pub mod gradient;
pub mod logistic;

pub use artifact::{ClassifierKind, ModelArtifact, load_artifact};
pub use gradient::{DecisionTree, GradientBoostedTrees, TreeNode};
pub use logistic::{LogisticRegression, StandardScaler};

use ndarray::Array2;

use crate::error::Result;

/// Probability-estimation capability of a pre-trained binary classifier
///
/// Implementations are immutable once loaded and shared read-only across
/// prediction calls.
pub trait Classifier: Send + Sync + std::fmt::Debug {
    /// Short tag identifying the model family, used in logging
    fn kind(&self) -> &'static str;

    /// Number of input features the model was trained on
    fn n_features(&self) -> usize;

    /// Estimate per-class probabilities for a batch of feature vectors.
    ///
    /// The input is one row per sample. The output has one row per sample
    /// and one column per class, with column 1 the positive
    /// (disease-present) class. Each row sums to 1.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Prediction`] if the batch width does not
    /// match `n_features()` or the model payload is malformed.
    fn estimate_probabilities(&self, batch: &Array2<f64>) -> Result<Array2<f64>>;
}

/// Numerically plain logistic sigmoid.
pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Reject a batch whose width does not match the trained feature count.
pub(crate) fn check_batch_width(
    kind: &str,
    expected: usize,
    batch: &Array2<f64>,
) -> Result<()> {
    if batch.ncols() != expected {
        return Err(crate::error::Error::Prediction(format!(
            "{kind} expects {expected} features, got {}",
            batch.ncols()
        )));
    }
    Ok(())
}
