//! Error handling for the disease-risk predictor.

use crate::models::Disease;

pub mod util;

/// Specialized error type for model loading and prediction
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening or reading an artifact file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error deserializing a model artifact
    #[error("Artifact error: {0}")]
    Artifact(#[from] serde_json::Error),
    /// Prediction requested for a disease with no loaded model
    #[error("No trained model available for {0}")]
    ModelUnavailable(Disease),
    /// The classifier rejected its input or produced a degenerate output
    #[error("Prediction error: {0}")]
    Prediction(String),
    /// A name outside the closed set of supported diseases
    #[error("Unknown disease: {0}")]
    UnknownDisease(String),
    /// Any other error, with call-site context attached
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for predictor operations
pub type Result<T> = std::result::Result<T, Error>;
