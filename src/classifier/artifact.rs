//! Model artifact loading
//!
//! An artifact is one JSON document per disease: the disease tag, the
//! ordered feature names the model was trained on, optional training
//! metadata, and a tagged classifier payload.

use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, GradientBoostedTrees, LogisticRegression};
use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::Disease;

/// Tagged classifier payload inside an artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifierKind {
    /// Logistic regression coefficients
    LogisticRegression(LogisticRegression),
    /// Gradient-boosted decision tree ensemble
    GradientBoostedTrees(GradientBoostedTrees),
}

impl ClassifierKind {
    /// Move the payload behind the classifier capability
    #[must_use]
    pub fn into_classifier(self) -> Box<dyn Classifier> {
        match self {
            Self::LogisticRegression(model) => Box::new(model),
            Self::GradientBoostedTrees(model) => Box::new(model),
        }
    }

    /// Number of input features the payload expects
    #[must_use]
    pub fn n_features(&self) -> usize {
        match self {
            Self::LogisticRegression(model) => model.coefficients.len(),
            Self::GradientBoostedTrees(model) => model.n_features,
        }
    }
}

/// A serialized pre-trained model as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Disease this model predicts
    pub disease: Disease,
    /// Feature names in training order
    #[serde(default)]
    pub feature_names: Vec<String>,
    /// When the model was trained
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    /// The classifier payload
    pub model: ClassifierKind,
}

/// Deserialize a model artifact from a JSON file
pub fn load_artifact(path: &Path) -> Result<ModelArtifact> {
    let file = safe_open_file(path, "loading model artifact")?;
    let artifact = serde_json::from_reader(BufReader::new(file))?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_artifact_round_trip() {
        let json = serde_json::json!({
            "disease": "diabetes",
            "feature_names": ["Glucose", "BMI"],
            "trained_at": "2025-11-02T10:00:00Z",
            "model": {
                "type": "logistic_regression",
                "coefficients": [0.8, -0.3],
                "intercept": 0.1
            }
        });
        let artifact: ModelArtifact = serde_json::from_value(json).unwrap();
        assert_eq!(artifact.disease, Disease::Diabetes);
        assert_eq!(artifact.feature_names.len(), 2);
        assert!(artifact.trained_at.is_some());
        assert_eq!(artifact.model.n_features(), 2);

        let classifier = artifact.model.into_classifier();
        assert_eq!(classifier.kind(), "logistic_regression");
        assert_eq!(classifier.n_features(), 2);
    }

    #[test]
    fn test_gradient_artifact_minimal_fields() {
        let json = serde_json::json!({
            "disease": "heart_disease",
            "model": {
                "type": "gradient_boosted_trees",
                "n_features": 13,
                "learning_rate": 0.1,
                "trees": [{ "nodes": [{ "value": 0.4 }] }]
            }
        });
        let artifact: ModelArtifact = serde_json::from_value(json).unwrap();
        assert!(artifact.feature_names.is_empty());
        assert!(artifact.trained_at.is_none());
        assert_eq!(artifact.model.n_features(), 13);
    }

    #[test]
    fn test_unknown_model_type_is_rejected() {
        let json = serde_json::json!({
            "disease": "thyroid",
            "model": { "type": "support_vector_machine" }
        });
        assert!(serde_json::from_value::<ModelArtifact>(json).is_err());
    }
}
