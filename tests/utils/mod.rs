//! Shared helpers for integration tests
#![allow(dead_code)] // each test target uses a subset of the helpers

use std::fs;
use std::path::Path;

use clinrisk::Disease;

/// Write a logistic-regression artifact for a disease into `models_dir`
pub fn write_logistic_artifact(
    models_dir: &Path,
    disease: Disease,
    coefficients: &[f64],
    intercept: f64,
) {
    let artifact = serde_json::json!({
        "disease": disease.as_str(),
        "feature_names": (0..coefficients.len())
            .map(|i| format!("f{i}"))
            .collect::<Vec<_>>(),
        "trained_at": "2025-11-02T10:00:00Z",
        "model": {
            "type": "logistic_regression",
            "coefficients": coefficients,
            "intercept": intercept
        }
    });
    write_artifact(models_dir, disease, &artifact.to_string());
}

/// Write a single-tree gradient-boosting artifact: one split on feature 0
/// with leaf margins `left_value` / `right_value`
pub fn write_gradient_artifact(
    models_dir: &Path,
    disease: Disease,
    n_features: usize,
    threshold: f64,
    left_value: f64,
    right_value: f64,
) {
    let artifact = serde_json::json!({
        "disease": disease.as_str(),
        "model": {
            "type": "gradient_boosted_trees",
            "n_features": n_features,
            "base_score": 0.0,
            "learning_rate": 1.0,
            "trees": [{
                "nodes": [
                    { "feature": 0, "threshold": threshold, "left": 1, "right": 2 },
                    { "value": left_value },
                    { "value": right_value }
                ]
            }]
        }
    });
    write_artifact(models_dir, disease, &artifact.to_string());
}

/// Write raw artifact content for a disease (used for corrupt-file cases)
pub fn write_artifact(models_dir: &Path, disease: Disease, content: &str) {
    let path = models_dir.join(format!("{disease}_model.json"));
    fs::write(path, content).expect("failed to write test artifact");
}
