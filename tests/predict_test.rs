//! End-to-end prediction tests: artifact on disk through to risk band

mod utils;

use clinrisk::{
    Disease, Error, ModelRegistry, Predictor, RegistryConfig, RiskLevel, predict_disease,
};
use utils::{write_gradient_artifact, write_logistic_artifact};

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[test]
fn test_logistic_artifact_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    // Zero coefficients: probability is sigmoid(intercept) regardless of input
    write_logistic_artifact(dir.path(), Disease::Diabetes, &[0.0; 8], 2.0);

    let config = RegistryConfig::with_models_dir(dir.path());
    let predictor = Predictor::new(ModelRegistry::load(&config).unwrap());

    let features = [2.0, 120.0, 70.0, 20.0, 80.0, 32.0, 0.47, 45.0];
    let prediction = predictor.predict(Disease::Diabetes, &features).unwrap();

    let expected = sigmoid(2.0);
    assert!((prediction.probability - expected).abs() < 1e-12);
    assert_eq!(prediction.risk_level, RiskLevel::High);
}

#[test]
fn test_logistic_artifact_low_risk() {
    let dir = tempfile::tempdir().unwrap();
    write_logistic_artifact(dir.path(), Disease::Thyroid, &[0.0; 7], -2.0);

    let config = RegistryConfig::with_models_dir(dir.path());
    let predictor = Predictor::new(ModelRegistry::load(&config).unwrap());

    let prediction = predictor.predict(Disease::Thyroid, &[0.0; 7]).unwrap();
    assert!(prediction.probability < 0.4);
    assert_eq!(prediction.risk_level, RiskLevel::Low);
}

#[test]
fn test_gradient_artifact_routes_on_feature() {
    let dir = tempfile::tempdir().unwrap();
    // Age (feature 0) over 50 lands in the positive leaf
    write_gradient_artifact(dir.path(), Disease::HeartDisease, 13, 50.0, -1.5, 1.5);

    let config = RegistryConfig::with_models_dir(dir.path());
    let predictor = Predictor::new(ModelRegistry::load(&config).unwrap());

    let mut features = [0.0; 13];
    features[0] = 63.0;
    let older = predictor.predict(Disease::HeartDisease, &features).unwrap();
    assert!((older.probability - sigmoid(1.5)).abs() < 1e-12);
    assert_eq!(older.risk_level, RiskLevel::High);

    features[0] = 35.0;
    let younger = predictor.predict(Disease::HeartDisease, &features).unwrap();
    assert!((younger.probability - sigmoid(-1.5)).abs() < 1e-12);
    assert_eq!(younger.risk_level, RiskLevel::Low);
}

#[test]
fn test_arity_mismatch_from_loaded_model() {
    let dir = tempfile::tempdir().unwrap();
    write_logistic_artifact(dir.path(), Disease::LungCancer, &[0.0; 15], 0.0);

    let config = RegistryConfig::with_models_dir(dir.path());
    let predictor = Predictor::new(ModelRegistry::load(&config).unwrap());

    // 14 values against a 15-feature model
    let err = predictor
        .predict(Disease::LungCancer, &[1.0; 14])
        .unwrap_err();
    assert!(matches!(err, Error::Prediction(_)));
}

#[test]
fn test_predict_disease_boundary_function() {
    let dir = tempfile::tempdir().unwrap();
    write_logistic_artifact(dir.path(), Disease::Parkinsons, &[0.0; 22], 0.5);

    let config = RegistryConfig::with_models_dir(dir.path());
    let registry = ModelRegistry::load(&config).unwrap();
    let classifier = registry.classifier(Disease::Parkinsons).unwrap();

    let prediction = predict_disease(classifier.as_ref(), &[0.1; 22]).unwrap();
    assert!((prediction.probability - sigmoid(0.5)).abs() < 1e-12);
    assert_eq!(prediction.risk_level, RiskLevel::Moderate);
    assert_eq!(
        prediction.to_string(),
        format!("Moderate Risk ({:.2}% probability)", sigmoid(0.5) * 100.0)
    );
}
