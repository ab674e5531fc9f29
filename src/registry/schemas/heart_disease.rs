//! Heart disease schema definitions

use crate::models::Disease;
use crate::schema::{FeatureField, FeatureSchema};

/// Get the feature schema for the heart disease model
///
/// Cleveland-style features covering demographics, resting measurements and
/// exercise test results.
#[must_use]
pub fn heart_disease_schema() -> FeatureSchema {
    FeatureSchema::new(
        Disease::HeartDisease,
        vec![
            FeatureField::new("Age", "Age"),
            FeatureField::new("Sex", "Sex (1=Male, 0=Female)"),
            FeatureField::new("Cp", "Chest Pain Type"),
            FeatureField::new("Trestbps", "Resting Blood Pressure"),
            FeatureField::new("Chol", "Serum Cholesterol"),
            FeatureField::new("Fbs", "Fasting Blood Sugar"),
            FeatureField::new("Restecg", "Resting Electrocardiographic Results"),
            FeatureField::new("Thalach", "Maximum Heart Rate Achieved"),
            FeatureField::new("Exang", "Exercise Induced Angina"),
            FeatureField::new("Oldpeak", "ST Depression"),
            FeatureField::new("Slope", "Slope of the Peak Exercise"),
            FeatureField::new("Ca", "Number of Major Vessels"),
            FeatureField::new("Thal", "Thalassemia Type"),
        ],
    )
}
