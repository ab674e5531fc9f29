//! Diabetes schema definitions

use crate::models::Disease;
use crate::schema::{FeatureField, FeatureSchema};

/// Get the feature schema for the diabetes model
///
/// Pima-style diabetes features: pregnancy count, blood chemistry and
/// anthropometric measurements.
#[must_use]
pub fn diabetes_schema() -> FeatureSchema {
    FeatureSchema::new(
        Disease::Diabetes,
        vec![
            FeatureField::new("Pregnancies", "Number of Pregnancies"),
            FeatureField::new("Glucose", "Glucose Level"),
            FeatureField::new("BloodPressure", "Blood Pressure"),
            FeatureField::new("SkinThickness", "Skin Thickness"),
            FeatureField::new("Insulin", "Insulin Level"),
            FeatureField::new("BMI", "BMI Value"),
            FeatureField::new("DiabetesPedigreeFunction", "Diabetes Pedigree Function"),
            FeatureField::new("Age", "Age"),
        ],
    )
}
