//! Lung cancer schema definitions

use crate::models::Disease;
use crate::schema::{FeatureField, FeatureSchema};

/// Get the feature schema for the lung cancer model
///
/// Survey-style binary indicators (1=Yes, 0=No) plus gender and age.
#[must_use]
pub fn lung_cancer_schema() -> FeatureSchema {
    FeatureSchema::new(
        Disease::LungCancer,
        vec![
            FeatureField::new("Gender", "Gender (1=Male, 0=Female)"),
            FeatureField::new("Age", "Age"),
            FeatureField::new("Smoking", "Smoking (1=Yes, 0=No)"),
            FeatureField::new("Yellow_Fingers", "Yellow Fingers (1=Yes, 0=No)"),
            FeatureField::new("Anxiety", "Anxiety (1=Yes, 0=No)"),
            FeatureField::new("Peer_Pressure", "Peer Pressure (1=Yes, 0=No)"),
            FeatureField::new("Chronic_Disease", "Chronic Disease (1=Yes, 0=No)"),
            FeatureField::new("Fatigue", "Fatigue (1=Yes, 0=No)"),
            FeatureField::new("Allergy", "Allergy (1=Yes, 0=No)"),
            FeatureField::new("Wheezing", "Wheezing (1=Yes, 0=No)"),
            FeatureField::new("Alcohol_Consuming", "Alcohol Consumption (1=Yes, 0=No)"),
            FeatureField::new("Coughing", "Coughing (1=Yes, 0=No)"),
            FeatureField::new("Shortness_of_Breath", "Shortness of Breath (1=Yes, 0=No)"),
            FeatureField::new("Swallowing_Difficulty", "Swallowing Difficulty (1=Yes, 0=No)"),
            FeatureField::new("Chest_Pain", "Chest Pain (1=Yes, 0=No)"),
        ],
    )
}
