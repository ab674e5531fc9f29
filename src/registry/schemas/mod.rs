//! Feature-schema definitions for the supported diseases
//!
//! This module contains the ordered field definitions for all supported
//! disease models. Field order matches the column order the corresponding
//! classifier was trained on.

pub mod diabetes;
pub mod heart_disease;
pub mod lung_cancer;
pub mod parkinsons;
pub mod thyroid;

// Re-export schema functions for easier access
pub use diabetes::diabetes_schema;
pub use heart_disease::heart_disease_schema;
pub use lung_cancer::lung_cancer_schema;
pub use parkinsons::parkinsons_schema;
pub use thyroid::thyroid_schema;

use crate::models::Disease;
use crate::schema::FeatureSchema;

/// Get the feature schema for a disease
#[must_use]
pub fn schema_for(disease: Disease) -> FeatureSchema {
    match disease {
        Disease::Diabetes => diabetes_schema(),
        Disease::HeartDisease => heart_disease_schema(),
        Disease::LungCancer => lung_cancer_schema(),
        Disease::Parkinsons => parkinsons_schema(),
        Disease::Thyroid => thyroid_schema(),
    }
}
