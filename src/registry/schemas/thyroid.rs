//! Thyroid disease schema definitions

use crate::models::Disease;
use crate::schema::{FeatureField, FeatureSchema};

/// Get the feature schema for the thyroid disease model
///
/// Demographics, thyroxine treatment status and hormone levels.
#[must_use]
pub fn thyroid_schema() -> FeatureSchema {
    FeatureSchema::new(
        Disease::Thyroid,
        vec![
            FeatureField::new("Age", "Age"),
            FeatureField::new("Sex", "Sex (1=Male, 0=Female)"),
            FeatureField::new("On_Thyroxine", "On Thyroxine (1=Yes, 0=No)"),
            FeatureField::new("TSH", "TSH Level"),
            FeatureField::new("T3_Measured", "T3 Measured (1=Yes, 0=No)"),
            FeatureField::new("T3", "T3 Level"),
            FeatureField::new("TT4", "TT4 Level"),
        ],
    )
}
