//! Parkinson's disease schema definitions

use crate::models::Disease;
use crate::schema::{FeatureField, FeatureSchema};

/// Get the feature schema for the Parkinson's disease model
///
/// Voice-measure features from sustained phonation recordings. The dataset
/// column names double as prompt labels.
#[must_use]
pub fn parkinsons_schema() -> FeatureSchema {
    let names = [
        "MDVP:Fo(Hz)",
        "MDVP:Fhi(Hz)",
        "MDVP:Flo(Hz)",
        "MDVP:Jitter(%)",
        "MDVP:Jitter(Abs)",
        "MDVP:RAP",
        "MDVP:PPQ",
        "Jitter:DDP",
        "MDVP:Shimmer",
        "MDVP:Shimmer(dB)",
        "Shimmer:APQ3",
        "Shimmer:APQ5",
        "MDVP:APQ",
        "Shimmer:DDA",
        "NHR",
        "HNR",
        "RPDE",
        "DFA",
        "spread1",
        "spread2",
        "D2",
        "PPE",
    ];

    FeatureSchema::new(
        Disease::Parkinsons,
        names
            .iter()
            .map(|name| FeatureField::new(*name, *name))
            .collect(),
    )
}
