//! Prediction result type
//!
//! Represents the output of a single prediction call: the positive-class
//! probability and the risk band derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// Result of scoring one feature vector against one model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Estimated probability of the positive (disease present) class
    pub probability: f64,
    /// Risk band derived from the probability
    pub risk_level: RiskLevel,
}

impl Prediction {
    /// Build a prediction from a positive-class probability
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            risk_level: RiskLevel::from_probability(probability),
        }
    }

    /// Probability expressed as a percentage
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2}% probability)",
            self.risk_level,
            self.percentage()
        )
    }
}
