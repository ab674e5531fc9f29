//! Common domain type definitions
//!
//! This module contains the disease identifier enum and the risk banding
//! used across the prediction surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Disease a prediction can be requested for
///
/// The set is closed: each variant corresponds to one pre-trained model
/// artifact and one feature schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    /// Diabetes (8 features)
    Diabetes,
    /// Heart disease (13 features)
    HeartDisease,
    /// Lung cancer (15 features)
    LungCancer,
    /// Parkinson's disease (22 voice-measure features)
    Parkinsons,
    /// Thyroid disease (7 features)
    Thyroid,
}

impl Disease {
    /// All supported diseases, in registry load order
    pub const ALL: [Disease; 5] = [
        Disease::Diabetes,
        Disease::HeartDisease,
        Disease::LungCancer,
        Disease::Parkinsons,
        Disease::Thyroid,
    ];

    /// Stable identifier used in artifact names and configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::HeartDisease => "heart_disease",
            Self::LungCancer => "lung_cancer",
            Self::Parkinsons => "parkinsons",
            Self::Thyroid => "thyroid",
        }
    }

    /// Human-readable heading for UI output
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::HeartDisease => "Heart Disease",
            Self::LungCancer => "Lung Cancer",
            Self::Parkinsons => "Parkinson's",
            Self::Thyroid => "Thyroid",
        }
    }
}

impl FromStr for Disease {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diabetes" => Ok(Self::Diabetes),
            "heart_disease" | "heart-disease" => Ok(Self::HeartDisease),
            "lung_cancer" | "lung-cancer" => Ok(Self::LungCancer),
            "parkinsons" => Ok(Self::Parkinsons),
            "thyroid" => Ok(Self::Thyroid),
            _ => Err(Error::UnknownDisease(s.to_string())),
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk band derived from a classifier probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Probability at or below 0.4
    Low,
    /// Probability above 0.4, at or below 0.7
    Moderate,
    /// Probability above 0.7
    High,
}

impl RiskLevel {
    /// Classify a probability into a risk band.
    ///
    /// The band boundaries are inclusive upper bounds (0.4 is Low, 0.7 is
    /// Moderate) and identical for every disease. The function is total:
    /// values below 0 land in Low, values above 1 land in High, and NaN
    /// lands in High.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability <= 0.4 {
            Self::Low
        } else if probability <= 0.7 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Band name as reported to the user
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_low_band() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.4), RiskLevel::Low);

        let mut rng = rand::rng();
        for _ in 0..100 {
            let p = rng.random_range(0.0..=0.4);
            assert_eq!(RiskLevel::from_probability(p), RiskLevel::Low, "p = {p}");
        }
    }

    #[test]
    fn test_moderate_band() {
        assert_eq!(RiskLevel::from_probability(0.5), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::Moderate);

        let mut rng = rand::rng();
        for _ in 0..100 {
            let p = rng.random_range(0.4001..=0.7);
            assert_eq!(
                RiskLevel::from_probability(p),
                RiskLevel::Moderate,
                "p = {p}"
            );
        }
    }

    #[test]
    fn test_high_band() {
        assert_eq!(RiskLevel::from_probability(0.9), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);

        let mut rng = rand::rng();
        for _ in 0..100 {
            let p = rng.random_range(0.7001..=1.0);
            assert_eq!(RiskLevel::from_probability(p), RiskLevel::High, "p = {p}");
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskLevel::from_probability(0.4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.4000001), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.70001), RiskLevel::High);
    }

    #[test]
    fn test_banding_is_deterministic() {
        for p in [0.0, 0.25, 0.4, 0.55, 0.7, 0.85, 1.0] {
            let first = RiskLevel::from_probability(p);
            for _ in 0..10 {
                assert_eq!(RiskLevel::from_probability(p), first);
            }
        }
    }

    #[test]
    fn test_out_of_domain_values() {
        assert_eq!(RiskLevel::from_probability(-0.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(1.5), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(f64::NAN), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "Low Risk");
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate Risk");
        assert_eq!(RiskLevel::High.to_string(), "High Risk");
    }

    #[test]
    fn test_disease_from_str() {
        assert_eq!("diabetes".parse::<Disease>().unwrap(), Disease::Diabetes);
        assert_eq!(
            "heart_disease".parse::<Disease>().unwrap(),
            Disease::HeartDisease
        );
        assert_eq!(
            "Lung_Cancer".parse::<Disease>().unwrap(),
            Disease::LungCancer
        );
        assert!("influenza".parse::<Disease>().is_err());
    }

    #[test]
    fn test_disease_round_trip() {
        for disease in Disease::ALL {
            assert_eq!(disease.as_str().parse::<Disease>().unwrap(), disease);
        }
    }
}
