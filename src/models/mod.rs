//! Domain types for disease-risk prediction
//!
//! This module contains the closed set of supported diseases, the risk
//! banding applied to classifier probabilities, and the prediction result
//! type handed back to callers.

pub mod prediction;
pub mod types;

pub use prediction::Prediction;
pub use types::{Disease, RiskLevel};

use smallvec::SmallVec;

/// Ordered per-request feature values.
///
/// Schemas range from 7 to 22 fields, so vectors stay inline and never
/// touch the heap.
pub type FeatureVector = SmallVec<[f64; 22]>;
