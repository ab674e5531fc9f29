//! A Rust library for clinical disease-risk prediction: pre-trained binary
//! classifiers loaded from serialized artifacts, schema-driven feature
//! vectors, and deterministic risk banding.

pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod predict;
pub mod registry;
pub mod schema;

// Re-export the most common types for easier use
// Core types
pub use config::RegistryConfig;
pub use error::{Error, Result};
pub use models::{Disease, FeatureVector, Prediction, RiskLevel};
pub use schema::{FeatureField, FeatureSchema};

// Classifier capability
pub use classifier::{Classifier, ClassifierKind, ModelArtifact};

// Registry and prediction surface
pub use predict::{Predictor, predict_disease};
pub use registry::ModelRegistry;
pub use registry::schemas::schema_for;
