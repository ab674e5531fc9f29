//! Field definitions for feature schemas

use std::fmt;

use crate::models::Disease;

/// A single named numeric field in a feature schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureField {
    /// Name of the field as the model was trained on it
    pub name: String,
    /// Prompt label shown when collecting the value
    pub label: String,
}

impl FeatureField {
    /// Create a new field definition
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered feature schema for one disease
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    /// Disease the schema belongs to
    pub disease: Disease,
    /// Fields in training order
    pub fields: Vec<FeatureField>,
}

impl FeatureSchema {
    /// Create a schema from an ordered field list
    #[must_use]
    pub fn new(disease: Disease, fields: Vec<FeatureField>) -> Self {
        Self { disease, fields }
    }

    /// Number of features the model expects
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in training order
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
