//! Feature-schema machinery
//!
//! A schema is the ordered list of named numeric fields a model was trained
//! on. Order is significant: it is an implicit contract with the model
//! artifact, not self-describing, so the field lists here must match the
//! training column order exactly.

pub mod field;

pub use field::{FeatureField, FeatureSchema};
