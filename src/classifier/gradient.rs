//! Gradient-boosted decision tree classifier
//!
//! Trees are stored as flat node arrays with child indices, the portable
//! form boosting exporters emit. The ensemble margin is the base score plus
//! the learning-rate-weighted sum of leaf values; the positive-class
//! probability is the sigmoid of that margin.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, check_batch_width, sigmoid};
use crate::error::{Error, Result};

/// One node of a decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Feature index to split on; `None` marks a leaf
    #[serde(default)]
    pub feature: Option<usize>,
    /// Split threshold; values `<=` go left
    #[serde(default)]
    pub threshold: f64,
    /// Index of the left child
    #[serde(default)]
    pub left: usize,
    /// Index of the right child
    #[serde(default)]
    pub right: usize,
    /// Leaf value (margin contribution)
    #[serde(default)]
    pub value: f64,
}

/// A single regression tree over the margin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Nodes with index 0 as the root
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree for one sample and return the leaf value.
    ///
    /// Child indices are bounds-checked and the walk is capped at the node
    /// count, so a malformed tree surfaces as an error instead of a panic
    /// or an endless loop.
    fn leaf_value(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        let mut index = 0usize;
        for _ in 0..=self.nodes.len() {
            let node = self
                .nodes
                .get(index)
                .ok_or_else(|| Error::Prediction(format!("tree node index {index} out of bounds")))?;
            match node.feature {
                None => return Ok(node.value),
                Some(feature) => {
                    let value = row.get(feature).copied().ok_or_else(|| {
                        Error::Prediction(format!("tree split on missing feature {feature}"))
                    })?;
                    index = if value <= node.threshold {
                        node.left
                    } else {
                        node.right
                    };
                }
            }
        }
        Err(Error::Prediction("tree walk did not reach a leaf".to_string()))
    }
}

/// Gradient-boosted binary classification ensemble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostedTrees {
    /// Number of input features the ensemble was trained on
    pub n_features: usize,
    /// Initial margin (log-odds of the training prior)
    #[serde(default)]
    pub base_score: f64,
    /// Shrinkage applied to every tree's contribution
    pub learning_rate: f64,
    /// Boosting stages in application order
    pub trees: Vec<DecisionTree>,
}

impl GradientBoostedTrees {
    /// Ensemble margin for one sample
    fn margin(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        let mut margin = self.base_score;
        for tree in &self.trees {
            margin += self.learning_rate * tree.leaf_value(row)?;
        }
        Ok(margin)
    }
}

impl Classifier for GradientBoostedTrees {
    fn kind(&self) -> &'static str {
        "gradient_boosted_trees"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn estimate_probabilities(&self, batch: &Array2<f64>) -> Result<Array2<f64>> {
        check_batch_width(self.kind(), self.n_features, batch)?;

        let mut probabilities = Array2::zeros((batch.nrows(), 2));
        for (i, row) in batch.rows().into_iter().enumerate() {
            let positive = sigmoid(self.margin(row)?);
            probabilities[[i, 0]] = 1.0 - positive;
            probabilities[[i, 1]] = positive;
        }
        Ok(probabilities)
    }
}
