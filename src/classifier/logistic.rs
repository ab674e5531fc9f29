//! Logistic regression classifier
//!
//! Coefficients, intercept and an optional standard scaler, exactly the
//! shape the training side exports. Probability of the positive class is
//! the sigmoid of the scaled linear score.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, check_batch_width, sigmoid};
use crate::error::Result;

/// Per-feature standardization applied before the linear score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Training means, one per feature
    pub mean: Vec<f64>,
    /// Training standard deviations, one per feature
    pub std: Vec<f64>,
}

impl StandardScaler {
    /// Standardize one raw feature value.
    ///
    /// A zero or non-finite deviation leaves the centered value unscaled
    /// rather than dividing by it.
    fn transform(&self, index: usize, value: f64) -> f64 {
        let centered = value - self.mean[index];
        match self.std.get(index) {
            Some(&std) if std > 0.0 && std.is_finite() => centered / std,
            _ => centered,
        }
    }
}

/// Binary logistic regression model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One coefficient per feature, in schema order
    pub coefficients: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
    /// Optional standardization fitted during training
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
}

impl LogisticRegression {
    /// Linear score for one row of the batch
    fn score_row(&self, row: ndarray::ArrayView1<'_, f64>) -> f64 {
        let mut z = self.intercept;
        for (index, (&value, &coefficient)) in row.iter().zip(&self.coefficients).enumerate() {
            let x = match &self.scaler {
                Some(scaler) => scaler.transform(index, value),
                None => value,
            };
            z += coefficient * x;
        }
        z
    }
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> &'static str {
        "logistic_regression"
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn estimate_probabilities(&self, batch: &Array2<f64>) -> Result<Array2<f64>> {
        check_batch_width(self.kind(), self.n_features(), batch)?;
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != self.coefficients.len() {
                return Err(crate::error::Error::Prediction(format!(
                    "scaler covers {} features, model has {}",
                    scaler.mean.len(),
                    self.coefficients.len()
                )));
            }
        }

        let mut probabilities = Array2::zeros((batch.nrows(), 2));
        for (i, row) in batch.rows().into_iter().enumerate() {
            let positive = sigmoid(self.score_row(row));
            probabilities[[i, 0]] = 1.0 - positive;
            probabilities[[i, 1]] = positive;
        }
        Ok(probabilities)
    }
}
