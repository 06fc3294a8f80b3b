//! Serialized model artifact format.
//!
//! A multinomial logistic-regression model stored as JSON:
//!
//! ```json
//! {
//!   "name": "credit-mix-v3",
//!   "classes": ["Poor", "Standard", "Good", "Very Good", "Excellent"],
//!   "weights": [[...8 floats...], ...one row per class],
//!   "intercepts": [...one per class],
//!   "scaler": { "mean": [...8], "scale": [...8] }
//! }
//! ```
//!
//! `scaler` is optional; when present, features are standardized as
//! `(x - mean) / scale` before the linear layer.

use serde::{Deserialize, Serialize};

use crate::types::FEATURE_COUNT;
use crate::{CreditScoreError, Result};

/// Per-feature standardization parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// On-disk representation of a softmax classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default = "default_name")]
    pub name: String,
    /// Class labels in output order.
    pub classes: Vec<String>,
    /// One row of `FEATURE_COUNT` weights per class.
    pub weights: Vec<Vec<f64>>,
    /// One intercept per class.
    pub intercepts: Vec<f64>,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

fn default_name() -> String {
    "softmax".to_string()
}

impl ModelArtifact {
    /// Parse and validate an artifact from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(json)
            .map_err(|e| CreditScoreError::Model(format!("Failed to parse model artifact: {e}")))?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check dimensions and numeric sanity.
    pub fn validate(&self) -> Result<()> {
        let k = self.classes.len();
        if k == 0 {
            return Err(invalid("model declares no classes"));
        }
        for (i, class) in self.classes.iter().enumerate() {
            if self.classes[..i].contains(class) {
                return Err(invalid(format!("duplicate class label {class:?}")));
            }
        }
        if self.weights.len() != k {
            return Err(invalid(format!(
                "expected {k} weight rows, found {}",
                self.weights.len()
            )));
        }
        for (class, row) in self.classes.iter().zip(&self.weights) {
            if row.len() != FEATURE_COUNT {
                return Err(invalid(format!(
                    "weight row for {class:?} has {} entries, expected {FEATURE_COUNT}",
                    row.len()
                )));
            }
        }
        if self.intercepts.len() != k {
            return Err(invalid(format!(
                "expected {k} intercepts, found {}",
                self.intercepts.len()
            )));
        }
        let all_finite = self
            .weights
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(invalid("weights and intercepts must be finite"));
        }

        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != FEATURE_COUNT || scaler.scale.len() != FEATURE_COUNT {
                return Err(invalid(format!(
                    "scaler must have {FEATURE_COUNT} means and {FEATURE_COUNT} scales"
                )));
            }
            if !scaler.mean.iter().all(|m| m.is_finite()) {
                return Err(invalid("scaler means must be finite"));
            }
            if !scaler.scale.iter().all(|s| s.is_finite() && *s != 0.0) {
                return Err(invalid("scaler scales must be finite and non-zero"));
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl std::fmt::Display) -> CreditScoreError {
    CreditScoreError::Model(format!("invalid model artifact: {msg}"))
}
