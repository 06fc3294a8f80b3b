//! Multinomial logistic-regression classifier.

use tracing::info;

use super::artifact::ModelArtifact;
use crate::traits::Classifier;
use crate::{CreditScoreError, FeatureVector, Result};

/// Softmax classifier backed by a validated [`ModelArtifact`].
#[derive(Debug, Clone)]
pub struct SoftmaxModel {
    artifact: ModelArtifact,
}

impl SoftmaxModel {
    /// Wrap an artifact, validating it first.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;
        info!(
            model = %artifact.name,
            classes = artifact.classes.len(),
            scaled = artifact.scaler.is_some(),
            "loaded softmax model"
        );
        Ok(Self { artifact })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_artifact(ModelArtifact::from_json(json)?)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Raw per-class scores before normalization.
    fn logits(&self, features: &FeatureVector) -> Vec<f64> {
        let x: Vec<f64> = match &self.artifact.scaler {
            Some(scaler) => features
                .as_slice()
                .iter()
                .zip(scaler.mean.iter().zip(&scaler.scale))
                .map(|(v, (mean, scale))| (v - mean) / scale)
                .collect(),
            None => features.as_slice().to_vec(),
        };

        self.artifact
            .weights
            .iter()
            .zip(&self.artifact.intercepts)
            .map(|(row, bias)| row.iter().zip(&x).map(|(w, v)| w * v).sum::<f64>() + bias)
            .collect()
    }
}

/// Numerically stable softmax.
pub(crate) fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// Index of the largest value; the first one wins ties.
fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

impl Classifier for SoftmaxModel {
    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<String> {
        let logits = self.logits(features);
        argmax(&logits)
            .and_then(|i| self.artifact.classes.get(i))
            .cloned()
            .ok_or_else(|| CreditScoreError::Model("model produced no scores".to_string()))
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let probabilities = softmax(&self.logits(features));
        if probabilities.iter().any(|p| !p.is_finite()) {
            return Err(CreditScoreError::Model(
                "model produced non-finite probabilities".to_string(),
            ));
        }
        Ok(probabilities)
    }

    fn class_labels(&self) -> Option<&[String]> {
        Some(&self.artifact.classes)
    }
}
