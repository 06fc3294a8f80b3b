//! Classifier output and decoded assessment types.

use serde::{Deserialize, Serialize};

/// Raw classifier output: predicted label plus one probability per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    pub label: String,
    pub probabilities: Vec<f64>,
}

impl ClassificationOutcome {
    pub fn new(label: impl Into<String>, probabilities: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            probabilities,
        }
    }
}

/// Probability assigned to a single class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub class: String,
    pub probability: f64,
}

/// Human-readable assessment derived from a [`ClassificationOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedResult {
    /// Display label of the predicted class.
    pub label: String,
    pub color: String,
    pub description: String,
    /// 1-based position of the label in the class table.
    pub rank: usize,
    /// `rank / class count`, in (0, 1].
    pub progress: f64,
    /// Per-class probabilities in class-table order.
    pub probabilities: Vec<ClassProbability>,
}

impl DecodedResult {
    /// Probability for `class`, if present.
    pub fn probability_of(&self, class: &str) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|p| p.class == class)
            .map(|p| p.probability)
    }

    /// Probability the classifier gave to its own predicted label.
    pub fn confidence(&self) -> Option<f64> {
        self.probability_of(&self.label)
    }
}
