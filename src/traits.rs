//! Core Classifier trait

use crate::{ClassificationOutcome, FeatureVector, Result};

/// The model boundary.
///
/// Implementations are loaded once by the caller and injected into a
/// [`CreditScorer`](crate::CreditScorer); nothing in this crate holds a
/// process-wide model.
pub trait Classifier: Send + Sync {
    /// Model name for logs and metrics.
    fn name(&self) -> &str;

    /// Predicted class label.
    fn predict(&self, features: &FeatureVector) -> Result<String>;

    /// One probability per class, in the model's class order.
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>>;

    /// Class labels in the order `predict_proba` reports them, if the model
    /// knows them. Used to check the class table at build time.
    fn class_labels(&self) -> Option<&[String]> {
        None
    }

    /// Label and probabilities together.
    fn classify(&self, features: &FeatureVector) -> Result<ClassificationOutcome> {
        Ok(ClassificationOutcome {
            label: self.predict(features)?,
            probabilities: self.predict_proba(features)?,
        })
    }
}
