//! Builder for configuring scorer instances

use std::sync::Arc;

use tracing::debug;

use super::CreditScorer;
use crate::traits::Classifier;
use crate::types::ClassOrder;
use crate::{CreditScoreError, Result};

/// Builder for [`CreditScorer`].
#[derive(Default)]
pub struct CreditScorerBuilder {
    classifier: Option<Arc<dyn Classifier>>,
    classes: Option<ClassOrder>,
}

impl CreditScorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the classifier the scorer delegates to.
    pub fn classifier(mut self, classifier: impl Classifier + 'static) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    /// Set an already shared classifier.
    pub fn shared_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Override the class table (default: [`ClassOrder::standard`]).
    pub fn classes(mut self, classes: ClassOrder) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Build the scorer.
    ///
    /// When the classifier reports its own class labels they must match the
    /// class table name for name, in order; otherwise probabilities would be
    /// paired with the wrong classes.
    pub fn build(self) -> Result<CreditScorer> {
        let classifier = self.classifier.ok_or_else(|| {
            CreditScoreError::Configuration("no classifier configured".to_string())
        })?;
        let classes = self.classes.unwrap_or_default();

        match classifier.class_labels() {
            Some(labels) => {
                if !labels.iter().map(String::as_str).eq(classes.names()) {
                    return Err(CreditScoreError::Configuration(format!(
                        "model '{}' reports classes {:?}, class table has {:?}",
                        classifier.name(),
                        labels,
                        classes.names().collect::<Vec<_>>()
                    )));
                }
            }
            None => {
                debug!(
                    model = classifier.name(),
                    "classifier does not report class labels; assuming class table order"
                );
            }
        }

        Ok(CreditScorer {
            classifier,
            classes,
        })
    }
}
