//! Scorer: encode → classify → decode over an injected classifier.

mod builder;

pub use builder::CreditScorerBuilder;

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument};

use crate::codec::{decode, encode};
use crate::traits::Classifier;
use crate::types::{ClassOrder, DecodedResult, RawInput};
use crate::{CreditScoreError, Result, telemetry};

/// Runs full assessments against one classifier and class table.
///
/// Cheap to clone; the classifier is shared.
#[derive(Clone)]
pub struct CreditScorer {
    classifier: Arc<dyn Classifier>,
    classes: ClassOrder,
}

impl CreditScorer {
    /// Create a new builder for configuring the scorer.
    pub fn builder() -> CreditScorerBuilder {
        CreditScorerBuilder::new()
    }

    pub fn classes(&self) -> &ClassOrder {
        &self.classes
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Validate, classify and decode one applicant.
    #[instrument(skip_all, fields(model = self.classifier.name()))]
    pub fn assess(&self, raw: &RawInput) -> Result<DecodedResult> {
        let start = Instant::now();
        let result = self.run(raw);
        self.record(start, &result);
        result
    }

    fn run(&self, raw: &RawInput) -> Result<DecodedResult> {
        let features = encode(raw)?;
        let outcome = self.classifier.classify(&features)?;
        debug!(label = %outcome.label, "classifier returned");
        Ok(decode(&outcome, &self.classes)?)
    }

    fn record(&self, start: Instant, result: &Result<DecodedResult>) {
        let model = self.classifier.name().to_owned();
        let status = match result {
            Ok(_) => "ok",
            Err(CreditScoreError::Validation(_)) => "invalid_input",
            Err(CreditScoreError::Decoding(_)) => "decoding_error",
            Err(_) => "model_error",
        };
        metrics::counter!(telemetry::ASSESSMENTS_TOTAL,
            "model" => model.clone(),
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(telemetry::ASSESSMENT_DURATION_SECONDS,
            "model" => model.clone(),
        )
        .record(start.elapsed().as_secs_f64());
        if let Ok(decoded) = result {
            metrics::counter!(telemetry::PREDICTIONS_TOTAL,
                "model" => model,
                "class" => decoded.label.clone(),
            )
            .increment(1);
        }
    }
}

impl std::fmt::Debug for CreditScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditScorer")
            .field("classifier", &self.classifier.name())
            .field("classes", &self.classes)
            .finish()
    }
}
