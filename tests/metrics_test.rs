//! Tests for assessment metrics emission.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};

use credit_score::telemetry;
use credit_score::{
    Classifier, CreditMix, CreditScoreError, CreditScorer, FeatureVector, RawInput, Result,
};

// ============================================================================
// Mock classifier
// ============================================================================

struct GoodClassifier;

impl Classifier for GoodClassifier {
    fn name(&self) -> &str {
        "good-only"
    }

    fn predict(&self, _features: &FeatureVector) -> Result<String> {
        Ok("Good".to_string())
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<Vec<f64>> {
        Ok(vec![0.0, 0.1, 0.8, 0.1, 0.0])
    }
}

/// Predicts a label outside the class table.
struct UnknownLabelClassifier;

impl Classifier for UnknownLabelClassifier {
    fn name(&self) -> &str {
        "unknown-label"
    }

    fn predict(&self, _features: &FeatureVector) -> Result<String> {
        Ok("Stellar".to_string())
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<Vec<f64>> {
        Ok(vec![0.2; 5])
    }
}

/// Fails at inference.
struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn name(&self) -> &str {
        "failing"
    }

    fn predict(&self, _features: &FeatureVector) -> Result<String> {
        Err(CreditScoreError::Model("inference backend unavailable".to_string()))
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<Vec<f64>> {
        Err(CreditScoreError::Model("inference backend unavailable".to_string()))
    }
}

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum all counter values matching a name and, optionally, a label value.
fn counter_total(snapshot: &SnapshotVec, name: &str, label: Option<(&str, &str)>) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .filter(|(key, _, _, _)| match label {
            Some((k, v)) => key.key().labels().any(|l| l.key() == k && l.value() == v),
            None => true,
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

fn applicant() -> RawInput {
    RawInput::new()
        .age(52)
        .monthly_income(6_100.0)
        .loan_amount(30_000.0)
        .num_loans(3)
        .credit_mix(CreditMix::Good)
        .outstanding_debt(2_400.0)
        .interest_rate(6)
        .delayed_payments(1)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn successful_assessment_records_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        let scorer = CreditScorer::builder()
            .classifier(GoodClassifier)
            .build()
            .unwrap();
        scorer.assess(&applicant())
    });
    assert!(result.is_ok());

    let snapshot = snapshotter.snapshot().into_vec();

    assert_eq!(
        counter_total(&snapshot, telemetry::ASSESSMENTS_TOTAL, Some(("status", "ok"))),
        1
    );
    assert_eq!(
        counter_total(&snapshot, telemetry::PREDICTIONS_TOTAL, Some(("class", "Good"))),
        1
    );
    assert!(
        has_histogram(&snapshot, telemetry::ASSESSMENT_DURATION_SECONDS),
        "expected a duration histogram entry"
    );
}

#[test]
fn invalid_input_records_status() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        let scorer = CreditScorer::builder()
            .classifier(GoodClassifier)
            .build()
            .unwrap();
        scorer.assess(&applicant().credit_mix(CreditMix::Unset))
    });
    assert!(result.is_err());

    let snapshot = snapshotter.snapshot().into_vec();

    assert_eq!(
        counter_total(
            &snapshot,
            telemetry::ASSESSMENTS_TOTAL,
            Some(("status", "invalid_input"))
        ),
        1
    );
    assert_eq!(counter_total(&snapshot, telemetry::PREDICTIONS_TOTAL, None), 0);
}

/// Run one assessment against `classifier` and return the failure status
/// counter alongside the prediction total.
fn failed_assessment_counts(classifier: impl Classifier + 'static, status: &str) -> (u64, u64) {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        let scorer = CreditScorer::builder()
            .classifier(classifier)
            .build()
            .unwrap();
        scorer.assess(&applicant())
    });
    assert!(result.is_err());

    let snapshot = snapshotter.snapshot().into_vec();
    (
        counter_total(&snapshot, telemetry::ASSESSMENTS_TOTAL, Some(("status", status))),
        counter_total(&snapshot, telemetry::PREDICTIONS_TOTAL, None),
    )
}

#[test]
fn unknown_label_records_decoding_error() {
    let (failures, predictions) = failed_assessment_counts(UnknownLabelClassifier, "decoding_error");
    assert_eq!(failures, 1);
    assert_eq!(predictions, 0);
}

#[test]
fn classifier_failure_records_model_error() {
    let (failures, predictions) = failed_assessment_counts(FailingClassifier, "model_error");
    assert_eq!(failures, 1);
    assert_eq!(predictions, 0);
}
