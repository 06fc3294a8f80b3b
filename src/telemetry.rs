//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus,
//! statsd); without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `credit_score_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).

/// Total assessments run through a scorer.
///
/// Labels: `model`, `status` ("ok" | "invalid_input" | "model_error" |
/// "decoding_error").
pub const ASSESSMENTS_TOTAL: &str = "credit_score_assessments_total";

/// Assessment duration in seconds, encode through decode.
///
/// Labels: `model`.
pub const ASSESSMENT_DURATION_SECONDS: &str = "credit_score_assessment_duration_seconds";

/// Successful assessments per predicted class.
///
/// Labels: `model`, `class`.
pub const PREDICTIONS_TOTAL: &str = "credit_score_predictions_total";
