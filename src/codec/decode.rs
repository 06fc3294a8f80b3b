//! Classifier output → decoded assessment.

use tracing::{debug, warn};

use crate::DecodingError;
use crate::types::{ClassOrder, ClassProbability, ClassificationOutcome, DecodedResult};

/// Allowed drift of the probability sum from 1.0 before a warning is logged.
const PROBABILITY_SUM_TOLERANCE: f64 = 0.01;

/// Decode a classifier outcome against the class table.
///
/// The i-th probability is taken to belong to `classes[i]`. That ordering is
/// a contract with the model; only the lengths can be checked here.
pub fn decode(
    outcome: &ClassificationOutcome,
    classes: &ClassOrder,
) -> Result<DecodedResult, DecodingError> {
    let (index, class) = classes
        .find(&outcome.label)
        .ok_or_else(|| DecodingError::UnknownLabel(outcome.label.clone()))?;

    if outcome.probabilities.len() != classes.len() {
        return Err(DecodingError::LengthMismatch {
            expected: classes.len(),
            actual: outcome.probabilities.len(),
        });
    }

    if let Some(sum) = sum_drift(&outcome.probabilities) {
        warn!(sum, label = %outcome.label, "class probabilities do not sum to 1");
    }

    let probabilities = classes
        .iter()
        .zip(&outcome.probabilities)
        .map(|(class, &probability)| ClassProbability {
            class: class.name.clone(),
            probability,
        })
        .collect();

    let rank = index + 1;
    let result = DecodedResult {
        label: class.name.clone(),
        color: class.color.clone(),
        description: class.description.clone(),
        rank,
        progress: rank as f64 / classes.len() as f64,
        probabilities,
    };
    debug!(label = %result.label, rank, "decoded classifier outcome");
    Ok(result)
}

/// The probability sum when it is not within tolerance of 1.0.
/// A NaN sum counts as drifted.
fn sum_drift(probabilities: &[f64]) -> Option<f64> {
    let sum: f64 = probabilities.iter().sum();
    (sum.is_nan() || (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE).then_some(sum)
}
