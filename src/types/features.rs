//! Model-facing feature vector.

use serde::{Deserialize, Serialize};

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 8;

/// Feature names, in vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "monthly_income",
    "loan_amount",
    "num_loans",
    "credit_mix",
    "outstanding_debt",
    "interest_rate",
    "delayed_payments",
];

/// Fixed-order numeric encoding of an applicant.
///
/// Built by [`encode`](crate::encode); immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub(crate) fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_array(self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    pub fn names() -> &'static [&'static str; FEATURE_COUNT] {
        &FEATURE_NAMES
    }

    /// Iterate `(name, value)` pairs in vector order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
