//! Public types for the credit-score API.

mod class;
mod features;
mod input;
mod outcome;

pub use class::{ClassOrder, RiskClass};
pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
pub use input::{CreditMix, RawInput};
pub use outcome::{ClassProbability, ClassificationOutcome, DecodedResult};
