//! credit-score - credit risk assessment around a pre-trained classifier
//!
//! This crate turns raw applicant attributes into the feature vector a
//! credit-scoring model expects, and turns the model's label and class
//! probabilities back into a ranked, human-readable risk category. The model
//! itself sits behind the [`Classifier`] trait and is injected by the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use credit_score::{CreditMix, CreditScorer, ModelSource, RawInput};
//!
//! fn main() -> credit_score::Result<()> {
//!     let model = ModelSource::local("model.json").load()?;
//!     let scorer = CreditScorer::builder().classifier(model).build()?;
//!
//!     let applicant = RawInput::new()
//!         .age(30)
//!         .monthly_income(50_000.0)
//!         .loan_amount(200_000.0)
//!         .num_loans(2)
//!         .credit_mix(CreditMix::Standard)
//!         .outstanding_debt(100_000.0)
//!         .interest_rate(10)
//!         .delayed_payments(5);
//!
//!     let result = scorer.assess(&applicant)?;
//!     println!("{} (rank {})", result.label, result.rank);
//!     Ok(())
//! }
//! ```
//!
//! # Without a scorer
//!
//! [`encode`] and [`decode`] are plain functions and can be used on their
//! own when the model is driven elsewhere.

pub mod codec;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod scorer;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;

// Re-export main types at crate root
pub use codec::{decode, encode};
pub use error::{CreditScoreError, DecodingError, Result, ValidationError};
pub use model::{ModelArtifact, ModelSource, SoftmaxModel};
pub use report::TextReport;
pub use scorer::{CreditScorer, CreditScorerBuilder};
pub use traits::Classifier;
pub use version::{PKG_VERSION, long_version, version_string};

pub use types::{
    ClassOrder, ClassProbability, ClassificationOutcome, CreditMix, DecodedResult, FeatureVector,
    RawInput, RiskClass,
};
