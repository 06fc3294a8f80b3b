//! Model artifacts and the bundled softmax classifier.

pub mod artifact;
pub mod softmax;
pub mod source;

pub use artifact::{ModelArtifact, Scaler};
pub use softmax::SoftmaxModel;
pub use source::{MODEL_PATH_ENV, ModelSource};
