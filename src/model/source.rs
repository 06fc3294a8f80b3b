//! Model source and loading logic.

use std::path::PathBuf;

use super::artifact::ModelArtifact;
use super::softmax::SoftmaxModel;
use crate::error::{CreditScoreError, Result};

/// Environment variable naming the model artifact path.
pub const MODEL_PATH_ENV: &str = "CREDIT_SCORE_MODEL";

/// Source for a model artifact.
///
/// Fetching artifacts over the network is left to the caller; resolve a
/// download to a local path first.
#[derive(Debug, Clone)]
pub enum ModelSource {
    /// Load from a JSON artifact on disk.
    Local {
        /// Path to the artifact file.
        path: PathBuf,
    },

    /// Use an artifact already held in memory.
    Artifact(ModelArtifact),
}

impl ModelSource {
    /// Create a local source.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local { path: path.into() }
    }

    /// Default artifact location: `$CREDIT_SCORE_MODEL`, else
    /// `<data dir>/credit-score/model.json`, else
    /// `~/.local/share/credit-score/model.json`.
    pub fn default_path() -> Result<PathBuf> {
        default_path_from(
            std::env::var_os(MODEL_PATH_ENV).map(PathBuf::from),
            dirs::data_dir(),
            dirs::home_dir(),
        )
    }

    /// Load and validate the model.
    pub fn load(&self) -> Result<SoftmaxModel> {
        match self {
            Self::Local { path } => {
                if !path.exists() {
                    return Err(CreditScoreError::Model(format!(
                        "Model artifact does not exist: {}",
                        path.display()
                    )));
                }
                let json = std::fs::read_to_string(path).map_err(|e| {
                    CreditScoreError::Model(format!(
                        "Failed to read model artifact {}: {e}",
                        path.display()
                    ))
                })?;
                SoftmaxModel::from_json(&json)
            }
            Self::Artifact(artifact) => SoftmaxModel::from_artifact(artifact.clone()),
        }
    }
}

fn default_path_from(
    explicit: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let base = data_dir
        .or_else(|| home_dir.map(|home| home.join(".local").join("share")))
        .ok_or_else(|| {
            CreditScoreError::Configuration(format!(
                "no data or home directory to locate the model; set {MODEL_PATH_ENV} or pass a path"
            ))
        })?;
    Ok(base.join("credit-score").join("model.json"))
}
