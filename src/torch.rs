//! Code for loading and running a (trained) TorchScript classifier

use std::path::{Path, PathBuf};

use tch::{no_grad, Kind, Tensor};
use thiserror::Error;

/// Errors produced while loading or running the model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file not found at {0}")]
    NotFound(PathBuf),

    #[error("failed to load model: {0}")]
    Load(#[source] tch::TchError),

    #[error("inference failed: {0}")]
    Forward(#[from] tch::TchError),
}

/// A loaded classifier ready to compute inference.
///
/// Implementations must tolerate concurrent `predict` calls; the serving
/// process shares one handle across all requests.
pub trait Classifier: Send + Sync {
    /// Run the model on a `[1, H, W, C]` input and return the probability
    /// vector of the first (only) batch row
    fn predict(&self, input: &Tensor) -> Result<Vec<f32>, ModelError>;
}

/// Load and run a TorchScript file
#[derive(Debug)]
pub struct TorchModel {
    /// The loaded torch model
    model: tch::jit::CModule,
}

impl TorchModel {
    /// Load the model from disk. Called once at startup; a missing or
    /// corrupt file is fatal to the serving process.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        Ok(TorchModel {
            model: tch::CModule::load(path).map_err(ModelError::Load)?,
        })
    }
}

impl Classifier for TorchModel {
    fn predict(&self, input: &Tensor) -> Result<Vec<f32>, ModelError> {
        let output = no_grad(|| self.model.forward_ts(&[input]))?;
        // [1, N] -> [N]; already-flat outputs pass through unchanged
        let probs = output.squeeze_dim(0).to_kind(Kind::Float);
        Ok(Vec::<f32>::try_from(&probs)?)
    }
}

/// Index of the largest probability, or `None` for an empty vector
pub fn argmax(probs: &[f32]) -> Option<usize> {
    probs
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[1.0]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmax_one_hot() {
        let mut probs = vec![0.0f32; 42];
        probs[41] = 1.0;
        assert_eq!(argmax(&probs), Some(41));
    }

    #[test]
    fn test_load_missing_model() {
        let err = TorchModel::load("models/does_not_exist.pt").unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }
}
