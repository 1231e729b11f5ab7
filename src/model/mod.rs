pub mod artifact;
pub mod loader;

use crate::error::InferenceError;
use crate::features::frame::FeatureFrame;

/// The one capability the service needs from a loaded model: map a
/// single-row feature table to a sequence of numeric outputs.
pub trait Predictor: Send + Sync {
    fn predict(&self, frame: &FeatureFrame) -> Result<Vec<f64>, InferenceError>;
}
