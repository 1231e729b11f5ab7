use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;
use crate::features::frame::{FeatureFrame, FEATURE_COLUMNS};
use crate::model::Predictor;

/// Regression artifact exported by the offline training pipeline: a linear
/// model over the five numeric columns plus an additive per-neighborhood
/// effect. The service only ever calls `predict` on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceModel {
    /// Column names in training order.
    pub schema: Vec<String>,
    pub intercept: f64,
    /// Weight per numeric column.
    pub weights: HashMap<String, f64>,
    /// Additive effect per neighborhood code seen during training.
    pub neighborhood_effects: HashMap<String, f64>,
}

impl PriceModel {
    fn check_schema(&self, frame: &FeatureFrame) -> Result<(), InferenceError> {
        let got: Vec<String> = frame.columns().iter().map(|c| c.to_string()).collect();
        if self.schema != got {
            return Err(InferenceError::SchemaMismatch {
                expected: self.schema.clone(),
                got,
            });
        }
        Ok(())
    }
}

impl Predictor for PriceModel {
    fn predict(&self, frame: &FeatureFrame) -> Result<Vec<f64>, InferenceError> {
        self.check_schema(frame)?;

        let mut price = self.intercept;
        for column in &FEATURE_COLUMNS[..5] {
            let value = frame.numeric(column).ok_or_else(|| {
                InferenceError::Inference(format!("non-numeric value for column {column}"))
            })?;
            let weight = self.weights.get(*column).ok_or_else(|| {
                InferenceError::Inference(format!("model has no weight for column {column}"))
            })?;
            price += weight * value;
        }

        let neighborhood = frame
            .text("Neighborhood")
            .ok_or_else(|| InferenceError::Inference("missing Neighborhood value".to_string()))?;
        let effect = self.neighborhood_effects.get(neighborhood).ok_or_else(|| {
            InferenceError::Inference(format!(
                "unseen categorical value '{neighborhood}' for Neighborhood"
            ))
        })?;
        price += effect;

        Ok(vec![price])
    }
}
