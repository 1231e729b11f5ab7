use crate::error::InferenceError;
use crate::features::frame::FeatureFrame;
use crate::features::request::PredictionRequest;
use crate::model::Predictor;

/// Runs one prediction against the loaded model.
///
/// The caller is responsible for the missing-model case; this function
/// assumes a model is present.
pub fn predict_price(
    model: &dyn Predictor,
    req: &PredictionRequest,
) -> Result<f64, InferenceError> {
    // 1. Validate domains
    req.validate()?;

    // 2. Assemble the single-row frame in training column order
    let frame = FeatureFrame::from_request(req);

    // 3. Inference
    let outputs = model.predict(&frame)?;

    // 4. The first (only) output is the price
    outputs.first().copied().ok_or(InferenceError::EmptyOutput)
}
