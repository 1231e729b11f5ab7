use axum::{extract::State, response::Html, Json};
use std::sync::Arc;
use std::time::Instant;

use crate::error::InferenceError;
use crate::features::request::PredictionRequest;
use crate::inference;
use crate::model::loader::MODEL_FILE;
use crate::server::types::*;
use crate::{format, model};

pub async fn health_check() -> &'static str {
    "OK"
}

/// The single-page form. All page chrome lives in the static file; the
/// page itself queries `/model/status` and posts to `/predict`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn model_status(State(state): State<Arc<AppState>>) -> Json<ModelStatus> {
    match &state.model {
        Some(_) => Json(ModelStatus {
            loaded: true,
            error: None,
        }),
        None => Json(ModelStatus {
            loaded: false,
            error: Some(InferenceError::ModelMissing(MODEL_FILE.to_string()).to_string()),
        }),
    }
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PredictionRequest>,
) -> Result<Json<PredictResponse>, InferenceError> {
    // 1. A missing model is a guarded degraded state, not an invoker error
    let model: &Arc<dyn model::Predictor> = state
        .model
        .as_ref()
        .ok_or_else(|| InferenceError::ModelMissing(MODEL_FILE.to_string()))?;

    // 2. Inference
    let start = Instant::now();
    let price = inference::predict_price(model.as_ref(), &payload)?;
    let duration = start.elapsed();

    // 3. Raw value plus the presentation string
    Ok(Json(PredictResponse {
        price,
        display: format::display_price(price),
        inference_time_ms: duration.as_secs_f64() * 1000.0,
    }))
}
