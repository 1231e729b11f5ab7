use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::Predictor;

/// Shared application state: the model loaded once at startup, or `None`
/// when the artifact was missing. Read-only for the process lifetime.
pub struct AppState {
    pub model: Option<Arc<dyn Predictor>>,
}

// --- DTOs (Data Transfer Objects) ---

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Raw predicted price, unrounded.
    pub price: f64,
    /// Presentation string, rounded to two decimals for display only.
    pub display: String,
    pub inference_time_ms: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ModelStatus {
    pub loaded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
