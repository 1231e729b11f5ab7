use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Could not find '{0}'. Please ensure it is in the 'model' folder.")]
    ModelMissing(String),

    #[error("failed to read model at {path}: {source}")]
    ModelUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize model at {path}: {source}")]
    ModelCorrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("feature schema mismatch: expected {expected:?}, got {got:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },

    #[error("prediction failed: {0}")]
    Inference(String),

    #[error("model returned an empty prediction sequence")]
    EmptyOutput,
}

impl IntoResponse for InferenceError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            InferenceError::ModelMissing(_) => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            InferenceError::OutOfRange { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            InferenceError::SchemaMismatch { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            InferenceError::Inference(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            InferenceError::EmptyOutput => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
