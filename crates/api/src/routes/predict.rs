//! Prediction Route

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use feature_builder::PredictionInput;
use inference_engine::InferenceError;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Successful forecast
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Non-negative sales forecast
    pub prediction: f64,
}

/// Failure body; the submitted input is echoed back for correction
#[derive(Debug, Serialize)]
pub struct PredictFailure {
    pub error: String,
    pub input: PredictionInput,
}

/// Run one prediction request
pub async fn post_predict(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PredictionInput>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<PredictFailure>)> {
    match state.predictor.predict(&input) {
        Ok(prediction) => Ok(Json(PredictResponse { prediction })),
        Err(err) => {
            warn!("Prediction request failed: {err}");
            let status = match err {
                InferenceError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            };
            Err((
                status,
                Json(PredictFailure {
                    error: err.to_string(),
                    input,
                }),
            ))
        }
    }
}
