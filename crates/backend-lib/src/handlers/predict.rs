// ============================
// crates/backend-lib/src/handlers/predict.rs
// ============================
//! Prediction endpoint, reachable only through the token guard.
use arbor_common::PredictResponse;
use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use metrics::counter;
use serde_json::Value;

use crate::{
    auth::Claims,
    error::AppError,
    features::feature_vector,
    metrics::{PREDICT_FAILED, PREDICT_SERVED},
    AppState,
};

/// `POST /predict`
///
/// The body is a flat JSON object; its values in document order form the
/// feature vector. Every failure between body and label comes back as a
/// 400 with an `error` field.
pub async fn predict(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let outcome = classify(&state, payload);
    match &outcome {
        Ok(response) => {
            counter!(PREDICT_SERVED).increment(1);
            tracing::info!(user = %claims.sub, prediction = response.prediction, "prediction served");
        }
        Err(e) => {
            counter!(PREDICT_FAILED).increment(1);
            tracing::info!(user = %claims.sub, error = %e, "prediction failed");
        }
    }
    outcome.map(Json)
}

fn classify(
    state: &AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<PredictResponse, AppError> {
    let Json(payload) = payload.map_err(|r| AppError::Prediction(r.body_text()))?;
    let model = state.model.as_ref().ok_or(AppError::ModelUnavailable)?;
    let features = feature_vector(&payload)?;
    let prediction = model.predict(&features)?;
    Ok(PredictResponse { prediction })
}
