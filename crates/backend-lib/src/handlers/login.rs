// ============================
// crates/backend-lib/src/handlers/login.rs
// ============================
//! Login endpoint: exchange a credential pair for an access token.
use arbor_common::{LoginRequest, LoginResponse};
use axum::{extract::State, Json};
use metrics::counter;

use crate::{
    error::AppError,
    metrics::{LOGIN_ACCEPTED, LOGIN_REJECTED},
    AppState,
};

/// `POST /login`
///
/// Missing fields count as empty strings, so they fail the credential check
/// like any other wrong pair instead of producing a schema error.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if !state.credentials.check(&payload.username, &payload.password) {
        counter!(LOGIN_REJECTED).increment(1);
        tracing::info!("login rejected");
        return Err(AppError::InvalidCredentials);
    }

    let access_token = state.tokens.issue(&payload.username)?;
    counter!(LOGIN_ACCEPTED).increment(1);
    tracing::info!(username = %payload.username, "login accepted");
    Ok(Json(LoginResponse { access_token }))
}
