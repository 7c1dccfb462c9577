// ============================
// crates/backend-lib/src/auth/middleware.rs
// ============================
//! Bearer-token guard for protected routes.
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use metrics::counter;

use crate::{error::AppError, metrics::TOKEN_REJECTED, AppState};

/// Require a valid access token; on success the verified [`Claims`] are
/// attached to the request extensions for downstream handlers.
///
/// [`Claims`]: crate::auth::Claims
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(request.headers()) else {
        counter!(TOKEN_REJECTED).increment(1);
        return Err(AppError::InvalidToken);
    };

    let claims = state.tokens.verify(token).inspect_err(|_| {
        counter!(TOKEN_REJECTED).increment(1);
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
