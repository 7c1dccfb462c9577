// ============================
// crates/backend-lib/src/auth/token.rs
// ============================
//! Signed access tokens (JWT, HS256) with a fixed time to live.
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried inside an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Unique token id.
    pub jti: String,
}

/// Issues and verifies access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Create a service signing with `secret` and issuing tokens that live
    /// for `ttl_secs` seconds.
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Issue a token for `sub`, valid from now.
    pub fn issue(&self, sub: &str) -> Result<String, AppError> {
        self.issue_at(sub, Utc::now())
    }

    /// Issue a token for `sub`, valid from `now`. Split out so tests can pin
    /// the clock.
    pub fn issue_at(&self, sub: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            sub: sub.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token encoding failed: {e}")))
    }

    /// Verify a token against the current clock.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature and claims, then check expiry against `now`.
    ///
    /// Expiry is checked here rather than by the JWT library so the clock can
    /// be injected; a token is dead from its `exp` instant onwards.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            tracing::debug!(reason = %e, "token rejected");
            AppError::InvalidToken
        })?;

        if now.timestamp() >= data.claims.exp {
            tracing::debug!(exp = data.claims.exp, "token expired");
            return Err(AppError::InvalidToken);
        }
        Ok(data.claims)
    }
}
