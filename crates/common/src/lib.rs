// ================
// crates/common/src/lib.rs
// ================
//! Wire types shared between the arbor server and its clients.
//! This module defines the request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    /// Account name; an absent field deserializes to an empty string, which
    /// never matches the credential table.
    #[serde(default)]
    pub username: String,
    /// Account password, compared verbatim.
    #[serde(default)]
    pub password: String,
}

/// Successful login reply.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    /// Signed bearer token to present on protected routes.
    pub access_token: String,
}

/// Successful prediction reply.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PredictResponse {
    /// Predicted class label.
    pub prediction: i64,
}

/// Body of every 401 reply: a fixed message revealing nothing about which
/// check failed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageBody {
    pub message: String,
}

/// Body of 4xx/5xx replies on the prediction side, carrying the failure
/// description under `error`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
}
