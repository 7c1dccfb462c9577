// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const LOGIN_ACCEPTED: &str = "auth.login.accepted";
pub const LOGIN_REJECTED: &str = "auth.login.rejected";
pub const TOKEN_REJECTED: &str = "auth.token.rejected";
pub const PREDICT_SERVED: &str = "predict.served";
pub const PREDICT_FAILED: &str = "predict.failed";
