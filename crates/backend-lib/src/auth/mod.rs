// ============================
// crates/backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod credentials;
pub mod middleware;
pub mod token;

pub use credentials::CredentialTable;
pub use middleware::require_auth;
pub use token::{Claims, TokenService};
