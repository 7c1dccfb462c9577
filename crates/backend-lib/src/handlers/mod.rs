// ============================
// crates/backend-lib/src/handlers/mod.rs
// ============================
//! HTTP request handlers.

pub mod login;
pub mod pages;
pub mod predict;

pub use login::login;
pub use pages::index;
pub use predict::predict;
