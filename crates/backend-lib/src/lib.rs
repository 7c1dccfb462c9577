// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core library for the arbor classifier-serving backend.

pub mod auth;
pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod metrics;
pub mod model;
pub mod router;

use std::sync::Arc;

use crate::auth::{CredentialTable, TokenService};
use crate::config::Settings;
use crate::model::ClassifierModel;

/// Application state shared across all handlers.
///
/// Built once at startup and injected through the router. Nothing in here is
/// mutated while serving; the model sits read-only behind its `Arc`, so
/// concurrent handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    /// Settings the process was started with
    pub settings: Arc<Settings>,
    /// Fixed credential table checked by the login endpoint
    pub credentials: CredentialTable,
    /// Access-token issue/verify service
    pub tokens: TokenService,
    /// Loaded classifier, `None` when the artifact failed to load
    pub model: Option<Arc<ClassifierModel>>,
}

impl AppState {
    /// Assemble the state from loaded settings and an optional model.
    pub fn new(settings: Settings, model: Option<ClassifierModel>) -> Self {
        let credentials = CredentialTable::single(
            settings.auth.username.clone(),
            settings.auth.password.clone(),
        );
        let tokens = TokenService::new(
            settings.auth.secret.as_bytes(),
            settings.auth.token_ttl_secs,
        );
        Self {
            settings: Arc::new(settings),
            credentials,
            tokens,
            model: model.map(Arc::new),
        }
    }
}
