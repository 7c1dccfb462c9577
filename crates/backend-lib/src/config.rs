// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
//!
//! Settings come from a TOML file merged with `ARBOR_`-prefixed environment
//! variables (nested keys separated by `__`, e.g. `ARBOR_AUTH__SECRET`).
//! Benign keys carry defaults; the token secret and the credential pair do
//! not, so a deployment that forgets them refuses to start instead of
//! falling back to something guessable.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Config file looked up when no `--config` argument is given.
pub const DEFAULT_CONFIG_FILE: &str = "arbor.toml";

const ENV_PREFIX: &str = "ARBOR_";

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Listener settings
    #[serde(default)]
    pub server: ServerSettings,
    /// Model artifact settings
    #[serde(default)]
    pub model: ModelSettings,
    /// Authentication settings; required, see module docs
    pub auth: AuthSettings,
}

/// Bind address of the HTTP listener
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the serialized classifier lives
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

/// Credential pair, token-signing secret and token lifetime
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub username: String,
    pub password: String,
    pub secret: String,
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model.json")
}

fn default_token_ttl_secs() -> u64 {
    6 * 60 * 60
}

impl Settings {
    /// Load settings from the default file location plus environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load settings from a specific TOML file; environment variables win
    /// over file values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }

    /// Address string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
