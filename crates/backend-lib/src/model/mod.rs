// ============================
// crates/backend-lib/src/model/mod.rs
// ============================
//! Decision-tree classifier: on-disk artifact schema, validated in-memory
//! form, and loading.

use std::path::PathBuf;

use thiserror::Error;

pub mod artifact;
pub mod loader;
pub mod tree;

pub use artifact::{Node, TreeArtifact, FORMAT_VERSION};
pub use loader::{load, load_or_warn};
pub use tree::ClassifierModel;

/// Everything that can go wrong between a path on disk and a usable model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read model artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported artifact format version {found}")]
    UnsupportedVersion { found: u32 },

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}
