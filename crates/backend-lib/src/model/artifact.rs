// ============================
// crates/backend-lib/src/model/artifact.rs
// ============================
//! On-disk JSON schema for an exported decision tree.
//!
//! The artifact is a flat array of nodes. Index 0 is the root; split nodes
//! reference children by index, leaves carry an index into `classes`.
use serde::{Deserialize, Serialize};

/// Artifact schema version this build reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// Serialized decision tree as it appears on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeArtifact {
    pub format_version: u32,
    /// Length of the feature vector the tree was trained on.
    pub n_features: usize,
    /// Class labels, indexed by leaf `class`.
    pub classes: Vec<i64>,
    pub nodes: Vec<Node>,
}

/// One node of the flattened tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// Inner node: `feature <= threshold` goes left, otherwise right.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node holding an index into [`TreeArtifact::classes`].
    Leaf {
        #[serde(rename = "class")]
        class_index: usize,
    },
}
