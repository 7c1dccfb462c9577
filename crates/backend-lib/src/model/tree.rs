// ============================
// crates/backend-lib/src/model/tree.rs
// ============================
//! Validated decision tree and inference over it.
use crate::error::AppError;
use crate::model::{artifact::Node, ModelError, TreeArtifact, FORMAT_VERSION};

/// A decision tree checked once at construction so inference never has to
/// re-check indices.
#[derive(Debug, Clone)]
pub struct ClassifierModel {
    n_features: usize,
    classes: Vec<i64>,
    nodes: Vec<Node>,
}

impl ClassifierModel {
    /// Validate an artifact and turn it into a usable model.
    ///
    /// Node references are checked up front: every split's feature index fits
    /// the feature vector, every child index is in range and sits strictly
    /// after its parent (so a walk always terminates), and every leaf points
    /// at a known class.
    pub fn from_artifact(artifact: TreeArtifact) -> Result<Self, ModelError> {
        if artifact.format_version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: artifact.format_version,
            });
        }
        if artifact.n_features == 0 {
            return Err(ModelError::Invalid(
                "n_features must be at least 1".to_string(),
            ));
        }
        if artifact.classes.is_empty() {
            return Err(ModelError::Invalid("classes must not be empty".to_string()));
        }
        if artifact.nodes.is_empty() {
            return Err(ModelError::Invalid("nodes must not be empty".to_string()));
        }

        let node_count = artifact.nodes.len();
        for (i, node) in artifact.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if feature >= artifact.n_features {
                        return Err(ModelError::Invalid(format!(
                            "node {i}: feature {feature} out of range"
                        )));
                    }
                    for child in [left, right] {
                        if child >= node_count {
                            return Err(ModelError::Invalid(format!(
                                "node {i}: child {child} out of range"
                            )));
                        }
                        if child <= i {
                            return Err(ModelError::Invalid(format!(
                                "node {i}: child {child} does not sit after its parent"
                            )));
                        }
                    }
                }
                Node::Leaf { class_index } => {
                    if class_index >= artifact.classes.len() {
                        return Err(ModelError::Invalid(format!(
                            "node {i}: class index {class_index} out of range"
                        )));
                    }
                }
            }
        }

        Ok(Self {
            n_features: artifact.n_features,
            classes: artifact.classes,
            nodes: artifact.nodes,
        })
    }

    /// Length of the feature vector this tree expects.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Class labels the tree can emit.
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Walk the tree for one feature vector and return the class label.
    ///
    /// `feature <= threshold` goes left. The vector length must match the
    /// trained feature count exactly.
    pub fn predict(&self, features: &[f64]) -> Result<i64, AppError> {
        if features.len() != self.n_features {
            return Err(AppError::Prediction(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }

        // All indices were checked in from_artifact, and children sit
        // strictly after their parent, so this loop terminates.
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
                Node::Leaf { class_index } => return Ok(self.classes[class_index]),
            }
        }
    }
}
