// ============================
// crates/backend-lib/src/model/loader.rs
// ============================
//! Reading a model artifact off disk.
use std::fs;
use std::path::Path;

use crate::model::{ClassifierModel, ModelError, TreeArtifact};

/// Read, parse and validate the artifact at `path`.
pub fn load(path: &Path) -> Result<ClassifierModel, ModelError> {
    let bytes = fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact: TreeArtifact = serde_json::from_slice(&bytes)?;
    ClassifierModel::from_artifact(artifact)
}

/// Like [`load`], but a failure only logs a warning and yields `None`.
///
/// The server starts either way; without a model, prediction requests are
/// refused until a valid artifact is supplied and the process restarted.
pub fn load_or_warn(path: &Path) -> Option<ClassifierModel> {
    match load(path) {
        Ok(model) => {
            tracing::info!(
                path = %path.display(),
                n_features = model.n_features(),
                classes = model.classes().len(),
                "model loaded"
            );
            Some(model)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "model not loaded; starting without prediction support"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const RAW: &str = r#"{
        "format_version": 1,
        "n_features": 4,
        "classes": [0, 1, 2],
        "nodes": [
            {"kind": "split", "feature": 2, "threshold": 2.45, "left": 1, "right": 2},
            {"kind": "leaf", "class": 0},
            {"kind": "split", "feature": 3, "threshold": 1.75, "left": 3, "right": 4},
            {"kind": "leaf", "class": 1},
            {"kind": "leaf", "class": 2}
        ]
    }"#;

    #[test]
    fn loads_model_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, RAW).unwrap();

        let model = load(&path).unwrap();
        assert_eq!(model.predict(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn unparseable_artifact_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "not json at all").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn load_or_warn_swallows_failures() {
        let dir = tempdir().unwrap();
        assert!(load_or_warn(&dir.path().join("absent.json")).is_none());

        let path = dir.path().join("model.json");
        fs::write(&path, RAW).unwrap();
        assert!(load_or_warn(&path).is_some());
    }
}
