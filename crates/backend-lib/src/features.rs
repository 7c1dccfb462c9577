// ============================
// crates/backend-lib/src/features.rs
// ============================
//! Turning a prediction payload into a feature vector.
//!
//! The payload is a flat JSON object; its values, taken in document order,
//! form the feature vector. Keys are labels only and never interpreted.
use serde_json::Value;

use crate::error::AppError;

/// Extract the feature vector from a request payload.
pub fn feature_vector(payload: &Value) -> Result<Vec<f64>, AppError> {
    let map = payload.as_object().ok_or_else(|| {
        AppError::Prediction("payload must be a JSON object of numeric fields".to_string())
    })?;

    map.iter()
        .map(|(key, value)| {
            value
                .as_f64()
                .ok_or_else(|| AppError::Prediction(format!("field '{key}' is not a number")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_are_taken_in_document_order() {
        // Keys deliberately out of alphabetical order.
        let payload: Value =
            serde_json::from_str(r#"{"petal_width": 4, "sepal_length": 1, "area": 9}"#).unwrap();
        assert_eq!(feature_vector(&payload).unwrap(), vec![4.0, 1.0, 9.0]);
    }

    #[test]
    fn integers_and_floats_both_pass() {
        let payload = json!({"a": 1, "b": 2.5, "c": -3});
        assert_eq!(feature_vector(&payload).unwrap(), vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn empty_object_yields_empty_vector() {
        let payload = json!({});
        assert_eq!(feature_vector(&payload).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn non_numeric_field_is_rejected_by_name() {
        let payload = json!({"a": 1.0, "b": "two"});
        let err = feature_vector(&payload).unwrap_err();
        assert_eq!(err.to_string(), "field 'b' is not a number");

        assert!(feature_vector(&json!({"a": true})).is_err());
        assert!(feature_vector(&json!({"a": null})).is_err());
        assert!(feature_vector(&json!({"a": [1.0]})).is_err());
        assert!(feature_vector(&json!({"a": {"nested": 1}})).is_err());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(feature_vector(&json!([1.0, 2.0])).is_err());
        assert!(feature_vector(&json!("text")).is_err());
        assert!(feature_vector(&json!(42)).is_err());
    }
}
