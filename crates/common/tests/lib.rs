// crates/common/tests/lib.rs
use arbor_common::{ErrorBody, LoginRequest, LoginResponse, MessageBody, PredictResponse};
use serde_json::json;

#[test]
fn test_login_request_missing_fields_default_to_empty() {
    let request: LoginRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request.username, "");
    assert_eq!(request.password, "");

    let request: LoginRequest = serde_json::from_str(r#"{"username": "admin"}"#).unwrap();
    assert_eq!(request.username, "admin");
    assert_eq!(request.password, "");
}

#[test]
fn test_login_request_ignores_unknown_fields() {
    let request: LoginRequest =
        serde_json::from_str(r#"{"username": "admin", "password": "pw", "remember_me": true}"#)
            .unwrap();
    assert_eq!(request.username, "admin");
    assert_eq!(request.password, "pw");
}

#[test]
fn test_response_key_names_are_pinned() {
    let login = serde_json::to_value(LoginResponse {
        access_token: "abc".to_string(),
    })
    .unwrap();
    assert_eq!(login, json!({"access_token": "abc"}));

    let predict = serde_json::to_value(PredictResponse { prediction: 2 }).unwrap();
    assert_eq!(predict, json!({"prediction": 2}));
}

#[test]
fn test_error_bodies_use_distinct_keys() {
    let unauthorized = serde_json::to_value(MessageBody {
        message: "Invalid credentials".to_string(),
    })
    .unwrap();
    assert_eq!(unauthorized, json!({"message": "Invalid credentials"}));

    let failure = serde_json::to_value(ErrorBody {
        error: "expected 4 features, got 2".to_string(),
    })
    .unwrap();
    assert_eq!(failure, json!({"error": "expected 4 features, got 2"}));
}
