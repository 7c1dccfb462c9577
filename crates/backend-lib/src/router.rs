// ============================
// crates/backend-lib/src/router.rs
// ============================
//! Route table and middleware wiring.
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{auth::require_auth, handlers, AppState};

/// Build the application router.
///
/// `/` and `/login` are public; `/predict` sits behind the bearer-token
/// guard.
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(handlers::index))
        .route("/login", post(handlers::login));

    let protected = Router::new()
        .route("/predict", post(handlers::predict))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthSettings, ModelSettings, ServerSettings, Settings};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        let settings = Settings {
            server: ServerSettings::default(),
            model: ModelSettings::default(),
            auth: AuthSettings {
                username: "admin".to_string(),
                password: "password123".to_string(),
                secret: "unit-test-secret".to_string(),
                token_ttl_secs: 21_600,
            },
        };
        create_router(AppState::new(settings, None))
    }

    #[tokio::test]
    async fn root_is_public() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn predict_is_guarded() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
