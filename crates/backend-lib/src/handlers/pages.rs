// ============================
// crates/backend-lib/src/handlers/pages.rs
// ============================
//! Static pages.
use axum::response::Html;

/// `GET /` — a small form for exercising login and predict by hand.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
