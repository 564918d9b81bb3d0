use axum::{routing, Json, Router};
use portfolio_utils::portfolio_version;
use serde::Serialize;

pub fn router() -> Router<()> {
    Router::new().route("/health", routing::get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        http: true,
        version: portfolio_version(),
    })
}
