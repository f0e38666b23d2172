use axum::Json;
use serde::Serialize;

/// Body for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// `GET /health`: always healthy, with no dependency on the upstream or on
/// credential presence. Intended for container orchestration probes.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
