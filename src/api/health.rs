//! Liveness and readiness probes

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// "healthy", "ready" or "degraded"
    pub status: String,
    /// Server package version
    pub version: String,
}

impl HealthResponse {
    fn with_status(status: &str) -> Json<Self> {
        Json(Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

/// The process is up and serving requests
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    HealthResponse::with_status("healthy")
}

/// The book store answers a one-row page
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Store readiness", body = HealthResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    if state.services.books.list(1, 1).await.is_success {
        HealthResponse::with_status("ready")
    } else {
        HealthResponse::with_status("degraded")
    }
}
