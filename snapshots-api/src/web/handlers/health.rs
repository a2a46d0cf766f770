// Liveness, readiness and network listing endpoints

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::constants::service;
use crate::snapshot::Network;
use crate::web::AppState;

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": service::NAME
    }))
}

/// Readiness probe: the bucket must be reachable (or the cache fresh)
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.snapshot_service.get_snapshots(Network::Mainnet).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "service": service::NAME
            })),
        ),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not ready",
                    "error": "failed to connect to GCP bucket"
                })),
            )
        }
    }
}

/// Supported networks, in display order
pub async fn list_networks(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "networks": state.snapshot_service.list_networks()
    }))
}
