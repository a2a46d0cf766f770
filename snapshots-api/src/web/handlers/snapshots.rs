// Snapshot lookup endpoint

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use tracing::{debug, error};

use super::common::{error_response, HandlerResult, NetworkQuery};
use crate::snapshot::Network;
use crate::web::{AppState, Authenticated};

/// Latest and previous snapshots for `?network=`; full snapshots only with a valid API key
pub async fn get_snapshots(
    State(state): State<AppState>,
    Authenticated(authenticated): Authenticated,
    Query(query): Query<NetworkQuery>,
) -> HandlerResult<impl IntoResponse> {
    let raw_network = match query.network.as_deref() {
        Some(network) if !network.is_empty() => network,
        _ => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "network parameter is required",
            ))
        }
    };

    let network = match raw_network.parse::<Network>() {
        Ok(network) => network,
        Err(e) => return Err(error_response(StatusCode::BAD_REQUEST, e.to_string())),
    };

    debug!(
        "Snapshot request for {} (authenticated: {})",
        network, authenticated
    );

    let snapshots = state
        .snapshot_service
        .get_snapshots_with_auth(network, authenticated)
        .await
        .map_err(|e| {
            error!("Error fetching snapshots for network {}: {}", network, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to fetch snapshots")
        })?;

    // The body depends on the API key, so shared caches must not reuse an
    // authenticated response and must key anonymous ones on Authorization
    let cache_control = format!(
        "{}, max-age={}",
        if authenticated { "private" } else { "public" },
        state.snapshot_service.cache_ttl().as_secs()
    );

    Ok((
        [
            (header::CACHE_CONTROL, cache_control),
            (header::VARY, header::AUTHORIZATION.as_str().to_string()),
        ],
        Json(snapshots),
    ))
}
