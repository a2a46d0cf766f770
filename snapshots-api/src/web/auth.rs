//! API key detection for snapshot requests
//!
//! Authentication never rejects a request: it only decides whether full
//! snapshots are included in the response.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::convert::Infallible;

use crate::web::AppState;

/// Extractor carrying whether the request presented a valid API key in
/// `Authorization: Bearer <key>`.
///
/// # Example
/// ```ignore
/// async fn my_handler(
///     Authenticated(authenticated): Authenticated,
///     State(state): State<AppState>,
/// ) -> impl IntoResponse {
///     // authenticated == false for missing, malformed or unknown keys
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticated(pub bool);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authenticated = bearer_token(&parts.headers)
            .is_some_and(|token| state.config.is_valid_api_key(token));

        Ok(Authenticated(authenticated))
    }
}

/// Token from a `Bearer` authorization header; the scheme is case-insensitive
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}
