// Common types and utilities for API handlers

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

// Helper type for handler results
pub type HandlerResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// Query parameters
#[derive(Debug, Deserialize)]
pub struct NetworkQuery {
    pub network: Option<String>,
}
