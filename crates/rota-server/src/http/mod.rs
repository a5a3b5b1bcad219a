//! HTTP handlers for the task API.
//!
//! Handlers stay thin: parameter extraction, one repository or engine call,
//! response encoding. All policy (date normalization, rule validation,
//! completion behavior) lives in `rota-core`.

pub mod done;
pub mod next_date;
pub mod task;
pub mod tasks;

use axum::{http::StatusCode, Json};
use rota_core::error::CoreError;
use serde::Serialize;

/// JSON error body: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ApiError>) {
    (
        status,
        Json(ApiError {
            error: message.into(),
        }),
    )
}

/// Map a core error onto an HTTP status with a JSON error body.
pub fn core_error_response(err: CoreError) -> (StatusCode, Json<ApiError>) {
    let status = match &err {
        CoreError::NotFound(_) => StatusCode::NOT_FOUND,
        CoreError::InvalidInput(_) | CoreError::Recurrence(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, err.to_string())
}

/// Parse the `id` query parameter shared by the single-task endpoints.
pub fn parse_task_id(raw: &str) -> Result<i64, (StatusCode, Json<ApiError>)> {
    if raw.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "task id is required",
        ));
    }
    raw.parse().map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("invalid task id: {raw:?}"),
        )
    })
}
