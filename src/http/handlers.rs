//! Route handlers

use std::any::Any;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::Response,
    BoxError,
};

use crate::domain::notification::Severity;

use super::response::{write_json, ApiError, JsonResponse, MessageBody};
use super::ApiState;

/// `GET /`
pub async fn health(State(state): State<ApiState>) -> JsonResponse<MessageBody> {
    JsonResponse(
        StatusCode::OK,
        MessageBody::new(format!("{} is running", state.app_name)),
    )
}

/// `POST /notification`
pub async fn send_notification(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<JsonResponse<MessageBody>, ApiError> {
    dispatch(&state, Severity::Notify, body).await
}

/// `POST /alert`
pub async fn send_alert(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<JsonResponse<MessageBody>, ApiError> {
    dispatch(&state, Severity::Alert, body).await
}

async fn dispatch(
    state: &ApiState,
    severity: Severity,
    body: Result<Bytes, BytesRejection>,
) -> Result<JsonResponse<MessageBody>, ApiError> {
    let body = body.map_err(|rejection| {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    })?;

    let output = state.dispatcher.dispatch_raw(severity, &body).await?;

    Ok(JsonResponse(StatusCode::OK, MessageBody::new(output.message())))
}

/// Unknown path
pub async fn not_found() -> ApiError {
    ApiError::NotFound("resource not found".to_string())
}

/// Known path, wrong method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("method not allowed".to_string())
}

/// Errors raised by the middleware stack (timeouts)
pub async fn middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout("request timed out".to_string())
    } else {
        ApiError::InternalServerError(format!("unhandled internal error: {}", err))
    }
}

/// Converts a handler panic into a 500 so the process keeps serving
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "handler panicked");

    write_json(
        StatusCode::INTERNAL_SERVER_ERROR,
        MessageBody::new("internal server error"),
    )
}
