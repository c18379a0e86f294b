//! JSON response envelope and API error mapping

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::DispatchError;

/// Body of every response: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A status code plus a serializable body, written as `application/json`.
///
/// If the body fails to serialize the error is logged and the response is
/// sent with the chosen status and an empty body.
pub struct JsonResponse<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let JsonResponse(status, body) = self;

        let mut response = match serde_json::to_vec(&body) {
            Ok(bytes) => Response::new(Body::from(bytes)),
            Err(e) => {
                tracing::error!(error = %e, "Error writing JSON response");
                Response::new(Body::empty())
            }
        };

        *response.status_mut() = status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}

/// Write `body` as JSON with the given status
pub fn write_json<T: Serialize>(status: StatusCode, body: T) -> Response {
    JsonResponse(status, body).into_response()
}

/// A custom error type for the API that can be converted into an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or incomplete request.
    BadRequest(String),

    /// No route matches the path.
    NotFound(String),

    /// Route exists but not for this method.
    MethodNotAllowed(String),

    /// The notifier did not finish within the configured timeout.
    Timeout(String),

    /// Body rejected before reaching a handler (size limit, read failure).
    Rejected(StatusCode, String),

    /// The notifier failed, or the handler crashed.
    InternalServerError(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Rejected(status, _) => *status,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the caller
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::MethodNotAllowed(message)
            | ApiError::Timeout(message)
            | ApiError::Rejected(_, message)
            | ApiError::InternalServerError(message) => message,
        }
    }
}

/// Maps dispatch failures onto 400 (caller's fault) or 500 (notifier's fault).
impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::InvalidRequest(e) => ApiError::BadRequest(e.to_string()),
            e @ DispatchError::Backend { .. } => ApiError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        write_json(self.status(), MessageBody::new(self.message()))
    }
}
