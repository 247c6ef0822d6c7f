use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::dispatch::Operation;
use crate::store::StoreError;

/// Custom error type for the items endpoint
///
/// Every variant is returned to the caller as a status code with the
/// error message as a plain-text body. Nothing is retried.
#[derive(Debug)]
pub enum ApiError {
    /// Request payload could not be parsed or names an empty id
    BadRequest(String),
    /// Store call failed; the status depends on the operation
    BackendFailure {
        status: StatusCode,
        source: StoreError,
    },
    /// HTTP method with no matching operation
    NotAllowed(Method),
}

impl ApiError {
    pub fn backend(status: StatusCode, source: StoreError) -> Self {
        ApiError::BackendFailure { status, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BackendFailure { status, .. } => *status,
            ApiError::NotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::BadRequest(message) => {
                tracing::warn!("Rejected request: {}", message);
                (status, message).into_response()
            }
            ApiError::BackendFailure { source, .. } => {
                tracing::error!("Item store call failed: {}", source);
                (status, source.to_string()).into_response()
            }
            ApiError::NotAllowed(method) => {
                tracing::warn!("Method not allowed: {}", method);
                (status, [(header::ALLOW, Operation::allowed_methods())]).into_response()
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
