/// API Error types
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use contactflow_core::ContactflowError;
use contactflow_core::constants::ERROR_PREFIX;
use tracing::error;

/// API Error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Contact(#[from] ContactflowError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Contact(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the error with its kind, status and relay code
    pub fn log(&self) {
        match self {
            ApiError::Contact(err) => error!(
                kind = err.kind(),
                status = err.status_code(),
                code = err.transport_code().unwrap_or("-"),
                error = %err,
                source = ?std::error::Error::source(err).map(|s| s.to_string()),
                "Request failed"
            ),
            ApiError::Internal(msg) => error!(status = 500, error = %msg, "Internal error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}{}", ERROR_PREFIX, self),
        )
            .into_response()
    }
}
