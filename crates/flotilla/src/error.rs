//! Maps domain errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use flotilla_board::LayoutError;
use flotilla_registry::RegistryError;
use thiserror::Error;

/// Anything a handler can fail with.
///
/// Handlers return this and let `IntoResponse` pick the status code, so
/// the error-to-status table lives in exactly one place.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A request body that never made it far enough to become a grid.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Registry(err) => match err {
                RegistryError::CapacityExceeded(_) => StatusCode::SERVICE_UNAVAILABLE,
                RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
                RegistryError::Unauthorized => StatusCode::UNAUTHORIZED,
                RegistryError::IllegalPhase(_)
                | RegistryError::AlreadyPlaced
                | RegistryError::Rejected(_) => StatusCode::BAD_REQUEST,
                RegistryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Layout(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx bodies carry the human-readable reason so a player can
        // see exactly which rule their request broke. 5xx bodies stay
        // generic; the detail goes to the log instead.
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            return (status, "internal server error").into_response();
        }
        (status, self.to_string()).into_response()
    }
}
