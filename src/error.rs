//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::error_body;

/// Client-facing message for a failed insert; the cause only goes to the log.
pub const CREATION_FAILED_MESSAGE: &str = "Server error please check log for detail.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("{0}")]
    Db(#[from] sqlx::Error),
    #[error("create failed: {0}")]
    Creation(#[source] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Db(_) | AppError::Creation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message written into the `error` field of the response body.
    /// Store errors pass through verbatim; creation failures do not.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Creation(_) => CREATION_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Creation(e) => tracing::error!(error = %e, "article insert failed"),
            AppError::Db(e) => tracing::error!(error = %e, "store error"),
            _ => tracing::debug!(status = %status, error = %self, "request rejected"),
        }
        (status, Json(error_body(&self.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Db(sqlx::Error::PoolTimedOut).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::Creation(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn oversized_body_maps_to_413() {
        let err = AppError::PayloadTooLarge;
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.client_message(), "Request body too large");
    }

    #[test]
    fn store_error_message_passes_through() {
        let err = AppError::Db(sqlx::Error::PoolTimedOut);
        assert_eq!(err.client_message(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[test]
    fn creation_failure_hides_cause() {
        let err = AppError::Creation(sqlx::Error::PoolClosed);
        assert_eq!(err.client_message(), CREATION_FAILED_MESSAGE);
    }

    #[test]
    fn not_found_message_is_bare() {
        let err = AppError::NotFound("Article not found".into());
        assert_eq!(err.client_message(), "Article not found");
    }
}
