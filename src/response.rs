//! JSON response helpers. Payloads are written bare, without an envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// `{"error": "<message>"}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"result": "success"}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ResultBody {
    pub result: String,
}

pub fn json_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn json_created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn error_body(message: &str) -> ErrorBody {
    ErrorBody {
        error: message.to_string(),
    }
}

pub fn success_result() -> ResultBody {
    ResultBody {
        result: "success".into(),
    }
}
