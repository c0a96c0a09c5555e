use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::core::error::AppError;

/// Uniform body returned by every endpoint. `data` and `error` are never
/// both present.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn healthy(official_email: &str) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: None,
            error: None,
        }
    }

    pub fn success(official_email: &str, data: Value) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(official_email: &str, error: String) -> Self {
        Self {
            is_success: false,
            official_email: official_email.to_string(),
            data: None,
            error: Some(error),
        }
    }
}

/// Pairs an envelope with its HTTP status.
pub struct EnvelopeResponse {
    status: StatusCode,
    body: ResponseEnvelope,
}

impl EnvelopeResponse {
    pub fn ok(body: ResponseEnvelope) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn from_error(official_email: &str, error: &AppError) -> Self {
        Self {
            status: error.status_code(),
            body: ResponseEnvelope::failure(official_email, error.public_message()),
        }
    }
}

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
