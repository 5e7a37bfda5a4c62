//! API error types and responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use rights_core::ModelError;

use crate::engine::EngineError;
use crate::ledger::LedgerError;

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(ModelError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// API error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                err.to_string(),
                validation_details(err),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone(), None),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Name the offending field in the response details
fn validation_details(err: &ModelError) -> Option<serde_json::Value> {
    match err {
        ModelError::MissingField(field)
        | ModelError::MissingParameter(field)
        | ModelError::MalformedKey(field)
        | ModelError::InvalidDate { field, .. } => {
            Some(serde_json::json!({ "field": field }))
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Model(e) => ApiError::Validation(e),
            EngineError::Unauthorized { id } => {
                ApiError::Forbidden(format!("Caller does not hold right `{}`", id))
            }
            EngineError::Ledger(e) => e.into(),
            EngineError::Serialization(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(id) => ApiError::NotFound(format!("Record not found: {}", id)),
            LedgerError::TypeMismatch { id, expected } => {
                ApiError::BadRequest(format!("Record `{}` is not a {}", id, expected))
            }
            LedgerError::HolderMismatch(id) => {
                ApiError::Forbidden(format!("Caller does not hold right `{}`", id))
            }
            LedgerError::Backend(msg) => ApiError::Internal(format!("Ledger error: {}", msg)),
        }
    }
}
