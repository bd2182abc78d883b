//! Error bodies returned by the Salary Engine API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// JSON body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `INVALID_INPUT`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// The offending field, file or period, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Id of the request in the server log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl ApiError {
    /// Creates an error body without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            correlation_id: None,
        }
    }

    /// Creates an error body with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// A required request field was absent.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// The request body could not be decoded.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Tags the body with the request's correlation id.
    pub fn for_request(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }
}

/// An [`ApiError`] paired with its HTTP status.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// A 500 response.
    pub fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            // Caller mistakes
            EngineError::InvalidInput { field, .. } => {
                Self::bad_request(ApiError::with_details("INVALID_INPUT", message, field))
            }
            EngineError::PolicyNotFound { date } => Self::bad_request(ApiError::with_details(
                "POLICY_NOT_FOUND",
                message,
                date.format("%Y-%m").to_string(),
            )),
            // Deployment mistakes
            EngineError::ConfigNotFound { path } | EngineError::ConfigParseError { path, .. } => {
                Self::internal(ApiError::with_details("CONFIG_ERROR", message, path))
            }
            EngineError::InvalidConfig { field, .. } => {
                Self::internal(ApiError::with_details("CONFIG_ERROR", message, field))
            }
        }
    }
}
