//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Order Service                      │
//! │                                                                         │
//! │  Client                        Rust Backend                             │
//! │  ──────                        ────────────                             │
//! │                                                                         │
//! │  POST /order {"size": "huge"}                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON? ──── JsonRejection ────────────────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Bad option? ── OrderError::InvalidSize ──────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── 400 {"code": "INVALID_SIZE", "message": "Invalid size: 'huge'"}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cinos_core::OrderError;
use serde::{Deserialize, Serialize};

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_TOPPING",
///   "message": "Invalid topping: 'gravy'"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidSize,
    InvalidBase,
    InvalidFlavor,
    InvalidFoodType,
    InvalidTopping,
    InvalidMixIn,
    InvalidIndex,
    MissingRequiredField,

    /// Body or path could not be parsed
    MalformedRequest,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::MalformedRequest, message)
    }

    /// Every error the service reports is a client error.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Converts engine errors to API errors.
impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let code = match &err {
            OrderError::InvalidSize(_) => ErrorCode::InvalidSize,
            OrderError::InvalidBase(_) => ErrorCode::InvalidBase,
            OrderError::InvalidFlavor(_) => ErrorCode::InvalidFlavor,
            OrderError::InvalidFoodType(_) => ErrorCode::InvalidFoodType,
            OrderError::InvalidTopping(_) => ErrorCode::InvalidTopping,
            OrderError::InvalidMixIn(_) => ErrorCode::InvalidMixIn,
            OrderError::InvalidIndex { .. } => ErrorCode::InvalidIndex,
            OrderError::MissingRequiredField { .. } => ErrorCode::MissingRequiredField,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::malformed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(code = ?self.code, message = %self.message, "Request rejected");
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_mapping() {
        let err = ApiError::from(OrderError::InvalidTopping("gravy".to_string()));
        assert_eq!(err.code, ErrorCode::InvalidTopping);
        assert_eq!(err.message, "Invalid topping: 'gravy'");

        let err = ApiError::from(OrderError::InvalidIndex { index: -1, len: 0 });
        assert_eq!(err.code, ErrorCode::InvalidIndex);

        let err = ApiError::from(OrderError::MissingRequiredField { field: "size" });
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.message, "size is required");
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::from(OrderError::InvalidMixIn("sprinkles".to_string()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_MIX_IN");
        assert_eq!(json["message"], "Invalid mix in: 'sprinkles'");

        let json = serde_json::to_value(ApiError::malformed("bad")).unwrap();
        assert_eq!(json["code"], "MALFORMED_REQUEST");
    }

    #[test]
    fn test_into_response_is_bad_request() {
        let response = ApiError::from(OrderError::InvalidSize("huge".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
