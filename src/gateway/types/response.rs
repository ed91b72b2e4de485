//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError`: Error response carrying an HTTP status
//! - `error_codes`: Standard error code constants

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::transfer::TransferError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Plain message body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Callback handled successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Response
// ============================================================================

/// Handler error: rendered as `ApiResponse<()>` with the given status
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            msg,
        )
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::INVALID_ACCOUNT, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            msg,
        )
    }

    /// Wrap as the `Err` side of a handler result
    pub fn into_err<T>(self) -> Result<T, ApiError> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.code, self.msg))).into_response()
    }
}

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        let status = StatusCode::from_u16(e.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let code = match &e {
            TransferError::InvalidAmount => error_codes::INVALID_AMOUNT,
            TransferError::InvalidAccountNumber => error_codes::INVALID_PARAMETER,
            TransferError::SameAccount => error_codes::SAME_ACCOUNT,
            TransferError::ValidationFailure(_) => error_codes::VALIDATION_FAILED,
            TransferError::DeadlineExceeded => error_codes::DEADLINE_EXCEEDED,
            TransferError::SettlementFailure(_) => error_codes::SETTLEMENT_FAILED,
            TransferError::AccountRecordMissing(_)
            | TransferError::DuplicateTransaction(_)
            | TransferError::PersistenceFailure(_) => error_codes::PERSISTENCE_FAILED,
            TransferError::CallbackUnknownTransaction(_)
            | TransferError::CallbackInvalidStatus(_) => error_codes::CALLBACK_REJECTED,
            TransferError::TransferNotFound(_) => error_codes::TRANSFER_NOT_FOUND,
        };

        Self::new(status, code, e.public_message())
    }
}

/// Result type for handlers that answer with the `ApiResponse` wrapper
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK with `data`
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INVALID_AMOUNT: i32 = 1002;
    pub const SAME_ACCOUNT: i32 = 1003;

    // Account errors (2xxx)
    pub const INVALID_ACCOUNT: i32 = 2001;

    // Resource errors (4xxx)
    pub const TRANSFER_NOT_FOUND: i32 = 4001;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
    pub const VALIDATION_FAILED: i32 = 5002;
    pub const DEADLINE_EXCEEDED: i32 = 5003;
    pub const SETTLEMENT_FAILED: i32 = 5004;
    pub const PERSISTENCE_FAILED: i32 = 5005;
    pub const CALLBACK_REJECTED: i32 = 5006;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ApiResponse::<()>::error(1001, "bad")).unwrap();
        assert_eq!(body, serde_json::json!({"code": 1001, "msg": "bad"}));
    }

    #[test]
    fn test_transfer_error_mapping() {
        let e = ApiError::from(TransferError::SameAccount);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.code, error_codes::SAME_ACCOUNT);

        let e = ApiError::from(TransferError::source_invalid());
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.code, error_codes::VALIDATION_FAILED);
        assert_eq!(e.msg, "source account invalid");

        let e = ApiError::from(TransferError::TransferNotFound("x".into()));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_errors_carry_fixed_messages() {
        let e = ApiError::from(TransferError::PersistenceFailure(
            "error returned from database: relation \"transfers\" does not exist".into(),
        ));
        assert_eq!(e.code, error_codes::PERSISTENCE_FAILED);
        assert_eq!(e.msg, "Transfer could not be recorded");

        let e = ApiError::from(TransferError::DuplicateTransaction("EXT-9".into()));
        assert!(!e.msg.contains("EXT-9"));
    }
}
