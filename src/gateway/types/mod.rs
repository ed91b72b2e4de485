//! Gateway types module
//!
//! ## Input Types
//! - [`StrictDecimal`]: Format-validated decimal for API input
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`]: Error response with HTTP status
//!
//! ## Submodules
//! - [`money`]: Amount input type
//! - [`response`]: Response types and error codes

pub mod money;
pub mod response;

// Re-export commonly used types at module root
pub use money::StrictDecimal;
pub use response::{ApiError, ApiResponse, ApiResult, MessageResponse, error_codes, ok};
