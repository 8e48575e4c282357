//! Unified error system for the billing service
//!
//! - [`ErrorCode`]: numeric error codes shared by server and client
//! - [`AppError`]: error type carried through the service boundary
//! - [`ErrorBody`]: the `{"error": ..., "code": ...}` response body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::validation("End meter reading cannot be less than start reading");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, ErrorCode::ValidationFailed);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
