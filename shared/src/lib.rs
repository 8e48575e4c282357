//! Shared types for the taxi billing workspace
//!
//! Wire types exchanged between `fare-server` and `fare-client`,
//! the bill record schema, and the unified error types.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;

pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use models::{BillRecord, FareQuote, FareRequest, SaveBillRequest, SavedBill};
