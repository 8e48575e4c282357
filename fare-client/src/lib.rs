//! Fare Client - typed HTTP client for the fare service
//!
//! Two operations, `calculate` and `save_bill`, each with its own timeout.
//! Errors separate an unreachable service from an error returned by it.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{FareApi, FareClient};

// Re-export shared types for convenience
pub use shared::{FareQuote, FareRequest, SaveBillRequest, SavedBill};
