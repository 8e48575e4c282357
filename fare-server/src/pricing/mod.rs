//! Fare pricing
//!
//! Distance-times-rate plus flat surcharges, computed with rust_decimal.

pub mod fare;

pub use fare::{FareError, derive, quote, validate_readings};
