//! Fare request/response payloads
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | POST /calculate | [`FareRequest`] | [`FareQuote`] |
//! | POST /save | [`SaveBillRequest`] | [`SavedBill`] |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bill::UNKNOWN_CUSTOMER;
use crate::util::amount;

/// Confirmation text returned by a successful save
pub const BILL_SAVED_MESSAGE: &str = "Bill saved successfully!";

/// Meter readings and surcharges for one trip
///
/// Every field accepts a number or a numeric string; missing fields are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FareRequest {
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub start_reading: f64,
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub end_reading: f64,
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub rate_per_km: f64,
    /// Toll charges
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub toll: f64,
    /// State tax / state entry charges
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub state_tax: f64,
    /// Meal charges
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub meal: f64,
    /// Night stay charges
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub night_stay: f64,
}

/// Save payload: the trip plus the customer it is billed to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveBillRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(flatten)]
    pub fare: FareRequest,
}

impl SaveBillRequest {
    pub fn new(customer_name: impl Into<String>, fare: FareRequest) -> Self {
        Self {
            customer_name: Some(customer_name.into()),
            fare,
        }
    }

    /// Customer name as stored: trimmed, or "Unknown" when absent/blank
    pub fn customer_name_or_default(&self) -> String {
        self.customer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_CUSTOMER)
            .to_string()
    }
}

/// Computed fare
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    /// Total fare, rounded to 2 decimal places
    pub total_fare: f64,
    /// Distance travelled (end - start), rounded to 2 decimal places
    pub distance: f64,
}

/// Save confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBill {
    pub message: String,
    /// Date stamped on the stored record (YYYY-MM-DD)
    pub date: NaiveDate,
    #[serde(default)]
    pub total_fare: f64,
}
