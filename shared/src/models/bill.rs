//! Bill record (the only persisted entity)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fare::{FareQuote, FareRequest};

/// Customer name stored when none was given
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// Column headers of the record store, in order
pub const BILL_COLUMNS: [&str; 11] = [
    "Date",
    "Customer Name",
    "Start Reading",
    "End Reading",
    "Distance",
    "Rate per km",
    "Toll Charges",
    "State Tax",
    "Meal Charges",
    "Night Stay",
    "Total Fare",
];

/// One saved bill
///
/// Field renames match [`BILL_COLUMNS`] so the record maps 1:1 onto a
/// spreadsheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Start Reading")]
    pub start_reading: f64,
    #[serde(rename = "End Reading")]
    pub end_reading: f64,
    #[serde(rename = "Distance")]
    pub distance: f64,
    #[serde(rename = "Rate per km")]
    pub rate_per_km: f64,
    #[serde(rename = "Toll Charges")]
    pub toll_charges: f64,
    #[serde(rename = "State Tax")]
    pub state_tax: f64,
    #[serde(rename = "Meal Charges")]
    pub meal_charges: f64,
    #[serde(rename = "Night Stay")]
    pub night_stay: f64,
    #[serde(rename = "Total Fare")]
    pub total_fare: f64,
}

impl BillRecord {
    /// Build a record from the trip inputs and the derived quote
    pub fn new(
        date: NaiveDate,
        customer_name: impl Into<String>,
        fare: &FareRequest,
        quote: &FareQuote,
    ) -> Self {
        Self {
            date,
            customer_name: customer_name.into(),
            start_reading: fare.start_reading,
            end_reading: fare.end_reading,
            distance: quote.distance,
            rate_per_km: fare.rate_per_km,
            toll_charges: fare.toll,
            state_tax: fare.state_tax,
            meal_charges: fare.meal,
            night_stay: fare.night_stay,
            total_fare: quote.total_fare,
        }
    }
}
