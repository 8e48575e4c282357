//! Billing service - fare computation and bill persistence
//!
//! Holds the record store handle and the save-validation policy. Stateless
//! between calls; every operation is a single request/response.

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use shared::models::BILL_SAVED_MESSAGE;
use shared::{AppError, AppResult, BillRecord, FareQuote, FareRequest, SaveBillRequest, SavedBill};

use crate::pricing::fare;
use crate::store::BillStore;

#[derive(Debug, Clone)]
pub struct BillingService {
    store: Arc<dyn BillStore>,
    /// Reject reversed readings on save as well as on compute
    require_valid_readings: bool,
}

impl BillingService {
    pub fn new(store: Arc<dyn BillStore>) -> Self {
        Self {
            store,
            require_valid_readings: false,
        }
    }

    pub fn with_reading_validation(mut self, enabled: bool) -> Self {
        self.require_valid_readings = enabled;
        self
    }

    /// ComputeFare - pure, no side effects
    pub fn compute_fare(&self, request: &FareRequest) -> AppResult<FareQuote> {
        Ok(fare::quote(request)?)
    }

    /// SaveBill - stamps today's local date and appends one record
    pub async fn save_bill(&self, request: SaveBillRequest) -> AppResult<SavedBill> {
        self.save_bill_on(request, Local::now().date_naive()).await
    }

    /// SaveBill with an explicit date
    pub async fn save_bill_on(
        &self,
        request: SaveBillRequest,
        date: NaiveDate,
    ) -> AppResult<SavedBill> {
        let quote = if self.require_valid_readings {
            fare::quote(&request.fare)?
        } else {
            fare::derive(&request.fare)?
        };

        let record = BillRecord::new(
            date,
            request.customer_name_or_default(),
            &request.fare,
            &quote,
        );

        let store = self.store.clone();
        let row = record.clone();
        tokio::task::spawn_blocking(move || store.append(&row))
            .await
            .map_err(|e| AppError::internal(format!("Record store task failed: {}", e)))??;

        tracing::info!(
            customer = %record.customer_name,
            date = %record.date,
            total_fare = record.total_fare,
            "Bill saved"
        );

        Ok(SavedBill {
            message: BILL_SAVED_MESSAGE.to_string(),
            date,
            total_fare: quote.total_fare,
        })
    }

    /// Number of stored bills (full-table load)
    pub async fn bill_count(&self) -> AppResult<usize> {
        let store = self.store.clone();
        let records = tokio::task::spawn_blocking(move || store.load_all())
            .await
            .map_err(|e| AppError::internal(format!("Record store task failed: {}", e)))??;
        Ok(records.len())
    }
}
