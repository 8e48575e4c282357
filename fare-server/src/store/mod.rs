//! Record store - append-only bill ledger
//!
//! # Implementations
//!
//! | Type | Backing | Usage |
//! |------|---------|-------|
//! | [`CsvBillStore`] | CSV file, full rewrite per append | production |
//! | [`MemoryBillStore`] | `Vec` in memory | tests, embedding |
//!
//! Callers only rely on the contract: after `init()` the store exists, and
//! each `append()` adds exactly one record visible to `load_all()`.

mod csv_file;
mod memory;

pub use csv_file::CsvBillStore;
pub use memory::MemoryBillStore;

use shared::{AppError, BillRecord};
use thiserror::Error;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record store format error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Record store header mismatch: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::storage(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Append-only bill ledger
pub trait BillStore: Send + Sync + std::fmt::Debug {
    /// Create the store if missing. Safe to call any number of times.
    ///
    /// Returns `true` when the store was created by this call.
    fn init(&self) -> StoreResult<bool>;

    /// Append one record
    fn append(&self, record: &BillRecord) -> StoreResult<()>;

    /// Load every record, in insertion order
    fn load_all(&self) -> StoreResult<Vec<BillRecord>>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}
