//! Data models shared between the fare server and its clients

pub mod bill;
pub mod fare;

pub use bill::{BILL_COLUMNS, BillRecord, UNKNOWN_CUSTOMER};
pub use fare::{BILL_SAVED_MESSAGE, FareQuote, FareRequest, SaveBillRequest, SavedBill};
