//! Taxi billing console
//!
//! A terminal form for the fare service: enter the trip, calculate the
//! fare, and record the bill.

pub mod app;
pub mod form;
pub mod outcome;
pub mod ui;

pub use app::{Action, App, Command};
pub use form::{Field, FormError, FormState};
pub use outcome::{Outcome, Severity};
