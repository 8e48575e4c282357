//! What the status line shows after an action

use fare_client::{ClientError, ClientResult};
use shared::{FareQuote, SavedBill};

use crate::form::FormError;

/// Result of the last action, ready to render
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Quote(FareQuote),
    Saved(SavedBill),
    /// Rejected locally, no request sent
    Invalid(String),
    /// Error returned by the service (or an unreadable reply)
    Failed { message: String, on_save: bool },
    /// Service unreachable
    Offline(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Connection,
}

impl Outcome {
    pub fn from_quote(result: ClientResult<FareQuote>) -> Self {
        match result {
            Ok(quote) => Outcome::Quote(quote),
            Err(e) => Self::from_error(e, false),
        }
    }

    pub fn from_save(result: ClientResult<SavedBill>) -> Self {
        match result {
            Ok(saved) => Outcome::Saved(saved),
            Err(e) => Self::from_error(e, true),
        }
    }

    fn from_error(err: ClientError, on_save: bool) -> Self {
        match err {
            ClientError::Connection(detail) => Outcome::Offline(detail),
            other => Outcome::Failed {
                message: other.to_string(),
                on_save,
            },
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Outcome::Quote(_) | Outcome::Saved(_) => Severity::Success,
            Outcome::Invalid(_) | Outcome::Failed { .. } => Severity::Error,
            Outcome::Offline(_) => Severity::Connection,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Quote(quote) => format!(
                "Total Fare: ₹{:.2} | Distance: {} km",
                quote.total_fare, quote.distance
            ),
            Outcome::Saved(saved) => format!(
                "{} Date: {} | Total Fare: ₹{:.2}",
                saved.message, saved.date, saved.total_fare
            ),
            Outcome::Invalid(message) => message.clone(),
            Outcome::Failed { message, on_save } => {
                if *on_save {
                    format!("Error: {}", message)
                } else {
                    message.clone()
                }
            }
            Outcome::Offline(detail) => format!("Connection error: {}", detail),
        }
    }
}

impl From<FormError> for Outcome {
    fn from(err: FormError) -> Self {
        Outcome::Invalid(err.to_string())
    }
}
