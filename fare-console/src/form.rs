//! Bill entry form
//!
//! Eight text inputs, one per bill field. Amounts are parsed locally before
//! any request leaves the console: blank means 0, anything else must be a
//! non-negative number.

use crossterm::event::Event;
use shared::util::parse_amount;
use shared::{FareRequest, SaveBillRequest};
use thiserror::Error;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CustomerName,
    StartReading,
    EndReading,
    RatePerKm,
    Toll,
    StateTax,
    Meal,
    NightStay,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::CustomerName,
        Field::StartReading,
        Field::EndReading,
        Field::RatePerKm,
        Field::Toll,
        Field::StateTax,
        Field::Meal,
        Field::NightStay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::CustomerName => "Customer Name",
            Field::StartReading => "Start Meter Reading",
            Field::EndReading => "End Meter Reading",
            Field::RatePerKm => "Rate per km",
            Field::Toll => "Toll Charges",
            Field::StateTax => "State Charges",
            Field::Meal => "Meal Charges",
            Field::NightStay => "Night Stay Charges",
        }
    }

    pub fn is_amount(self) -> bool {
        self != Field::CustomerName
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
}

#[derive(Debug, Default)]
pub struct FormState {
    inputs: [Input; 8],
    focus: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    pub fn input(&self, field: Field) -> &Input {
        &self.inputs[index_of(field)]
    }

    pub fn value(&self, field: Field) -> &str {
        self.input(field).value()
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let input = &mut self.inputs[index_of(field)];
        *input = std::mem::take(input).with_value(value.into());
    }

    /// Forward a terminal event to the focused input
    pub fn handle_event(&mut self, event: &Event) {
        self.inputs[self.focus].handle_event(event);
    }

    fn amount(&self, field: Field) -> Result<f64, FormError> {
        let text = self.value(field);
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        let value = parse_amount(text).map_err(|_| FormError::NotANumber {
            field: field.label(),
            value: text.to_string(),
        })?;
        if value < 0.0 {
            return Err(FormError::Negative {
                field: field.label(),
            });
        }
        Ok(value)
    }

    pub fn fare_request(&self) -> Result<FareRequest, FormError> {
        Ok(FareRequest {
            start_reading: self.amount(Field::StartReading)?,
            end_reading: self.amount(Field::EndReading)?,
            rate_per_km: self.amount(Field::RatePerKm)?,
            toll: self.amount(Field::Toll)?,
            state_tax: self.amount(Field::StateTax)?,
            meal: self.amount(Field::Meal)?,
            night_stay: self.amount(Field::NightStay)?,
        })
    }

    /// Blank names are left out so the service applies its default
    pub fn save_request(&self) -> Result<SaveBillRequest, FormError> {
        let fare = self.fare_request()?;
        let name = self.value(Field::CustomerName).trim();
        Ok(SaveBillRequest {
            customer_name: (!name.is_empty()).then(|| name.to_string()),
            fare,
        })
    }
}

/// Variants are declared in display order
fn index_of(field: Field) -> usize {
    field as usize
}
