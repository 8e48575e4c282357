//! Fare Calculator
//!
//! total = (end - start) * rate_per_km + toll + state_tax + meal + night_stay
//!
//! Uses rust_decimal for the arithmetic, inputs and outputs stay f64.

use rust_decimal::prelude::*;
use shared::models::{FareQuote, FareRequest};
use shared::AppError;
use thiserror::Error;

/// Rounding for monetary values and distance (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Above this magnitude an f64 has no fractional digits left to round
const F64_ROUNDING_LIMIT: f64 = 1e15;

/// Fare calculation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FareError {
    /// End reading below start reading
    #[error("End meter reading cannot be less than start reading")]
    ReadingsReversed { start: f64, end: f64 },

    /// Result is not a finite number
    #[error("Fare calculation overflowed")]
    Overflow,
}

impl From<FareError> for AppError {
    fn from(err: FareError) -> Self {
        match err {
            FareError::ReadingsReversed { .. } => AppError::validation(err.to_string()),
            FareError::Overflow => AppError::internal(err.to_string()),
        }
    }
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round an f64 to 2 decimal places, half away from zero
#[inline]
fn round_f64(value: f64) -> f64 {
    if value.abs() >= F64_ROUNDING_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Derive distance and total fare without validating the readings
///
/// Used directly by the save path, which accepts reversed readings unless
/// strict mode is on. Amounts beyond the `Decimal` range (about 7.9e28) are
/// computed in f64 instead.
pub fn derive(input: &FareRequest) -> Result<FareQuote, FareError> {
    match derive_decimal(input) {
        Some(quote) => Ok(quote),
        None => {
            tracing::debug!("Fare outside decimal range, using f64 arithmetic");
            derive_f64(input)
        }
    }
}

fn derive_decimal(input: &FareRequest) -> Option<FareQuote> {
    let start = Decimal::from_f64(input.start_reading)?;
    let end = Decimal::from_f64(input.end_reading)?;
    let rate = Decimal::from_f64(input.rate_per_km)?;
    let surcharges = [
        Decimal::from_f64(input.toll)?,
        Decimal::from_f64(input.state_tax)?,
        Decimal::from_f64(input.meal)?,
        Decimal::from_f64(input.night_stay)?,
    ];

    let distance = end.checked_sub(start)?;
    let total = surcharges
        .into_iter()
        .try_fold(distance.checked_mul(rate)?, |acc, amount| {
            acc.checked_add(amount)
        })?;

    Some(FareQuote {
        total_fare: to_f64(total),
        distance: to_f64(distance),
    })
}

fn derive_f64(input: &FareRequest) -> Result<FareQuote, FareError> {
    let distance = input.end_reading - input.start_reading;
    let total = distance * input.rate_per_km
        + input.toll
        + input.state_tax
        + input.meal
        + input.night_stay;

    if !distance.is_finite() || !total.is_finite() {
        return Err(FareError::Overflow);
    }

    Ok(FareQuote {
        total_fare: round_f64(total),
        distance: round_f64(distance),
    })
}

/// Validate the readings, then derive the fare
pub fn quote(input: &FareRequest) -> Result<FareQuote, FareError> {
    validate_readings(input)?;
    derive(input)
}

/// End reading must not be below start reading
pub fn validate_readings(input: &FareRequest) -> Result<(), FareError> {
    if input.end_reading < input.start_reading {
        return Err(FareError::ReadingsReversed {
            start: input.start_reading,
            end: input.end_reading,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(start: f64, end: f64, rate: f64) -> FareRequest {
        FareRequest {
            start_reading: start,
            end_reading: end,
            rate_per_km: rate,
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_trip() {
        let input = FareRequest {
            toll: 20.0,
            state_tax: 5.0,
            meal: 50.0,
            night_stay: 0.0,
            ..trip(100.0, 150.0, 12.0)
        };
        let q = quote(&input).unwrap();
        assert_eq!(q.distance, 50.0);
        assert_eq!(q.total_fare, 675.0);
    }

    #[test]
    fn test_reversed_readings_rejected() {
        let err = quote(&trip(200.0, 150.0, 12.0)).unwrap_err();
        assert_eq!(
            err,
            FareError::ReadingsReversed {
                start: 200.0,
                end: 150.0
            }
        );
        assert_eq!(
            err.to_string(),
            "End meter reading cannot be less than start reading"
        );
    }

    #[test]
    fn test_reversed_readings_map_to_validation_error() {
        let err: AppError = quote(&trip(2.0, 1.0, 0.0)).unwrap_err().into();
        assert_eq!(err.code, shared::ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_derive_allows_reversed_readings() {
        let q = derive(&trip(200.0, 150.0, 2.0)).unwrap();
        assert_eq!(q.distance, -50.0);
        assert_eq!(q.total_fare, -100.0);
    }

    #[test]
    fn test_equal_readings_only_surcharges() {
        let input = FareRequest {
            toll: 10.5,
            meal: 0.25,
            ..trip(300.0, 300.0, 99.0)
        };
        let q = quote(&input).unwrap();
        assert_eq!(q.distance, 0.0);
        assert_eq!(q.total_fare, 10.75);
    }

    #[test]
    fn test_all_zero() {
        let q = quote(&FareRequest::default()).unwrap();
        assert_eq!(q.distance, 0.0);
        assert_eq!(q.total_fare, 0.0);
    }

    #[test]
    fn test_float_noise_removed() {
        // 150.3 - 100.1 == 50.20000000000002 in f64
        let q = quote(&trip(100.1, 150.3, 1.0)).unwrap();
        assert_eq!(q.distance, 50.2);
        assert_eq!(q.total_fare, 50.2);
    }

    #[test]
    fn test_total_rounded_to_two_places() {
        // 3.333 km * 3.333 = 11.108889
        let q = quote(&trip(0.0, 3.333, 3.333)).unwrap();
        assert_eq!(q.total_fare, 11.11);
    }

    #[test]
    fn test_matches_reference_formula() {
        let cases = [
            (0.0, 10.0, 9.5, 1.0, 2.0, 3.0, 4.0),
            (1234.5, 1300.0, 14.0, 0.0, 0.0, 120.0, 500.0),
            (10.0, 10.5, 18.0, 45.0, 0.0, 0.0, 0.0),
        ];
        for (start, end, rate, toll, tax, meal, night) in cases {
            let input = FareRequest {
                start_reading: start,
                end_reading: end,
                rate_per_km: rate,
                toll,
                state_tax: tax,
                meal,
                night_stay: night,
            };
            let expected = ((end - start) * rate + toll + tax + meal + night) * 100.0;
            let q = quote(&input).unwrap();
            assert_eq!(q.total_fare, expected.round() / 100.0);
            assert_eq!(q.distance, end - start);
        }
    }

    #[test]
    fn test_idempotent() {
        let input = FareRequest {
            toll: 7.77,
            ..trip(12.34, 56.78, 9.99)
        };
        let first = quote(&input).unwrap();
        for _ in 0..10 {
            assert_eq!(quote(&input).unwrap(), first);
        }
    }

    #[test]
    fn test_beyond_decimal_range_input() {
        let q = quote(&trip(0.0, 1e29, 1.0)).unwrap();
        assert_eq!(q.distance, 1e29);
        assert_eq!(q.total_fare, 1e29);
    }

    #[test]
    fn test_beyond_decimal_range_product() {
        let q = quote(&trip(0.0, 1e15, 1e15)).unwrap();
        assert_eq!(q.distance, 1e15);
        assert_eq!(q.total_fare, 1e15 * 1e15);
    }

    #[test]
    fn test_f64_fallback_still_rounds() {
        let input = FareRequest {
            toll: 0.125,
            ..trip(0.0, 1e29, 0.0)
        };
        assert_eq!(derive_f64(&input).unwrap().total_fare, 0.13);
    }

    #[test]
    fn test_non_finite_result_is_overflow() {
        let err = quote(&trip(0.0, 1e300, 1e300)).unwrap_err();
        assert_eq!(err, FareError::Overflow);
        let app: AppError = err.into();
        assert_eq!(app.code, shared::ErrorCode::InternalError);
    }
}
