//! Numeric coercion for form-style input
//!
//! Amounts arrive from forms that may send numbers or numeric strings.
//! Both are accepted; `null` and missing fields become 0.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

/// Parse a user-entered amount (`"12"`, `" 7.5 "`, `"1e3"`)
///
/// Rejects empty text and non-finite values such as `"NaN"` or `"inf"`.
pub fn parse_amount(text: &str) -> Result<f64, String> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("invalid amount {:?}", text))?;
    if !value.is_finite() {
        return Err(format!("amount must be a finite number, got {:?}", text));
    }
    Ok(value)
}

/// `deserialize_with` adapter for amount fields
///
/// Pair with `#[serde(default)]` so missing fields default to 0.
pub mod amount {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(E::custom(format!("amount must be a finite number, got {}", v)))
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            parse_amount(v).map_err(E::custom)
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<f64, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }
}
