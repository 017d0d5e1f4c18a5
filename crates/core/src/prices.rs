//! Price validation
//!
//! Sources publish prices either as JSON numbers or as numeric strings.
//! Both are converted to [`Decimal`] from their textual form so no binary
//! float rounding creeps into the aggregate.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use std::str::FromStr;

use crate::errors::{FetchError, FetchResult};

/// Validate an extracted value as a strictly positive, finite price.
///
/// Values a [`Decimal`] cannot represent (above `Decimal::MAX`) are rejected.
pub fn parse_price(value: &Value) -> FetchResult<Decimal> {
    let price = match value {
        Value::Number(number) => number_to_decimal(number),
        Value::String(text) => text_to_decimal(text),
        _ => None,
    };

    price
        .filter(|p| p.is_sign_positive() && !p.is_zero())
        .ok_or(FetchError::InvalidPrice)
}

/// Finite, strictly positive floats only
pub fn validate_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    Decimal::from_f64(value)
}

fn number_to_decimal(number: &Number) -> Option<Decimal> {
    let float = validate_f64(number.as_f64()?)?;
    text_to_decimal(&number.to_string()).or(Some(float))
}

fn text_to_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(parse_price(&json!(60000)), Ok(dec!(60000)));
        assert_eq!(parse_price(&json!(60000.25)), Ok(dec!(60000.25)));
        assert_eq!(parse_price(&json!("60123.4567")), Ok(dec!(60123.4567)));
        assert_eq!(parse_price(&json!(" 59900.10 ")), Ok(dec!(59900.10)));
    }

    #[test]
    fn test_string_precision_is_kept() {
        let price = parse_price(&json!("60123.123456789012")).unwrap();
        assert_eq!(price.to_string(), "60123.123456789012");
    }

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        for bad in [
            json!(0),
            json!(0.0),
            json!(-5),
            json!("-5"),
            json!("0"),
            json!("NaN"),
            json!("Infinity"),
            json!("-Infinity"),
            json!(""),
            json!("abc"),
            json!(null),
            json!(true),
            json!({"usd": 1}),
            json!([60000]),
        ] {
            assert_eq!(parse_price(&bad), Err(FetchError::InvalidPrice), "accepted {}", bad);
        }
    }

    #[test]
    fn test_rejects_values_beyond_decimal_range() {
        assert_eq!(parse_price(&json!(1e29)), Err(FetchError::InvalidPrice));
    }

    #[test]
    fn test_validate_f64_boundary() {
        assert_eq!(validate_f64(0.0), None);
        assert_eq!(validate_f64(-5.0), None);
        assert_eq!(validate_f64(f64::NAN), None);
        assert_eq!(validate_f64(f64::INFINITY), None);
        assert_eq!(validate_f64(f64::NEG_INFINITY), None);
        assert_eq!(validate_f64(60000.0), Some(dec!(60000)));
    }
}
