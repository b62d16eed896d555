use crate::domain::model::RawValue;
use crate::utils::error::{ClinicError, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("time-of-day pattern compiles"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Text fields accept numbers verbatim; blank text counts as absent.
pub fn coerce_text(value: Option<&RawValue>) -> Option<String> {
    let text = match value? {
        RawValue::Text(text) => text.clone(),
        RawValue::Integer(number) => number.to_string(),
        RawValue::Float(number) => number.to_string(),
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Non-negative whole numbers (ids, usage counts, minutes, ages).
pub fn coerce_count(field_name: &str, value: Option<&RawValue>) -> Result<Option<u32>> {
    match value {
        None => Ok(None),
        Some(RawValue::Integer(number)) => u32::try_from(*number).map(Some).map_err(|_| {
            ClinicError::coercion(
                field_name,
                number.to_string(),
                "Value must be a non-negative integer",
            )
        }),
        Some(RawValue::Float(number)) => {
            if number.is_finite()
                && number.fract() == 0.0
                && *number >= 0.0
                && *number <= f64::from(u32::MAX)
            {
                Ok(Some(*number as u32))
            } else {
                Err(ClinicError::coercion(
                    field_name,
                    number.to_string(),
                    "Value must be a non-negative integer",
                ))
            }
        }
        Some(RawValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<u32>().map(Some).map_err(|e| {
                ClinicError::coercion(
                    field_name,
                    text.clone(),
                    format!("Not a non-negative integer: {}", e),
                )
            })
        }
    }
}

pub fn coerce_decimal(field_name: &str, value: Option<&RawValue>) -> Result<Option<Decimal>> {
    match value {
        None => Ok(None),
        Some(RawValue::Integer(number)) => Ok(Some(Decimal::from(*number))),
        Some(RawValue::Float(number)) => Decimal::try_from(*number).map(Some).map_err(|e| {
            ClinicError::coercion(
                field_name,
                number.to_string(),
                format!("Not a decimal number: {}", e),
            )
        }),
        Some(RawValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            Decimal::from_str(trimmed).map(Some).map_err(|e| {
                ClinicError::coercion(
                    field_name,
                    text.clone(),
                    format!("Not a decimal number: {}", e),
                )
            })
        }
    }
}

pub fn validate_required_field<T>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ClinicError::missing_field(field_name))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClinicError::config(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ClinicError::config(format!(
            "{} must be between {} and {}, got {}",
            field_name, min, max, value
        )));
    }
    Ok(())
}

/// Strict `HH:MM`; `9:15` is rejected even though chrono would accept it.
pub fn parse_time_of_day(field_name: &str, value: &str) -> Result<NaiveTime> {
    if !TIME_OF_DAY.is_match(value) {
        return Err(ClinicError::coercion(
            field_name,
            value,
            "Time must use the HH:MM format",
        ));
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| {
        ClinicError::coercion(field_name, value, format!("Invalid time of day: {}", e))
    })
}

pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        ClinicError::coercion(field_name, value, format!("Invalid YYYY-MM-DD date: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn text(value: &str) -> RawValue {
        RawValue::Text(value.to_string())
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce_text(None), None);
        assert_eq!(coerce_text(Some(&text("   "))), None);
        assert_eq!(
            coerce_text(Some(&text("Mindfulness"))),
            Some("Mindfulness".to_string())
        );
        assert_eq!(
            coerce_text(Some(&RawValue::Integer(42))),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_coerce_count_keeps_zero() {
        assert_eq!(coerce_count("usersMonth1", Some(&RawValue::Integer(0))).unwrap(), Some(0));
        assert_eq!(coerce_count("usersMonth1", Some(&text(" 120 "))).unwrap(), Some(120));
        assert_eq!(coerce_count("usersMonth1", Some(&RawValue::Float(7.0))).unwrap(), Some(7));
        assert_eq!(coerce_count("usersMonth1", Some(&text(""))).unwrap(), None);
        assert_eq!(coerce_count("usersMonth1", None).unwrap(), None);
    }

    #[test]
    fn test_coerce_count_rejects_invalid_input() {
        assert!(coerce_count("id", Some(&RawValue::Integer(-1))).is_err());
        assert!(coerce_count("id", Some(&RawValue::Float(1.5))).is_err());
        assert!(coerce_count("id", Some(&RawValue::Float(f64::NAN))).is_err());
        assert!(coerce_count("id", Some(&text("twelve"))).is_err());
    }

    #[test]
    fn test_coerce_decimal() {
        assert_eq!(
            coerce_decimal("cost", Some(&RawValue::Integer(1800))).unwrap(),
            Some(dec!(1800))
        );
        assert_eq!(
            coerce_decimal("cost", Some(&text("1250.50"))).unwrap(),
            Some(dec!(1250.50))
        );
        assert_eq!(
            coerce_decimal("cost", Some(&RawValue::Float(99.5))).unwrap(),
            Some(dec!(99.5))
        );
        assert!(coerce_decimal("cost", Some(&text("free"))).is_err());
    }

    #[test]
    fn test_parse_time_of_day_is_strict() {
        assert!(parse_time_of_day("requestTime", "09:15").is_ok());
        assert!(parse_time_of_day("requestTime", "9:15").is_err());
        assert!(parse_time_of_day("requestTime", "09:15:00").is_err());
        assert!(parse_time_of_day("requestTime", "25:00").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("requestDate", "2025-01-12").is_ok());
        assert!(parse_date("requestDate", "12.01.2025").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("month", 1, 1, 12).is_ok());
        let err = validate_range("month", 13, 1, 12).unwrap_err();
        assert!(matches!(err, ClinicError::Config { .. }));
        assert_eq!(
            err.to_string(),
            "Configuration error: month must be between 1 and 12, got 13"
        );
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("seed", "fixtures/seed.toml").is_ok());
        assert!(matches!(
            validate_non_empty_string("seed", "  "),
            Err(ClinicError::Config { .. })
        ));
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(validate_required_field("age", Some(3)).unwrap(), 3);
        assert!(matches!(
            validate_required_field::<u32>("age", None),
            Err(ClinicError::MissingField { .. })
        ));
    }
}
