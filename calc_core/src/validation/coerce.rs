//! Loose value coercion
//!
//! Form inputs arrive as raw JSON values: mostly strings typed by a user,
//! sometimes numbers. Numeric rules coerce them the way a browser's
//! `parseFloat` does, so `"12kg"` reads as `12` and `"abc"` as NaN.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Largest magnitude (ms since the epoch) a browser date can hold
const MAX_TIMESTAMP_MS: f64 = 8.64e15;

/// Coerce a raw value to `f64`. Returns NaN when no number can be read.
///
/// Strings are parsed by [`parse_float_prefix`]; booleans, null, arrays and
/// objects are NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float_prefix(s),
        _ => f64::NAN,
    }
}

/// Parse the longest leading decimal literal of `s`.
///
/// Leading whitespace is skipped, an optional sign is accepted, and
/// `Infinity` is recognised. Trailing garbage is ignored. No digits means
/// NaN.
pub fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mantissa_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - mantissa_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Text a pattern rule tests against. Strings as-is, numbers and booleans
/// stringified; null, arrays and objects have no text.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Interpret a raw value as a point in time.
///
/// Numbers are milliseconds since the Unix epoch. Strings may be RFC 3339,
/// RFC 2822, `YYYY-MM-DD`, or a naive `YYYY-MM-DDTHH:MM[:SS]` (read as UTC).
pub fn to_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let ms = n.as_f64()?;
            if !ms.is_finite() || ms.abs() > MAX_TIMESTAMP_MS {
                return None;
            }
            Utc.timestamp_millis_opt(ms.trunc() as i64).single()
        }
        Value::String(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| Utc.from_utc_datetime(&dt));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("42"), 42.0);
        assert_eq!(parse_float_prefix("  3.5kg"), 3.5);
        assert_eq!(parse_float_prefix("-0.25"), -0.25);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("5."), 5.0);
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("2E-2x"), 0.02);
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinityish"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_float_prefix_nan() {
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix("e5").is_nan());
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(7)), 7.0);
        assert_eq!(to_number(&json!("7.5 years")), 7.5);
        assert!(to_number(&json!(true)).is_nan());
        assert!(to_number(&Value::Null).is_nan());
        assert!(to_number(&json!([1])).is_nan());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(to_text(&json!(5)).as_deref(), Some("5"));
        assert_eq!(to_text(&json!(false)).as_deref(), Some("false"));
        assert_eq!(to_text(&Value::Null), None);
    }

    #[test]
    fn test_to_datetime() {
        assert!(to_datetime(&json!("2024-02-29")).is_some());
        assert!(to_datetime(&json!("2024-02-30")).is_none());
        assert!(to_datetime(&json!("2024-01-15T10:30:00Z")).is_some());
        assert!(to_datetime(&json!("2024-01-15T10:30")).is_some());
        assert!(to_datetime(&json!(0)).is_some());
        assert!(to_datetime(&json!("not a date")).is_none());
        assert!(to_datetime(&json!("")).is_none());
        assert!(to_datetime(&Value::Null).is_none());
    }
}
