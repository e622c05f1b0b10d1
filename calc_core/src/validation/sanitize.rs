//! Input sanitizers applied after validation and before storage or display.

use serde_json::Value;

use super::coerce;
use crate::format::round_to;

/// Default number of decimals kept by [`number`]
pub const DEFAULT_DECIMALS: i32 = 10;

/// Options for [`string`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringOptions {
    pub max_length: Option<usize>,
    pub trim: bool,
    pub to_lowercase: bool,
    pub to_uppercase: bool,
}

impl Default for StringOptions {
    fn default() -> Self {
        StringOptions {
            max_length: None,
            trim: true,
            to_lowercase: false,
            to_uppercase: false,
        }
    }
}

/// Coerce, clamp and round a numeric input. `None` when nothing numeric
/// can be read.
///
/// Rounding is half-up toward positive infinity, so `-2.5` rounds to `-2`.
pub fn number(value: &Value, min: Option<f64>, max: Option<f64>, decimals: Option<i32>) -> Option<f64> {
    let mut num = coerce::to_number(value);
    if num.is_nan() {
        return None;
    }
    if let Some(min) = min {
        num = num.max(min);
    }
    if let Some(max) = max {
        num = num.min(max);
    }
    Some(round_to(num, decimals.unwrap_or(DEFAULT_DECIMALS)))
}

/// Normalize a text input. Non-string values are stringified first.
pub fn string(value: &Value, options: StringOptions) -> String {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    };

    if options.trim {
        text = text.trim().to_string();
    }
    if options.to_lowercase {
        text = text.to_lowercase();
    }
    if options.to_uppercase {
        text = text.to_uppercase();
    }
    if let Some(max) = options.max_length.filter(|m| *m > 0) {
        if let Some((cut, _)) = text.char_indices().nth(max) {
            text.truncate(cut);
        }
    }
    text
}

/// Escape text for safe inclusion in HTML element content.
pub fn html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    out
}
