//! # Number and Text Formatting
//!
//! Display helpers shared by the calculator units, the SEO layer and the
//! CLI. Numbers follow en-US conventions (`1,234.50`).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::{format_currency, format_number, slugify};
//!
//! assert_eq!(format_number(1234.5, 2, true), "1,234.50");
//! assert_eq!(format_currency(-42.0, "EUR"), "-€42.00");
//! assert_eq!(slugify("  Loan & Mortgage Tools "), "loan-mortgage-tools");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").unwrap_or_else(|_| unreachable!("static regex")));
static SLUG_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").unwrap_or_else(|_| unreachable!("static regex")));

/// Round half up to `decimals` places (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_to(num: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (num * factor + 0.5).floor() / factor
}

/// `value` as a percentage of `total`; zero when `total` is zero.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    value / total * 100.0
}

/// Format with a fixed number of decimals and optional thousands commas.
///
/// NaN formats as `"0"`.
pub fn format_number(num: f64, decimals: usize, thousands_separator: bool) -> String {
    if num.is_nan() {
        return "0".to_string();
    }
    if num.is_infinite() {
        return if num < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }

    let fixed = format!("{:.*}", decimals, num.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    if num < 0.0 && !is_zero {
        out.push('-');
    }
    if thousands_separator {
        out.push_str(&group_thousands(int_part));
    } else {
        out.push_str(int_part);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Symbol and minor-unit digits for the currencies the converter offers
fn currency_style(code: &str) -> Option<(&'static str, usize)> {
    let style = match code {
        "USD" => ("$", 2),
        "EUR" => ("€", 2),
        "GBP" => ("£", 2),
        "JPY" => ("¥", 0),
        "INR" => ("₹", 2),
        "CNY" => ("CN¥", 2),
        "CAD" => ("CA$", 2),
        "AUD" => ("A$", 2),
        "KRW" => ("₩", 0),
        "MXN" => ("MX$", 2),
        "BRL" => ("R$", 2),
        _ => return None,
    };
    Some(style)
}

/// Format an amount in a currency, e.g. `$1,234.50`.
///
/// Unknown codes are written before the number (`CHF 10.00`). NaN formats
/// as `$0.00`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    if amount.is_nan() {
        return "$0.00".to_string();
    }
    let code = currency.trim().to_ascii_uppercase();
    let (symbol, decimals, spaced) = match currency_style(&code) {
        Some((symbol, decimals)) => (symbol.to_string(), decimals, false),
        None => (code, 2, true),
    };

    let number = format_number(amount.abs(), decimals, true);
    let sign = if amount < 0.0 && number.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        "-"
    } else {
        ""
    };
    if spaced {
        format!("{}{} {}", sign, symbol, number)
    } else {
        format!("{}{}{}", sign, symbol, number)
    }
}

/// Lowercase, hyphen-separated slug of `text`.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(lower.trim(), "");
    let hyphenated = SLUG_SEPARATORS.replace_all(&cleaned, "-");
    hyphenated.trim_matches('-').to_string()
}
