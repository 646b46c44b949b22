//! Salary normalization and display.
//!
//! Salaries are stored as decimal strings with exactly two fraction digits,
//! or as an empty string when unset. Parsing and rounding go through
//! `rust_decimal` so that no binary floating point is involved.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{RecordError, RecordResult};

/// Number of fraction digits kept on a stored salary.
pub const SALARY_SCALE: u32 = 2;

/// Placeholder rendered for an unset or unreadable salary.
pub const SALARY_PLACEHOLDER: &str = "-";

fn parse_decimal(input: &str) -> Option<Decimal> {
    if input.contains('_') {
        return None;
    }
    let input = input.strip_prefix('+').unwrap_or(input);
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}

/// Normalizes raw salary input to a two-fraction-digit decimal string.
///
/// Blank input means "unset" and normalizes to an empty string. Anything
/// else must parse as a decimal number and is rounded half away from zero.
///
/// # Examples
///
/// ```
/// use employee_records::models::normalize_salary;
///
/// assert_eq!(normalize_salary("120000").unwrap(), "120000.00");
/// assert_eq!(normalize_salary(" 1800.5 ").unwrap(), "1800.50");
/// assert_eq!(normalize_salary("").unwrap(), "");
/// assert!(normalize_salary("lots").is_err());
/// ```
pub fn normalize_salary(input: &str) -> RecordResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let value = parse_decimal(trimmed).ok_or_else(|| RecordError::Validation {
        field: "salary".to_string(),
        message: format!("'{}' is not a number", trimmed),
    })?;

    let mut rounded =
        value.round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(SALARY_SCALE);
    // rescale leaves the scale alone when the mantissa has no room for cents
    if rounded.scale() != SALARY_SCALE {
        return Err(RecordError::Validation {
            field: "salary".to_string(),
            message: format!("'{}' is out of range", trimmed),
        });
    }
    Ok(rounded.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders a salary for display, e.g. `"120,000 PKR"` or `"1,800.5 USD"`.
///
/// At most two fraction digits are shown and trailing zeros are dropped.
/// Unset or unparsable salaries render as [`SALARY_PLACEHOLDER`].
pub fn format_salary(salary: &str, currency: &str) -> String {
    let Some(value) = parse_decimal(salary.trim()) else {
        return SALARY_PLACEHOLDER.to_string();
    };

    let value = value
        .round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = value.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if value.is_sign_negative() && !value.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    if !currency.is_empty() {
        out.push(' ');
        out.push_str(currency);
    }
    out
}
