//! Display formatting for raw numeric values and category labels.
//!
//! All functions here are total over finite inputs and act exactly once, on
//! raw numbers. Already-formatted display strings are never re-formatted.

use crate::core::ValueFormat;

const DEFAULT_LABEL_WIDTH: usize = 12;

/// Renders a number the way the engine would: no trailing `.0`, otherwise
/// the shortest faithful decimal form.
#[must_use]
pub fn trim_number(value: f64) -> String {
    value.to_string()
}

/// Converts a minute count to a decimal hour count, rounded to two places
/// with trailing zeros trimmed: `90 -> "1.5"`, `0 -> "0"`.
#[must_use]
pub fn time_convert(minutes: f64) -> String {
    let hours = minutes / 60.0;
    let rounded = (hours * 100.0).round() / 100.0;
    trim_number(rounded)
}

/// Minute count rendered as an hour display string: `90 -> "1.5h"`.
#[must_use]
pub fn duration_hours_label(minutes: f64) -> String {
    format!("{}h", time_convert(minutes))
}

/// Locale currency formatting (Brazilian real): `1234.5 -> "R$ 1.234,50"`.
#[must_use]
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Truncates a category label to `max` characters (default 12), appending an
/// ellipsis when anything was cut.
#[must_use]
pub fn truncate_label(text: &str, max: Option<usize>) -> String {
    let max = max.unwrap_or(DEFAULT_LABEL_WIDTH);
    if text.chars().count() > max {
        let shown: String = text.chars().take(max).collect();
        format!("{shown}...")
    } else {
        text.to_owned()
    }
}

/// Applies a unit complement to a raw numeric value.
///
/// Money uses locale currency formatting, `DurationHours` converts a minute
/// count to an hour string, a plain suffix is appended verbatim, and a
/// caller-supplied function takes full control.
#[must_use]
pub fn take_label_complement(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Raw => trim_number(value),
        ValueFormat::Money => format_money(value),
        ValueFormat::DurationHours => duration_hours_label(value),
        ValueFormat::Suffix(suffix) => format!("{}{suffix}", trim_number(value)),
        ValueFormat::Custom(formatter) => formatter(value),
    }
}
