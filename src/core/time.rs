//! Calendar parsing and display formatting for axis labels.
//!
//! Callers describe formats with date-fns style tokens (`yyyy`, `MM`, `dd`,
//! `MMM`, `yy`) because that is the contract the dashboards already speak;
//! tokens are translated to `chrono` specifiers internally.

use chrono::NaiveDate;

use crate::error::{ChartError, ChartResult};

/// Month-granularity input format. Collections in this format get the
/// smaller initial zoom window.
pub const MONTH_FORMAT: &str = "yyyy-MM";

/// Filler day used when parsing month-granularity labels.
const MONTH_FILLER_DAY: &str = "-02";

#[must_use]
pub fn is_month_granularity(date_format: Option<&str>) -> bool {
    date_format == Some(MONTH_FORMAT)
}

/// Display tokens for zoom-slider and tooltip headers.
#[must_use]
pub fn slider_label_format(date_format: Option<&str>) -> &'static str {
    if is_month_granularity(date_format) {
        "MMM/yy"
    } else {
        "dd/MM/yyyy"
    }
}

/// Display tokens for category-axis tick labels on time axes.
#[must_use]
pub fn axis_label_format(date_format: Option<&str>) -> &'static str {
    if is_month_granularity(date_format) {
        "MMM/yy"
    } else {
        "dd MMM"
    }
}

/// Translates a date-fns token string into a `chrono` format string.
/// Longest tokens win (`yyyy` before `yy`, `MMM` before `MM`).
#[must_use]
pub fn tokens_to_chrono(tokens: &str) -> String {
    const TABLE: [(&str, &str); 5] = [
        ("yyyy", "%Y"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("dd", "%d"),
        ("yy", "%y"),
    ];

    let mut out = String::with_capacity(tokens.len());
    let mut rest = tokens;
    'scan: while !rest.is_empty() {
        for (token, spec) in TABLE {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }
        let ch = rest.chars().next().unwrap_or_default();
        if ch == '%' {
            out.push('%');
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Parses a raw label into a calendar date using a token format.
///
/// Month-granularity formats (no `dd` token) get a filler day appended.
/// With no format, common raw shapes are tried (`yyyy-MM-dd`, `yyyy-MM`,
/// an RFC 3339 date prefix). Malformed input is a caller contract
/// violation and fails loudly.
pub fn to_date(label: &str, date_format: Option<&str>) -> ChartResult<NaiveDate> {
    let parsed = match date_format {
        Some(tokens) if tokens.contains("dd") => {
            NaiveDate::parse_from_str(label, &tokens_to_chrono(tokens)).ok()
        }
        Some(tokens) => {
            let padded = format!("{label}{MONTH_FILLER_DAY}");
            let spec = format!("{}-%d", tokens_to_chrono(tokens));
            NaiveDate::parse_from_str(&padded, &spec).ok()
        }
        None => parse_raw_label(label),
    };

    parsed.ok_or_else(|| ChartError::InvalidDate {
        label: label.to_owned(),
        format: date_format.unwrap_or("<auto>").to_owned(),
    })
}

/// Parses a raw label on a best-effort basis, then renders it with a token
/// display format. Used by axis ticks, slider labels and tooltip headers.
pub fn format_time(label: &str, display_tokens: &str) -> ChartResult<String> {
    let date = parse_raw_label(label).ok_or_else(|| ChartError::InvalidDate {
        label: label.to_owned(),
        format: display_tokens.to_owned(),
    })?;
    Ok(date.format(&tokens_to_chrono(display_tokens)).to_string())
}

fn parse_raw_label(label: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return Some(date);
    }
    let padded = format!("{label}{MONTH_FILLER_DAY}");
    if let Ok(date) = NaiveDate::parse_from_str(&padded, "%Y-%m-%d") {
        return Some(date);
    }
    // Datetime labels keep their date prefix.
    if let Some(prefix) = label.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(date);
        }
    }
    None
}
