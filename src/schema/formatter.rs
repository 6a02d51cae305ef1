//! Serializable formatter descriptors.
//!
//! The engine schema allows function-valued `formatter` fields, but
//! functions cannot cross a JSON boundary. Every formatter in this crate is
//! therefore plain data the embedding host binds to an engine function, and
//! each descriptor carries its own Rust-side evaluation so the display
//! behavior stays testable here.

use serde::Serialize;

use crate::core::format::{duration_hours_label, take_label_complement, trim_number};
use crate::core::time::format_time;
use crate::core::{AxisKind, TooltipSpec, ValueFormat, ValueKind};

/// Formatter for axis tick labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelFormatter {
    /// Parses a raw label as a date and renders it with display tokens.
    /// Unparseable labels pass through unchanged.
    Time { display: String },
    /// Minute counts rendered as decimal hours (`90 -> "1.5h"`).
    Duration,
    /// Raw numeric values rendered through the complement rule.
    Value(ValueFormat),
    /// Category labels cut to a fixed width with an ellipsis.
    Truncate { max: usize },
}

impl LabelFormatter {
    #[must_use]
    pub fn format_category(&self, raw: &str) -> String {
        match self {
            Self::Time { display } => {
                format_time(raw, display).unwrap_or_else(|_| raw.to_owned())
            }
            Self::Truncate { max } => {
                crate::core::format::truncate_label(raw, Some(*max))
            }
            Self::Duration | Self::Value(_) => raw.to_owned(),
        }
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Self::Duration => duration_hours_label(value),
            Self::Value(format) => take_label_complement(value, format),
            Self::Time { .. } | Self::Truncate { .. } => trim_number(value),
        }
    }
}

/// Formatter for point labels drawn on a series.
///
/// A caller-supplied `Custom` complement takes precedence; otherwise
/// duration-valued axes render hours and everything else goes through the
/// complement rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLabelFormatter {
    pub value_kind: ValueKind,
    pub value_format: ValueFormat,
}

impl SeriesLabelFormatter {
    #[must_use]
    pub fn new(value_kind: ValueKind, value_format: ValueFormat) -> Self {
        Self {
            value_kind,
            value_format,
        }
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if let ValueFormat::Custom(formatter) = &self.value_format {
            return formatter(value);
        }
        match self.value_kind {
            ValueKind::Time => duration_hours_label(value),
            ValueKind::Value => take_label_complement(value, &self.value_format),
        }
    }
}

/// Formatter for zoom-slider handle labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderLabelFormatter {
    pub display: String,
}

impl SliderLabelFormatter {
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
        }
    }

    #[must_use]
    pub fn format(&self, raw: &str) -> String {
        format_time(raw, &self.display).unwrap_or_else(|_| raw.to_owned())
    }
}

/// One point handed to a tooltip formatter by the engine on hover.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPoint {
    pub name: String,
    pub series_name: Option<String>,
    pub value: f64,
}

impl RenderedPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            series_name: None,
            value,
        }
    }

    #[must_use]
    pub fn with_series_name(mut self, series_name: impl Into<String>) -> Self {
        self.series_name = Some(series_name.into());
        self
    }
}

/// Tooltip formatter descriptor. `format` is what the engine would invoke
/// per hover event; it never panics and returns an empty string for an
/// empty point list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipFormatter {
    SingleSeries {
        spec: TooltipSpec,
        #[serde(skip_serializing_if = "Option::is_none")]
        complement: Option<String>,
        value_kind: ValueKind,
        value_format: ValueFormat,
        #[serde(skip_serializing_if = "Option::is_none")]
        date_format: Option<String>,
    },
    MultiSeries {
        value_format: ValueFormat,
        axis_kind: AxisKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        date_format: Option<String>,
    },
    HorizontalBar {
        spec: TooltipSpec,
        axis_kind: AxisKind,
        value_format: ValueFormat,
    },
}

impl TooltipFormatter {
    #[must_use]
    pub fn format(&self, points: &[RenderedPoint]) -> String {
        if points.is_empty() {
            return String::new();
        }

        match self {
            Self::SingleSeries {
                spec,
                complement,
                value_kind,
                value_format,
                date_format,
            } => {
                let point = &points[0];
                let display = crate::core::time::slider_label_format(date_format.as_deref());
                let header =
                    format_time(&point.name, display).unwrap_or_else(|_| point.name.clone());
                let value = match value_kind {
                    ValueKind::Time => duration_hours_label(point.value),
                    ValueKind::Value => take_label_complement(point.value, value_format),
                };
                let complement = complement.as_deref().unwrap_or_default();
                format!(
                    "{}: {header} <br>{}: {value} <br>{complement}",
                    spec.label, spec.result
                )
            }
            Self::MultiSeries {
                value_format,
                axis_kind,
                date_format,
            } => {
                let header = match axis_kind {
                    AxisKind::Time => {
                        let display = crate::core::time::axis_label_format(date_format.as_deref());
                        format_time(&points[0].name, display)
                            .unwrap_or_else(|_| points[0].name.clone())
                    }
                    AxisKind::Category => points[0].name.clone(),
                };
                let lines: Vec<String> = points
                    .iter()
                    .map(|point| {
                        let name = point.series_name.as_deref().unwrap_or(&point.name);
                        format!("{name}: {}<br>", take_label_complement(point.value, value_format))
                    })
                    .collect();
                format!("{header} <br> {}", lines.join(" "))
            }
            Self::HorizontalBar {
                spec,
                axis_kind,
                value_format,
            } => {
                // Index 0 is the cosmetic background track.
                let point = points.get(1).unwrap_or(&points[0]);
                let value = match axis_kind {
                    AxisKind::Time => duration_hours_label(point.value),
                    AxisKind::Category => take_label_complement(point.value, value_format),
                };
                format!("{}: {} <br>{}: {value} <br>", spec.label, point.name, spec.result)
            }
        }
    }
}
