use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// One labeled numeric data point.
///
/// `label` is the category or raw time string for the x axis, `result` the
/// plotted value. `result` must be finite; the constructor enforces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub label: String,
    pub result: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PointStyle>,
}

impl Entry {
    pub fn new(label: impl Into<String>, result: f64) -> ChartResult<Self> {
        let label = label.into();
        if !result.is_finite() {
            return Err(ChartError::NonFiniteValue { label });
        }
        Ok(Self {
            label,
            result,
            item_id: None,
            style: None,
        })
    }

    /// Attaches a host-side identifier carried through to click events.
    #[must_use]
    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// Attaches a per-point style override.
    #[must_use]
    pub fn with_style(mut self, style: PointStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Per-point visual override applied to a single bar or symbol.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// A collection of entries plotted as one visual series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub values: Vec<Entry>,
}

impl NamedSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Entry>) -> Self {
        Self {
            name: Some(name.into()),
            values,
        }
    }

    #[must_use]
    pub fn unnamed(values: Vec<Entry>) -> Self {
        Self { name: None, values }
    }
}

/// A raw x/y pair used by the coordinate chart variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The three fixed coordinate groups the coordinate chart expects, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGroups {
    pub reference: Vec<Coordinate>,
    pub pre: Vec<Coordinate>,
    pub post: Vec<Coordinate>,
}

impl CoordinateGroups {
    #[must_use]
    pub fn new(reference: Vec<Coordinate>, pre: Vec<Coordinate>, post: Vec<Coordinate>) -> Self {
        Self {
            reference,
            pre,
            post,
        }
    }
}

/// Kind of the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Time,
    Category,
}

/// Kind of the value axis. `Time` means the plotted numbers are minute
/// counts rendered as decimal hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Time,
    Value,
}

/// The "complement" applied to a raw numeric value before display.
///
/// `Custom` wraps a caller-supplied formatting function and takes
/// precedence over the built-in rules.
#[derive(Clone)]
pub enum ValueFormat {
    Raw,
    Money,
    DurationHours,
    Suffix(String),
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl ValueFormat {
    /// Stable token used when the format crosses the serialization boundary.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Raw => "",
            Self::Money => "money",
            Self::DurationHours => "time",
            Self::Suffix(suffix) => suffix,
            Self::Custom(_) => "custom",
        }
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::Raw
    }
}

impl fmt::Debug for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("Raw"),
            Self::Money => f.write_str("Money"),
            Self::DurationHours => f.write_str("DurationHours"),
            Self::Suffix(suffix) => f.debug_tuple("Suffix").field(suffix).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for ValueFormat {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Raw, Self::Raw)
            | (Self::Money, Self::Money)
            | (Self::DurationHours, Self::DurationHours) => true,
            (Self::Suffix(a), Self::Suffix(b)) => a == b,
            // Caller-supplied functions are never considered equal.
            _ => false,
        }
    }
}

impl Serialize for ValueFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

/// Static text templates combined with a data point at render time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipSpec {
    pub label: String,
    pub result: String,
}

impl TooltipSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            result: result.into(),
        }
    }
}
