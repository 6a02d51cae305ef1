//! Axis definitions of the engine option schema.

use chrono::NaiveDate;
use serde::Serialize;

use crate::schema::formatter::LabelFormatter;
use crate::schema::series::{LineKind, LineStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
}

/// Category data carried on an axis: plain labels or parsed dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisData {
    Categories(Vec<String>),
    Dates(Vec<NaiveDate>),
}

impl AxisData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Categories(labels) => labels.len(),
            Self::Dates(dates) => dates.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<LabelFormatter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

impl SplitLine {
    /// The dotted split-line style every chart in the product uses.
    #[must_use]
    pub fn dotted() -> Self {
        Self {
            show: Some(true),
            line_style: Some(LineStyle {
                kind: Some(LineKind::Dotted),
                opacity: Some(0.8),
                ..LineStyle::default()
            }),
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            show: Some(false),
            line_style: Some(LineStyle {
                kind: Some(LineKind::Dotted),
                opacity: Some(0.8),
                ..LineStyle::default()
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_with_label: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<[f64; 4]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: AxisType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_text_style: Option<NameTextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AxisData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<AxisTick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<AxisLine>,
}

impl Axis {
    #[must_use]
    pub fn new(kind: AxisType) -> Self {
        Self {
            kind,
            name: None,
            name_gap: None,
            name_text_style: None,
            data: None,
            boundary_gap: None,
            show_grid: None,
            min: None,
            max: None,
            interval: None,
            split_line: None,
            axis_label: None,
            axis_tick: None,
            axis_line: None,
        }
    }
}
