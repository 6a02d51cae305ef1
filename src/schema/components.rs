//! Chart chrome: title, legend, grid, tooltip and zoom descriptors.

use serde::Serialize;

use crate::schema::axis::TextStyle;
use crate::schema::formatter::{SliderLabelFormatter, TooltipFormatter};

/// Font stack shared by every title block in the product.
pub const TITLE_FONT_FAMILY: &str = "Roboto, Helvetica, Arial, sans-serif";

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl Title {
    /// Standard product title block: shown iff a text was supplied.
    #[must_use]
    pub fn standard(text: Option<&str>, left: &str, font_size: f64) -> Self {
        Self {
            id: None,
            show: text.is_some(),
            text: text.map(str::to_owned),
            left: Some(left.to_owned()),
            text_align: Some("left".to_owned()),
            text_style: Some(TextStyle {
                font_family: Some(TITLE_FONT_FAMILY.to_owned()),
                font_size: Some(font_size),
                font_weight: Some("400".to_owned()),
            }),
        }
    }
}

/// One legend entry, optionally with a custom icon path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LegendEntry {
    Name(String),
    WithIcon { name: String, icon: String },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    pub data: Vec<LegendEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_gap: Option<f64>,
}

/// Grid offsets accept both pixel counts and percentage strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GridOffset {
    Px(f64),
    Pct(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contain_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<GridOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<GridOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<GridOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<GridOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<GridOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_style: Option<ShadowStyle>,
}

impl AxisPointer {
    /// The half-opacity shadow pointer used by bar charts.
    #[must_use]
    pub fn shadow() -> Self {
        Self {
            kind: "shadow".to_owned(),
            shadow_style: Some(ShadowStyle {
                opacity: Some(0.5),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TooltipTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<TooltipFormatter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomType {
    Inside,
    Slider,
}

/// One `dataZoom` descriptor: the windowed-viewport contract with the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoom {
    #[serde(rename = "type")]
    pub kind: ZoomType,
    pub start: f64,
    pub end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_on_mouse_wheel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_formatter: Option<SliderLabelFormatter>,
}
