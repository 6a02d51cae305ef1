//! Series definitions of the engine option schema.
//!
//! Field names serialize exactly as the external engine documents them.

use serde::Serialize;

use crate::schema::formatter::SeriesLabelFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Bar,
}

/// Payload of one series: plain values, styled bar points, or x/y tuples.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Styled(Vec<StyledValue>),
    Tuples(Vec<[f64; 2]>),
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Styled(values) => values.len(),
            Self::Tuples(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single bar point carrying its own label placement and item style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledValue {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<SeriesLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelPosition {
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "insideRight")]
    InsideRight,
}

/// Point-label block shared by series definitions and density patches.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LabelPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<SeriesLabelFormatter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<LineKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_border_radius: Option<f64>,
    /// Legacy nested style block the engine still honors for bar tracks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<Box<ItemStyle>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: SeriesType,
    pub data: SeriesData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<SeriesLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_max_width: Option<f64>,
}

impl Series {
    /// Minimal series of the given type; everything else starts unset.
    #[must_use]
    pub fn new(kind: SeriesType, data: SeriesData) -> Self {
        Self {
            name: None,
            kind,
            data,
            label: None,
            line_style: None,
            area_style: None,
            item_style: None,
            smooth: None,
            show_symbol: None,
            symbol_size: None,
            hover_animation: None,
            animation: None,
            silent: None,
            x_axis_index: None,
            bar_gap: None,
            bar_width: None,
            bar_max_width: None,
        }
    }
}
