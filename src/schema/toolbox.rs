//! Toolbox block: export and view-as-table buttons overlaid on a chart.

use indexmap::IndexMap;
use serde::Serialize;

use crate::schema::components::Tooltip;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAsImage {
    pub show: bool,
    pub title: String,
    #[serde(rename = "type")]
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SaveAsImage {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            show: true,
            title: title.into(),
            format: "png".to_owned(),
            icon: None,
        }
    }
}

/// Export button that first re-enables the chart title; the host binds the
/// toggle itself, this is only the declarative part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAsImageWithTitle {
    pub show: bool,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SaveAsImageWithTitle {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            show: true,
            title: title.into(),
            icon: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    pub show: bool,
    pub title: String,
    pub read_only: bool,
    pub lang: [String; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
}

impl DataView {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            show: true,
            title: title.into(),
            read_only: true,
            lang: [
                "data view".to_owned(),
                "turn back".to_owned(),
                "refresh".to_owned(),
            ],
            button_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolboxFeature {
    SaveAsImage(SaveAsImage),
    SaveAsImageWithTitle(SaveAsImageWithTitle),
    DataView(DataView),
}

/// The toolbox block. Features serialize in insertion order, which is why
/// the map is an `IndexMap` (the engine draws buttons in key order).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolbox {
    pub show_title: bool,
    pub right: String,
    pub feature: IndexMap<String, ToolboxFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}
