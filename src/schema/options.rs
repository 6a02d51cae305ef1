//! The top-level option object and the partial update shape.

use serde::Serialize;

use crate::error::{ChartError, ChartResult};
use crate::schema::axis::Axis;
use crate::schema::components::{DataZoom, Grid, Legend, Title, Tooltip};
use crate::schema::series::{Series, SeriesLabel};
use crate::schema::toolbox::Toolbox;

/// Complete declarative configuration handed to the rendering engine.
///
/// Serialized field names match the engine's documented option schema
/// (`series` / `xAxis` / `yAxis` / `legend` / `tooltip` / `toolbox` /
/// `dataZoom`); optional blocks are omitted rather than emitted as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_zoom: Vec<DataZoom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbox: Option<Toolbox>,
}

impl ChartOptions {
    /// Empty options shell to be filled by a builder.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            color: None,
            series: Vec::new(),
            x_axis: None,
            y_axis: None,
            grid: None,
            legend: None,
            title: None,
            tooltip: None,
            data_zoom: Vec::new(),
            toolbox: None,
        }
    }

    /// Serializes the options to pretty JSON for host hand-off or debugging.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }
}

/// Partial configuration update re-issued through the engine's `setOption`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsPatch {
    pub series: Vec<SeriesPatch>,
}

/// Per-series slice of an [`OptionsPatch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPatch {
    pub label: SeriesLabel,
}
