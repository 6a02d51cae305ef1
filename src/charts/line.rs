//! Multi-series line chart builder.
//!
//! The first collection drives the category axis; every collection becomes
//! one line series. A series named "ref" is drawn dashed. The optional
//! `axis_names` variant switches both axes to fixed value scales.

use tracing::debug;

use crate::charts::props::LineChartProps;
use crate::charts::tooltip::multi_series_tooltip;
use crate::charts::toolbox::{DEFAULT_RIGHT, build_toolbox};
use crate::charts::{BuiltChart, ChartEvents};
use crate::core::label_density::label_font_size;
use crate::core::time::axis_label_format;
use crate::core::zoom::data_zoom_policy;
use crate::core::{AxisKind, ValueKind};
use crate::error::{ChartError, ChartResult};
use crate::schema::axis::{Axis, AxisData, AxisLabel, AxisType, SplitLine, TextStyle};
use crate::schema::components::{Grid, GridOffset, Legend, LegendEntry, Title};
use crate::schema::formatter::LabelFormatter;
use crate::schema::options::ChartOptions;
use crate::schema::series::{
    LabelPosition, LineKind, LineStyle, Series, SeriesData, SeriesLabel, SeriesType,
};

/// Series name the product reserves for dashed reference lines.
const REFERENCE_SERIES_NAME: &str = "ref";
const TITLE_LEFT: &str = "6.2%";

pub fn build_line_chart(props: &LineChartProps) -> ChartResult<BuiltChart> {
    let first = props
        .series
        .first()
        .ok_or(ChartError::EmptyData { chart: "line" })?;
    if first.values.is_empty() {
        return Err(ChartError::EmptyData { chart: "line" });
    }

    let total = first.values.len();
    let date_format = props.date_format.as_deref();
    debug!(
        series = props.series.len(),
        points = total,
        "building line chart options"
    );

    let x_labels: Vec<String> = first.values.iter().map(|entry| entry.label.clone()).collect();

    let series: Vec<Series> = props
        .series
        .iter()
        .map(|named| {
            let values: Vec<f64> = named.values.iter().map(|entry| entry.result).collect();
            let mut series = Series::new(SeriesType::Line, SeriesData::Values(values));
            series.name = named.name.clone();
            series.show_symbol = Some(!props.disable_marks);
            series.smooth = Some(props.smooth);
            series.line_style = Some(LineStyle {
                width: Some(1.5),
                kind: (named.name.as_deref() == Some(REFERENCE_SERIES_NAME))
                    .then_some(LineKind::Dashed),
                ..LineStyle::default()
            });
            series.label = Some(SeriesLabel {
                show: Some(props.show_label),
                position: Some(LabelPosition::Top),
                font_size: Some(label_font_size(props.value_kind)),
                color: Some("black".to_owned()),
                distance: Some(1.1),
                ..SeriesLabel::default()
            });
            series
        })
        .collect();

    let font_label_size = props.font_label_size.unwrap_or(11.5);
    let mut x_axis = Axis::new(match props.axis_names {
        Some(_) => AxisType::Value,
        None => AxisType::Category,
    });
    x_axis.data = Some(AxisData::Categories(x_labels));
    x_axis.boundary_gap = Some(false);
    x_axis.show_grid = Some(true);
    x_axis.split_line = Some(SplitLine::dotted());
    x_axis.axis_label = Some(AxisLabel {
        formatter: matches!(props.x_kind, AxisKind::Time).then(|| LabelFormatter::Time {
            display: axis_label_format(date_format).to_owned(),
        }),
        rotate: Some(props.rotate_label.unwrap_or(0.0)),
        interval: Some("auto".to_owned()),
        text_style: Some(TextStyle {
            font_size: Some(font_label_size),
            ..TextStyle::default()
        }),
        ..AxisLabel::default()
    });
    if let Some(axis_names) = &props.axis_names {
        x_axis.name = Some(axis_names.x.clone());
        x_axis.min = Some(0.0);
        x_axis.max = Some(8.0);
        x_axis.interval = Some(2.0);
    }

    let mut y_axis = Axis::new(AxisType::Value);
    y_axis.split_line = Some(SplitLine::dotted());
    y_axis.axis_label = Some(AxisLabel {
        margin: Some(match props.value_kind {
            ValueKind::Time => 16.0,
            ValueKind::Value => 14.0,
        }),
        formatter: Some(match props.value_kind {
            ValueKind::Time => LabelFormatter::Duration,
            ValueKind::Value => LabelFormatter::Value(props.value_format.clone()),
        }),
        text_style: Some(TextStyle {
            font_size: Some(font_label_size),
            ..TextStyle::default()
        }),
        ..AxisLabel::default()
    });
    if let Some(axis_names) = &props.axis_names {
        y_axis.name = Some(axis_names.y.clone());
        y_axis.name_gap = Some(10.0);
        y_axis.min = Some(0.0);
        y_axis.max = Some(8.0);
        y_axis.interval = Some(1.0);
    }

    let legend = Legend {
        icon: Some("line".to_owned()),
        data: props
            .series
            .iter()
            .filter_map(|named| named.name.clone())
            .map(LegendEntry::Name)
            .collect(),
        ..Legend::default()
    };

    let mut grid = props.grid.clone().unwrap_or(Grid {
        bottom: Some(GridOffset::Px(60.0)),
        ..Grid::default()
    });
    grid.show = Some(true);

    let mut title = Title::standard(props.title.as_deref(), TITLE_LEFT, 16.0);
    title.id = props.title.as_ref().map(|text| format!("chart-{text}"));

    let tooltip = (!props.no_tooltip)
        .then(|| multi_series_tooltip(&props.value_format, props.x_kind, date_format));

    let options = ChartOptions {
        color: props.colors.clone(),
        series,
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        grid: Some(grid),
        legend: Some(legend),
        title: Some(title),
        tooltip,
        data_zoom: data_zoom_policy(total, date_format, props.scroll_start).into_vec(),
        toolbox: build_toolbox(props.toolbox.as_ref(), DEFAULT_RIGHT),
    };

    Ok(BuiltChart {
        options,
        events: ChartEvents::none(),
    })
}
