//! Horizontal bar chart builder.
//!
//! Categories are reversed because the engine draws them bottom-to-top. A
//! cosmetic full-width background track is rendered beneath the data bars.
//! Point labels are only drawn outside a bar when the bar is too short to
//! hold them; the thresholds (50, 15, percentage 15) reproduce the
//! observed product behavior, including the divergent time-axis branch.

use tracing::debug;

use crate::charts::props::HorizontalBarChartProps;
use crate::charts::tooltip::horizontal_bar_tooltip;
use crate::charts::toolbox::{BAR_DEFAULT_RIGHT, build_toolbox};
use crate::charts::{BuiltChart, ChartEvents};
use crate::core::{AxisKind, ValueFormat, ValueKind, value_domain};
use crate::error::{ChartError, ChartResult};
use crate::schema::axis::{Axis, AxisData, AxisLabel, AxisLine, AxisTick, AxisType, SplitLine};
use crate::schema::components::Title;
use crate::schema::formatter::{LabelFormatter, SeriesLabelFormatter};
use crate::schema::options::ChartOptions;
use crate::schema::series::{
    ItemStyle, LabelPosition, Series, SeriesData, SeriesLabel, SeriesType, StyledValue,
};

const BACKGROUND_COLOR: &str = "#ececec";
const TITLE_LEFT: &str = "5.9%";
/// Absolute value under which a bar gets an outside label (default mode).
const OUTSIDE_LABEL_ABS: f64 = 50.0;
/// Absolute value under which a bar gets an outside label with tick infos.
const OUTSIDE_LABEL_ABS_TICKS: f64 = 15.0;
/// Percentage of the axis width under which a bar gets an outside label.
const OUTSIDE_LABEL_PCT: f64 = 15.0;

fn outside_label() -> SeriesLabel {
    SeriesLabel {
        position: Some(LabelPosition::Right),
        distance: Some(1.0),
        ..SeriesLabel::default()
    }
}

pub fn build_horizontal_bar_chart(props: &HorizontalBarChartProps) -> ChartResult<BuiltChart> {
    if props.data.is_empty() {
        return Err(ChartError::EmptyData {
            chart: "horizontal-bar",
        });
    }

    let domain = value_domain(&props.data);
    let is_percent = matches!(&props.x_format, ValueFormat::Suffix(suffix) if suffix == "%");
    let axis_max = if is_percent { 100.0 } else { domain.max };
    debug!(
        bars = props.data.len(),
        axis_max,
        show_tick_infos = props.show_tick_infos,
        "building horizontal bar chart options"
    );

    let abs_threshold = if props.show_tick_infos {
        OUTSIDE_LABEL_ABS_TICKS
    } else {
        OUTSIDE_LABEL_ABS
    };

    let mut points: Vec<StyledValue> = props
        .data
        .iter()
        .map(|entry| {
            // Percentage-based suppression only applies on time axes, and is
            // skipped when the point sits at the domain max (all-equal case
            // falls back to the absolute threshold).
            let label = if entry.result != domain.max && props.x_kind == AxisKind::Time {
                let percentage = entry.result * 100.0 / domain.max;
                (percentage < OUTSIDE_LABEL_PCT).then(outside_label)
            } else {
                (entry.result <= abs_threshold).then(outside_label)
            };

            StyledValue {
                value: entry.result,
                label,
                item_style: entry.style.as_ref().map(|style| ItemStyle {
                    color: style.color.clone(),
                    opacity: style.opacity,
                    border_color: style.border_color.clone(),
                    ..ItemStyle::default()
                }),
                item_id: entry.item_id.clone(),
            }
        })
        .collect();
    points.reverse();

    let mut category_labels: Vec<String> =
        props.data.iter().map(|entry| entry.label.clone()).collect();
    category_labels.reverse();

    let background_values = vec![axis_max; props.data.len()];
    let bar_max_width = (!props.show_tick_infos).then_some(20.0);
    let bar_border_radius = if props.show_tick_infos { 0.0 } else { 10.0 };

    let mut background = Series::new(SeriesType::Bar, SeriesData::Values(background_values));
    background.bar_gap = Some("-100%".to_owned());
    background.x_axis_index = Some(0);
    background.animation = Some(false);
    background.bar_width = Some("80%".to_owned());
    background.bar_max_width = bar_max_width;
    background.silent = Some(true);
    background.item_style = Some(ItemStyle {
        normal: Some(Box::new(ItemStyle {
            color: Some(BACKGROUND_COLOR.to_owned()),
            bar_border_radius: Some(bar_border_radius),
            opacity: props.show_tick_infos.then_some(0.5),
            border_color: if props.show_tick_infos {
                None
            } else {
                props.color.clone()
            },
            ..ItemStyle::default()
        })),
        ..ItemStyle::default()
    });

    let bar_value_kind = match props.x_kind {
        AxisKind::Time => ValueKind::Time,
        AxisKind::Category => ValueKind::Value,
    };
    let mut bars = Series::new(SeriesType::Bar, SeriesData::Styled(points));
    bars.x_axis_index = Some(0);
    bars.bar_width = Some("80%".to_owned());
    bars.bar_max_width = bar_max_width;
    bars.item_style = Some(ItemStyle {
        color: props.color.clone(),
        bar_border_radius: Some(bar_border_radius),
        ..ItemStyle::default()
    });
    bars.label = Some(SeriesLabel {
        formatter: Some(SeriesLabelFormatter::new(
            bar_value_kind,
            props.x_format.clone(),
        )),
        position: Some(LabelPosition::InsideRight),
        font_size: Some(if props.show_tick_infos { 14.0 } else { 11.0 }),
        font_weight: Some("400".to_owned()),
        color: Some("black".to_owned()),
        show: Some(true),
        ..SeriesLabel::default()
    });

    let show_ticks = props.show_tick_infos;
    let mut x_axis = Axis::new(AxisType::Value);
    x_axis.max = Some(axis_max);
    x_axis.axis_tick = Some(AxisTick {
        show: Some(show_ticks),
        ..AxisTick::default()
    });
    x_axis.axis_line = Some(AxisLine {
        show: Some(show_ticks),
    });
    x_axis.axis_label = Some(AxisLabel {
        show: Some(show_ticks),
        formatter: Some(match props.x_kind {
            AxisKind::Time => LabelFormatter::Duration,
            AxisKind::Category => LabelFormatter::Value(props.x_format.clone()),
        }),
        ..AxisLabel::default()
    });
    x_axis.split_line = Some(if show_ticks {
        SplitLine::dotted()
    } else {
        SplitLine::hidden()
    });

    let mut y_axis = Axis::new(AxisType::Category);
    y_axis.data = Some(AxisData::Categories(category_labels));
    y_axis.axis_line = Some(AxisLine {
        show: Some(show_ticks),
    });
    y_axis.axis_label = Some(AxisLabel {
        formatter: Some(LabelFormatter::Truncate {
            max: props.label_word_size.unwrap_or(12),
        }),
        font_weight: props.bold_tick_label.then(|| "400".to_owned()),
        ..AxisLabel::default()
    });
    y_axis.axis_tick = Some(AxisTick {
        show: Some(show_ticks),
        align_with_label: Some(true),
    });
    y_axis.split_line = Some(if show_ticks {
        SplitLine::dotted()
    } else {
        SplitLine::hidden()
    });

    let mut grid = props.grid.clone().unwrap_or_default();
    grid.contain_label.get_or_insert(true);

    let tooltip = props
        .tooltip
        .as_ref()
        .map(|spec| horizontal_bar_tooltip(spec, props.x_kind, &props.x_format));

    let options = ChartOptions {
        color: None,
        series: vec![background, bars],
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        grid: Some(grid),
        legend: None,
        title: Some(Title::standard(
            props.title.as_deref(),
            props.margin_left_title.as_deref().unwrap_or(TITLE_LEFT),
            props.title_font_size.unwrap_or(16.0),
        )),
        tooltip,
        data_zoom: Vec::new(),
        toolbox: build_toolbox(
            props.toolbox.as_ref(),
            props
                .margin_right_toolbox
                .as_deref()
                .unwrap_or(BAR_DEFAULT_RIGHT),
        ),
    };

    Ok(BuiltChart {
        options,
        events: ChartEvents {
            data_zoom: None,
            click: props.on_click.clone(),
        },
    })
}
