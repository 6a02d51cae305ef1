//! Area chart builder: one filled line series, an optional constant
//! reference line, adaptive point labels and a scrollable viewport for
//! long collections.

use tracing::debug;

use crate::charts::props::AreaChartProps;
use crate::charts::tooltip::single_series_tooltip;
use crate::charts::toolbox::{DEFAULT_RIGHT, build_toolbox};
use crate::charts::{BuiltChart, ChartEvents};
use crate::core::label_density::label_font_size;
use crate::core::time::{axis_label_format, to_date};
use crate::core::zoom::data_zoom_policy;
use crate::core::{AxisKind, LabelDensityPolicy, ValueKind, value_domain};
use crate::error::{ChartError, ChartResult};
use crate::schema::axis::{Axis, AxisData, AxisLabel, AxisType, SplitLine, TextStyle};
use crate::schema::components::{Grid, GridOffset, Legend, LegendEntry, Title};
use crate::schema::formatter::{LabelFormatter, SeriesLabelFormatter};
use crate::schema::options::ChartOptions;
use crate::schema::series::{
    AreaStyle, ItemStyle, LabelPosition, LineStyle, Series, SeriesData, SeriesLabel, SeriesType,
};

const DEFAULT_COLOR: &str = "blue";
const TITLE_LEFT: &str = "6.2%";

pub fn build_area_chart(props: &AreaChartProps) -> ChartResult<BuiltChart> {
    if props.data.is_empty() {
        return Err(ChartError::EmptyData { chart: "area" });
    }

    let total = props.data.len();
    let date_format = props.date_format.as_deref();
    debug!(points = total, x_kind = ?props.x_kind, "building area chart options");

    let y_data: Vec<f64> = props.data.iter().map(|entry| entry.result).collect();
    let x_data = match props.x_kind {
        AxisKind::Time => AxisData::Dates(
            props
                .data
                .iter()
                .map(|entry| to_date(&entry.label, date_format))
                .collect::<ChartResult<Vec<_>>>()?,
        ),
        AxisKind::Category => {
            AxisData::Categories(props.data.iter().map(|entry| entry.label.clone()).collect())
        }
    };

    let color = props.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_owned());
    let point_label = SeriesLabel {
        show: Some(true),
        position: Some(LabelPosition::Top),
        formatter: Some(SeriesLabelFormatter::new(
            props.value_kind,
            props.value_format.clone(),
        )),
        font_size: Some(label_font_size(props.value_kind)),
        color: Some("black".to_owned()),
        distance: Some(1.1),
        font_weight: None,
    };

    let mut main = Series::new(SeriesType::Line, SeriesData::Values(y_data));
    main.label = Some(point_label);
    main.line_style = Some(LineStyle {
        color: Some(color.clone()),
        ..LineStyle::default()
    });
    main.area_style = Some(AreaStyle {
        color: Some(color),
        opacity: Some(0.2),
    });
    main.item_style = props.color.clone().map(|color| ItemStyle {
        color: Some(color),
        ..ItemStyle::default()
    });

    let mut series = vec![main];
    if let Some(mark) = &props.line_mark {
        let mut mark_series = Series::new(
            SeriesType::Line,
            SeriesData::Values(vec![mark.value; total]),
        );
        mark_series.name = Some(mark.name.clone());
        mark_series.symbol_size = Some(0.0);
        mark_series.show_symbol = Some(false);
        mark_series.hover_animation = Some(false);
        mark_series.line_style = Some(LineStyle {
            color: Some(mark.color.clone()),
            ..LineStyle::default()
        });
        series.push(mark_series);
    }

    let font_label_size = props.font_label_size.unwrap_or(11.5);
    let mut x_axis = Axis::new(AxisType::Category);
    x_axis.boundary_gap = Some(false);
    x_axis.show_grid = Some(true);
    x_axis.data = Some(x_data);
    x_axis.split_line = Some(SplitLine::dotted());
    x_axis.axis_label = Some(AxisLabel {
        formatter: matches!(props.x_kind, AxisKind::Time).then(|| LabelFormatter::Time {
            display: axis_label_format(date_format).to_owned(),
        }),
        rotate: Some(props.rotate_label.unwrap_or(0.0)),
        text_style: Some(TextStyle {
            font_size: Some(font_label_size),
            ..TextStyle::default()
        }),
        ..AxisLabel::default()
    });

    let mut domain = value_domain(&props.data);
    if let Some(mark) = &props.line_mark {
        domain = domain.with_ceiling(mark.value);
    }
    let mut y_axis = Axis::new(AxisType::Value);
    y_axis.max = Some(domain.max);
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

    let mut grid = props.grid.clone().unwrap_or(Grid {
        bottom: Some(GridOffset::Px(60.0)),
        ..Grid::default()
    });
    grid.show = Some(true);

    let legend = props.line_mark.as_ref().map(|mark| Legend {
        x: Some("center".to_owned()),
        y: Some("bottom".to_owned()),
        icon: Some("line".to_owned()),
        top: Some(30.0),
        data: vec![LegendEntry::Name(mark.name.clone())],
        item_gap: Some(30.0),
    });

    let tooltip = props.tooltip.as_ref().map(|spec| {
        single_series_tooltip(
            spec,
            props.tooltip_complement.as_deref(),
            props.value_kind,
            &props.value_format,
            date_format,
        )
    });

    let options = ChartOptions {
        color: props
            .line_mark
            .as_ref()
            .map(|mark| vec![mark.color.clone()]),
        series,
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        grid: Some(grid),
        legend,
        title: Some(Title::standard(props.title.as_deref(), TITLE_LEFT, 16.0)),
        tooltip,
        data_zoom: data_zoom_policy(total, date_format, props.scroll_start).into_vec(),
        toolbox: build_toolbox(props.toolbox.as_ref(), DEFAULT_RIGHT),
    };

    let events = ChartEvents {
        data_zoom: Some(
            LabelDensityPolicy::new(total, props.value_kind)
                .with_value_format(props.value_format.clone())
                .with_scroll_start(props.scroll_start),
        ),
        click: None,
    };

    Ok(BuiltChart { options, events })
}
