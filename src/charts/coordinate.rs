//! Coordinate line chart builder: three fixed groups (reference, pre,
//! post) plotted as smooth x/y tuple series over value axes.

use tracing::debug;

use crate::charts::props::CoordinateChartProps;
use crate::charts::toolbox::{DEFAULT_RIGHT, build_toolbox};
use crate::charts::{BuiltChart, ChartEvents};
use crate::core::Coordinate;
use crate::error::{ChartError, ChartResult};
use crate::schema::axis::{Axis, AxisTick, AxisType, NameTextStyle, TextStyle};
use crate::schema::components::{Legend, LegendEntry, TITLE_FONT_FAMILY, Title};
use crate::schema::options::ChartOptions;
use crate::schema::series::{LineKind, LineStyle, Series, SeriesData, SeriesType};

/// Legend icon for the dashed reference series.
const DASHED_ICON: &str = "path://M180 1000 l0 -40 200 0 200 0 0 40 0 40 -200 0 -200 0 0 -40z, \
     M810 1000 l0 -40 200 0 200 0 0 40 0 40 -200 0 -200 0 0 -40zm, M1440 1000 l0 \
     -40 200 0 200 0 0 40 0 40 -200 0 -200 0 0 -40z";

const DEFAULT_AXIS_MAX: f64 = 8.0;

fn to_tuples(group: &[Coordinate]) -> SeriesData {
    SeriesData::Tuples(group.iter().map(|point| [point.x, point.y]).collect())
}

fn name_padding(y_range_values: Option<f64>) -> [f64; 4] {
    if y_range_values.is_some() {
        [150.0, 0.0, 0.0, 0.0]
    } else {
        [20.0, 0.0, 0.0, 0.0]
    }
}

pub fn build_coordinate_line_chart(props: &CoordinateChartProps) -> ChartResult<BuiltChart> {
    let groups = &props.coordinates;
    if groups.reference.is_empty() && groups.pre.is_empty() && groups.post.is_empty() {
        return Err(ChartError::EmptyData {
            chart: "coordinate",
        });
    }
    debug!(
        reference = groups.reference.len(),
        pre = groups.pre.len(),
        post = groups.post.len(),
        "building coordinate line chart options"
    );

    let mut reference = Series::new(SeriesType::Line, to_tuples(&groups.reference));
    reference.name = Some(props.legend_names[0].clone());
    reference.show_symbol = Some(false);
    reference.smooth = Some(true);
    reference.line_style = Some(LineStyle {
        width: Some(1.5),
        kind: Some(LineKind::Dashed),
        ..LineStyle::default()
    });

    let mut pre = Series::new(SeriesType::Line, to_tuples(&groups.pre));
    pre.name = Some(props.legend_names[1].clone());
    pre.show_symbol = Some(false);
    pre.smooth = Some(true);

    let mut post = Series::new(SeriesType::Line, to_tuples(&groups.post));
    post.name = Some(props.legend_names[2].clone());
    post.show_symbol = Some(false);
    post.smooth = Some(true);

    let mut y_axis = Axis::new(AxisType::Value);
    y_axis.name = Some(props.coordinate_names.y.clone());
    y_axis.name_gap = Some(10.0);
    y_axis.min = Some(props.y_range_values.map_or(0.0, |range| -range));
    y_axis.max = Some(props.y_range_values.unwrap_or(DEFAULT_AXIS_MAX));
    y_axis.interval = Some(2.0);

    let mut x_axis = Axis::new(AxisType::Value);
    x_axis.name = Some(props.coordinate_names.x.clone());
    x_axis.name_text_style = Some(NameTextStyle {
        vertical_align: Some(
            if props.y_range_values.is_some() {
                "top"
            } else {
                "end"
            }
            .to_owned(),
        ),
        padding: Some(name_padding(props.y_range_values)),
    });
    x_axis.name_gap = Some(-56.0);
    x_axis.min = Some(0.0);
    x_axis.max = Some(props.x_max_value.unwrap_or(DEFAULT_AXIS_MAX));
    x_axis.interval = Some(2.0);
    x_axis.axis_tick = Some(AxisTick {
        show: Some(false),
        ..AxisTick::default()
    });

    let legend = Legend {
        top: Some(props.legend_position.unwrap_or(26.0)),
        icon: Some("line".to_owned()),
        item_gap: Some(30.0),
        data: vec![
            LegendEntry::WithIcon {
                name: props.legend_names[0].clone(),
                icon: DASHED_ICON.to_owned(),
            },
            LegendEntry::Name(props.legend_names[1].clone()),
            LegendEntry::Name(props.legend_names[2].clone()),
        ],
        ..Legend::default()
    };

    // With the save-with-title tool attached the title starts hidden; the
    // host re-enables it around exports.
    let has_title_tool = props
        .toolbox
        .as_ref()
        .is_some_and(|toolbox| toolbox.save_as_image_with_title.is_some());
    let show_title = props.show_title.unwrap_or(!has_title_tool);

    let title = Title {
        id: None,
        show: show_title,
        text: props.title.clone(),
        left: Some("6.2%".to_owned()),
        text_align: Some("left".to_owned()),
        text_style: Some(TextStyle {
            font_family: Some(TITLE_FONT_FAMILY.to_owned()),
            font_size: Some(16.0),
            font_weight: Some("400".to_owned()),
        }),
    };

    let mut grid = props.grid.clone().unwrap_or_default();
    grid.contain_label.get_or_insert(true);

    let options = ChartOptions {
        color: props.colors.clone(),
        series: vec![reference, pre, post],
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        grid: Some(grid),
        legend: Some(legend),
        title: Some(title),
        tooltip: None,
        data_zoom: Vec::new(),
        toolbox: build_toolbox(props.toolbox.as_ref(), DEFAULT_RIGHT),
    };

    Ok(BuiltChart {
        options,
        events: ChartEvents::none(),
    })
}
