use chrono::NaiveDate;

use echarts_composer::schema::{AxisData, GridOffset, SeriesData};
use echarts_composer::{
    AreaChartProps, AxisKind, ChartError, Entry, LineMark, TooltipSpec, ValueFormat, ValueKind,
    build_area_chart,
};

fn entries(points: &[(&str, f64)]) -> Vec<Entry> {
    points
        .iter()
        .map(|(label, result)| Entry::new(*label, *result).expect("entry"))
        .collect()
}

#[test]
fn empty_data_is_rejected() {
    let err = build_area_chart(&AreaChartProps::new(Vec::new())).expect_err("must fail");
    assert!(matches!(err, ChartError::EmptyData { chart: "area" }));
}

#[test]
fn monthly_time_chart_parses_labels_and_stays_fixed() {
    let props = AreaChartProps::new(entries(&[("2023-01", 5.0), ("2023-02", 9.0)]))
        .with_x_kind(AxisKind::Time)
        .with_date_format("yyyy-MM");
    let built = build_area_chart(&props).expect("build");

    let x_axis = built.options.x_axis.expect("x axis");
    match x_axis.data.expect("x data") {
        AxisData::Dates(dates) => {
            assert_eq!(
                dates,
                vec![
                    NaiveDate::from_ymd_opt(2023, 1, 2).expect("date"),
                    NaiveDate::from_ymd_opt(2023, 2, 2).expect("date"),
                ]
            );
        }
        AxisData::Categories(_) => panic!("time axis must carry dates"),
    }

    match &built.options.series[0].data {
        SeriesData::Values(values) => assert_eq!(values, &[5.0, 9.0]),
        _ => panic!("area series carries plain values"),
    }

    let y_axis = built.options.y_axis.expect("y axis");
    assert_eq!(y_axis.max, Some(9.0));

    // Two points fit the initial window; no zoom descriptors.
    assert!(built.options.data_zoom.is_empty());
    assert!(built.events.data_zoom.is_some());
}

#[test]
fn category_chart_keeps_raw_labels() {
    let props = AreaChartProps::new(entries(&[("north", 1.0), ("south", 2.0)]));
    let built = build_area_chart(&props).expect("build");

    match built.options.x_axis.expect("x axis").data.expect("x data") {
        AxisData::Categories(labels) => assert_eq!(labels, vec!["north", "south"]),
        AxisData::Dates(_) => panic!("category axis must carry raw labels"),
    }
}

#[test]
fn unparseable_time_label_fails_the_build() {
    let props = AreaChartProps::new(entries(&[("garbage", 1.0)]))
        .with_x_kind(AxisKind::Time)
        .with_date_format("yyyy-MM");
    let err = build_area_chart(&props).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidDate { .. }));
}

#[test]
fn long_monthly_collections_become_scrollable() {
    let data: Vec<Entry> = (1..=24)
        .map(|month| {
            let label = format!("20{:02}-01", month);
            Entry::new(label, f64::from(month)).expect("entry")
        })
        .collect();
    let props = AreaChartProps::new(data)
        .with_x_kind(AxisKind::Time)
        .with_date_format("yyyy-MM");
    let built = build_area_chart(&props).expect("build");

    assert_eq!(built.options.data_zoom.len(), 2);
    assert_eq!(built.options.data_zoom[0].start, built.options.data_zoom[1].start);
    assert_eq!(built.options.data_zoom[0].end, 100.0);
}

#[test]
fn line_mark_adds_series_legend_and_ceiling() {
    let props = AreaChartProps::new(entries(&[("a", 3.0), ("b", 4.0)]))
        .with_line_mark(LineMark::new(10.0, "red", "goal"));
    let built = build_area_chart(&props).expect("build");

    assert_eq!(built.options.series.len(), 2);
    let mark = &built.options.series[1];
    assert_eq!(mark.name.as_deref(), Some("goal"));
    assert_eq!(mark.symbol_size, Some(0.0));
    assert_eq!(mark.show_symbol, Some(false));
    match &mark.data {
        SeriesData::Values(values) => assert_eq!(values, &[10.0, 10.0]),
        _ => panic!("mark series repeats its constant"),
    }

    // The mark raises the y ceiling above the data maximum.
    assert_eq!(built.options.y_axis.expect("y axis").max, Some(10.0));

    let legend = built.options.legend.expect("legend");
    assert_eq!(legend.data.len(), 1);
    assert_eq!(built.options.color, Some(vec!["red".to_owned()]));
}

#[test]
fn mark_below_the_data_keeps_the_data_maximum() {
    let props = AreaChartProps::new(entries(&[("a", 30.0)]))
        .with_line_mark(LineMark::new(10.0, "red", "goal"));
    let built = build_area_chart(&props).expect("build");
    assert_eq!(built.options.y_axis.expect("y axis").max, Some(30.0));
}

#[test]
fn chart_without_mark_has_no_legend() {
    let built = build_area_chart(&AreaChartProps::new(entries(&[("a", 1.0)]))).expect("build");
    assert!(built.options.legend.is_none());
    assert_eq!(built.options.series.len(), 1);
}

#[test]
fn styling_flows_into_the_main_series() {
    let props = AreaChartProps::new(entries(&[("a", 1.0)])).with_color("#00aa55");
    let built = build_area_chart(&props).expect("build");

    let main = &built.options.series[0];
    let area = main.area_style.as_ref().expect("area style");
    assert_eq!(area.color.as_deref(), Some("#00aa55"));
    assert_eq!(area.opacity, Some(0.2));
    assert_eq!(
        main.line_style.as_ref().expect("line style").color.as_deref(),
        Some("#00aa55")
    );
}

#[test]
fn default_grid_reserves_slider_space() {
    let built = build_area_chart(&AreaChartProps::new(entries(&[("a", 1.0)]))).expect("build");
    let grid = built.options.grid.expect("grid");
    assert_eq!(grid.show, Some(true));
    assert_eq!(grid.bottom, Some(GridOffset::Px(60.0)));
}

#[test]
fn tooltip_and_density_policy_carry_the_value_format() {
    let props = AreaChartProps::new(entries(&[("a", 90.0)]))
        .with_value_kind(ValueKind::Time)
        .with_value_format(ValueFormat::DurationHours)
        .with_tooltip(TooltipSpec::new("Month", "Hours"));
    let built = build_area_chart(&props).expect("build");

    assert!(built.options.tooltip.is_some());
    let policy = built.events.data_zoom.expect("density policy");
    let patch = policy.on_zoom(echarts_composer::ZoomEvent::new(0.0, 1.0));
    let formatter = patch.series[0].label.formatter.as_ref().expect("formatter");
    assert_eq!(formatter.format(90.0), "1.5h");
}
