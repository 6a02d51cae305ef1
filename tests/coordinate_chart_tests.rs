use echarts_composer::schema::{AxisType, LineKind, SeriesData};
use echarts_composer::{
    AxisNames, ChartError, Coordinate, CoordinateChartProps, CoordinateGroups, ToolboxOptions,
    build_coordinate_line_chart,
};

fn groups() -> CoordinateGroups {
    let curve = |offset: f64| {
        (0..5)
            .map(|i| Coordinate::new(f64::from(i), f64::from(i) + offset))
            .collect()
    };
    CoordinateGroups::new(curve(0.0), curve(1.0), curve(2.0))
}

fn props() -> CoordinateChartProps {
    CoordinateChartProps::new(
        groups(),
        ["target".to_owned(), "before".to_owned(), "after".to_owned()],
        AxisNames::new("weeks", "score"),
    )
}

#[test]
fn all_empty_groups_are_rejected() {
    let empty = CoordinateGroups::new(Vec::new(), Vec::new(), Vec::new());
    let props = CoordinateChartProps::new(
        empty,
        ["a".to_owned(), "b".to_owned(), "c".to_owned()],
        AxisNames::new("x", "y"),
    );
    let err = build_coordinate_line_chart(&props).expect_err("must fail");
    assert!(matches!(err, ChartError::EmptyData { chart: "coordinate" }));
}

#[test]
fn three_smooth_series_in_group_order() {
    let built = build_coordinate_line_chart(&props()).expect("build");

    assert_eq!(built.options.series.len(), 3);
    let names: Vec<Option<&str>> = built
        .options
        .series
        .iter()
        .map(|s| s.name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("target"), Some("before"), Some("after")]);

    for series in &built.options.series {
        assert_eq!(series.smooth, Some(true));
        assert_eq!(series.show_symbol, Some(false));
        match &series.data {
            SeriesData::Tuples(tuples) => assert_eq!(tuples.len(), 5),
            _ => panic!("coordinate series carries x/y tuples"),
        }
    }
}

#[test]
fn reference_series_is_dashed_and_its_legend_icon_matches() {
    let built = build_coordinate_line_chart(&props()).expect("build");

    let reference = &built.options.series[0];
    let style = reference.line_style.as_ref().expect("line style");
    assert_eq!(style.kind, Some(LineKind::Dashed));
    assert_eq!(style.width, Some(1.5));
    assert!(built.options.series[1].line_style.is_none());

    let legend = built.options.legend.expect("legend");
    assert_eq!(legend.data.len(), 3);
    assert_eq!(legend.top, Some(26.0));
}

#[test]
fn both_axes_are_value_scales_with_default_bounds() {
    let built = build_coordinate_line_chart(&props()).expect("build");

    let x_axis = built.options.x_axis.expect("x axis");
    assert_eq!(x_axis.kind, AxisType::Value);
    assert_eq!(x_axis.name.as_deref(), Some("weeks"));
    assert_eq!(x_axis.min, Some(0.0));
    assert_eq!(x_axis.max, Some(8.0));

    let y_axis = built.options.y_axis.expect("y axis");
    assert_eq!(y_axis.kind, AxisType::Value);
    assert_eq!(y_axis.min, Some(0.0));
    assert_eq!(y_axis.max, Some(8.0));
    assert_eq!(y_axis.interval, Some(2.0));
}

#[test]
fn y_range_centers_the_scale_on_zero() {
    let built =
        build_coordinate_line_chart(&props().with_y_range_values(4.0)).expect("build");

    let y_axis = built.options.y_axis.expect("y axis");
    assert_eq!(y_axis.min, Some(-4.0));
    assert_eq!(y_axis.max, Some(4.0));

    let name_style = built
        .options
        .x_axis
        .expect("x axis")
        .name_text_style
        .expect("name style");
    assert_eq!(name_style.vertical_align.as_deref(), Some("top"));
    assert_eq!(name_style.padding, Some([150.0, 0.0, 0.0, 0.0]));
}

#[test]
fn title_hides_when_the_export_tool_owns_it() {
    let with_tool = props()
        .with_title("Progress")
        .with_toolbox(ToolboxOptions::new().with_save_as_image_with_title("export"));
    let built = build_coordinate_line_chart(&with_tool).expect("build");
    assert!(!built.options.title.expect("title").show);

    let plain = props().with_title("Progress");
    let built = build_coordinate_line_chart(&plain).expect("build");
    assert!(built.options.title.expect("title").show);

    let forced = props()
        .with_title("Progress")
        .with_toolbox(ToolboxOptions::new().with_save_as_image_with_title("export"))
        .with_show_title(true);
    let built = build_coordinate_line_chart(&forced).expect("build");
    assert!(built.options.title.expect("title").show);
}

#[test]
fn toolbox_features_keep_button_order() {
    let built = build_coordinate_line_chart(
        &props().with_toolbox(
            ToolboxOptions::new()
                .with_save_as_image_with_title("export")
                .with_save_as_image("save")
                .with_data_view("table"),
        ),
    )
    .expect("build");

    let toolbox = built.options.toolbox.expect("toolbox");
    let keys: Vec<&str> = toolbox.feature.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["myTool", "saveAsImage", "dataView"]);
    assert_eq!(toolbox.right, "9.52%");
    assert!(!toolbox.show_title);
}
