use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use echarts_composer::charts::BarClickEvent;
use echarts_composer::schema::{AxisData, LabelPosition, SeriesData, StyledValue};
use echarts_composer::{
    AxisKind, ChartError, Entry, HorizontalBarChartProps, TooltipSpec, ValueFormat,
    build_horizontal_bar_chart,
};

fn entries(points: &[(&str, f64)]) -> Vec<Entry> {
    points
        .iter()
        .map(|(label, result)| Entry::new(*label, *result).expect("entry"))
        .collect()
}

fn bar_points(built: &echarts_composer::charts::BuiltChart) -> &[StyledValue] {
    match &built.options.series[1].data {
        SeriesData::Styled(points) => points,
        _ => panic!("data bars carry styled points"),
    }
}

#[test]
fn empty_data_is_rejected() {
    let err =
        build_horizontal_bar_chart(&HorizontalBarChartProps::new(Vec::new())).expect_err("fail");
    assert!(matches!(
        err,
        ChartError::EmptyData {
            chart: "horizontal-bar"
        }
    ));
}

#[test]
fn bars_and_categories_are_reversed() {
    let props = HorizontalBarChartProps::new(entries(&[("first", 10.0), ("second", 100.0)]));
    let built = build_horizontal_bar_chart(&props).expect("build");

    let points = bar_points(&built);
    assert_eq!(points[0].value, 100.0);
    assert_eq!(points[1].value, 10.0);

    match built.options.y_axis.as_ref().expect("y axis").data.as_ref().expect("data") {
        AxisData::Categories(labels) => assert_eq!(labels, &["second", "first"]),
        AxisData::Dates(_) => panic!("bar categories are strings"),
    }
}

#[test]
fn short_bars_get_outside_labels() {
    let props = HorizontalBarChartProps::new(entries(&[("short", 10.0), ("long", 100.0)]));
    let built = build_horizontal_bar_chart(&props).expect("build");

    let points = bar_points(&built);
    // Reversed: index 1 holds the value 10, short enough for an outside label.
    assert!(points[0].label.is_none());
    let label = points[1].label.as_ref().expect("outside label");
    assert_eq!(label.position, Some(LabelPosition::Right));
}

#[test]
fn tick_infos_lower_the_outside_threshold() {
    let props = HorizontalBarChartProps::new(entries(&[("a", 20.0), ("b", 100.0)]))
        .with_show_tick_infos(true);
    let built = build_horizontal_bar_chart(&props).expect("build");

    // 20 clears the tick-infos threshold of 15; no outside label.
    assert!(bar_points(&built)[1].label.is_none());
}

#[test]
fn time_axis_uses_the_percentage_rule() {
    // 10 of 100 is 10%, under the percentage threshold.
    let props = HorizontalBarChartProps::new(entries(&[("a", 10.0), ("b", 100.0)]))
        .with_x_kind(AxisKind::Time);
    let built = build_horizontal_bar_chart(&props).expect("build");
    assert!(bar_points(&built)[1].label.is_some());

    // 60 of 100 is 60%: long enough to hold its own label.
    let props = HorizontalBarChartProps::new(entries(&[("a", 60.0), ("b", 100.0)]))
        .with_x_kind(AxisKind::Time);
    let built = build_horizontal_bar_chart(&props).expect("build");
    assert!(bar_points(&built)[1].label.is_none());
}

#[test]
fn equal_bars_fall_back_to_the_absolute_rule() {
    // Every bar sits at the domain max; the percentage branch is skipped.
    let props = HorizontalBarChartProps::new(entries(&[("a", 10.0), ("b", 10.0)]))
        .with_x_kind(AxisKind::Time);
    let built = build_horizontal_bar_chart(&props).expect("build");

    for point in bar_points(&built) {
        assert!(point.label.is_some());
    }
}

#[test]
fn background_track_mirrors_the_axis_maximum() {
    let props = HorizontalBarChartProps::new(entries(&[("a", 30.0), ("b", 70.0)]))
        .with_color("#336699");
    let built = build_horizontal_bar_chart(&props).expect("build");

    let background = &built.options.series[0];
    assert_eq!(background.bar_gap.as_deref(), Some("-100%"));
    assert_eq!(background.silent, Some(true));
    assert_eq!(background.animation, Some(false));
    assert_eq!(background.bar_max_width, Some(20.0));
    match &background.data {
        SeriesData::Values(values) => assert_eq!(values, &[70.0, 70.0]),
        _ => panic!("background track carries plain values"),
    }

    let normal = background
        .item_style
        .as_ref()
        .expect("item style")
        .normal
        .as_ref()
        .expect("nested style");
    assert_eq!(normal.color.as_deref(), Some("#ececec"));
    assert_eq!(normal.bar_border_radius, Some(10.0));
    assert_eq!(normal.border_color.as_deref(), Some("#336699"));
}

#[test]
fn percentage_format_fixes_the_axis_at_one_hundred() {
    let props = HorizontalBarChartProps::new(entries(&[("a", 30.0)]))
        .with_x_format(ValueFormat::Suffix("%".to_owned()));
    let built = build_horizontal_bar_chart(&props).expect("build");

    assert_eq!(built.options.x_axis.expect("x axis").max, Some(100.0));
    match &built.options.series[0].data {
        SeriesData::Values(values) => assert_eq!(values, &[100.0]),
        _ => panic!("background track carries plain values"),
    }
}

#[test]
fn tick_infos_toggle_axis_chrome() {
    let plain =
        build_horizontal_bar_chart(&HorizontalBarChartProps::new(entries(&[("a", 1.0)])))
            .expect("build");
    let plain_x = plain.options.x_axis.expect("x axis");
    assert_eq!(plain_x.axis_label.expect("axis label").show, Some(false));
    assert_eq!(plain_x.split_line.expect("split line").show, Some(false));

    let ticked = build_horizontal_bar_chart(
        &HorizontalBarChartProps::new(entries(&[("a", 1.0)])).with_show_tick_infos(true),
    )
    .expect("build");
    let ticked_x = ticked.options.x_axis.expect("x axis");
    assert_eq!(ticked_x.axis_label.expect("axis label").show, Some(true));
    assert_eq!(ticked_x.split_line.expect("split line").show, Some(true));
    assert!(ticked.options.series[0].bar_max_width.is_none());
}

#[test]
fn category_labels_truncate_at_the_configured_width() {
    let props = HorizontalBarChartProps::new(entries(&[("a long category name", 1.0)]))
        .with_label_word_size(5);
    let built = build_horizontal_bar_chart(&props).expect("build");

    let formatter = built
        .options
        .y_axis
        .expect("y axis")
        .axis_label
        .expect("axis label")
        .formatter
        .expect("formatter");
    assert_eq!(formatter.format_category("a long category name"), "a lon...");
}

#[test]
fn per_entry_identity_and_style_survive() {
    let entry = Entry::new("flagged", 5.0)
        .expect("entry")
        .with_item_id("row-7");
    let built = build_horizontal_bar_chart(&HorizontalBarChartProps::new(vec![entry]))
        .expect("build");
    assert_eq!(bar_points(&built)[0].item_id.as_deref(), Some("row-7"));
}

#[test]
fn click_handler_passes_through_to_the_events() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    let props = HorizontalBarChartProps::new(entries(&[("a", 1.0)]))
        .with_on_click(Arc::new(move |_event| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
    let built = build_horizontal_bar_chart(&props).expect("build");

    let handler = built.events.click.expect("click handler");
    handler(&BarClickEvent {
        name: "a".to_owned(),
        value: 1.0,
        item_id: None,
        data_index: 0,
    });
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert!(built.events.data_zoom.is_none());
}

#[test]
fn tooltip_uses_the_shadow_pointer() {
    let props = HorizontalBarChartProps::new(entries(&[("a", 1.0)]))
        .with_tooltip(TooltipSpec::new("Team", "Total"));
    let built = build_horizontal_bar_chart(&props).expect("build");

    let tooltip = built.options.tooltip.expect("tooltip");
    let pointer = tooltip.axis_pointer.expect("axis pointer");
    assert_eq!(pointer.kind, "shadow");
}
