use approx::assert_relative_eq;
use echarts_composer::core::label_density::label_font_size;
use echarts_composer::{LabelDensityPolicy, ValueFormat, ValueKind, ZoomEvent};
use echarts_composer::schema::LabelPosition;

#[test]
fn density_limit_scales_with_point_count() {
    let policy = LabelDensityPolicy::new(100, ValueKind::Value);
    assert_relative_eq!(policy.density_limit(), 45.0);

    let policy = LabelDensityPolicy::new(100, ValueKind::Time);
    assert_relative_eq!(policy.density_limit(), 34.0);
}

#[test]
fn scroll_start_drives_the_numerator() {
    let policy = LabelDensityPolicy::new(100, ValueKind::Value).with_scroll_start(Some(10));
    // 10 * 100 + 400 over 100 points.
    assert_relative_eq!(policy.density_limit(), 14.0);
}

#[test]
fn narrow_window_shows_labels() {
    let policy = LabelDensityPolicy::new(100, ValueKind::Time);
    let patch = policy.on_zoom(ZoomEvent::new(0.0, 10.0));
    assert_eq!(patch.series.len(), 1);

    let label = &patch.series[0].label;
    assert_eq!(label.show, Some(true));
    assert_eq!(label.position, Some(LabelPosition::Top));
    assert_eq!(label.font_size, Some(10.0));
    assert_eq!(label.color.as_deref(), Some("black"));
    assert_eq!(label.distance, Some(1.1));
    assert!(label.formatter.is_some());
}

#[test]
fn wide_window_hides_labels() {
    let policy = LabelDensityPolicy::new(100, ValueKind::Time);
    let patch = policy.on_zoom(ZoomEvent::new(0.0, 50.0));

    let label = &patch.series[0].label;
    assert_eq!(label.show, Some(false));
    assert!(label.formatter.is_none());
}

#[test]
fn window_exactly_at_the_limit_hides_labels() {
    // limit for 100 value points is 45; a width of 45 is not below it.
    let policy = LabelDensityPolicy::new(100, ValueKind::Value);
    let patch = policy.on_zoom(ZoomEvent::new(0.0, 45.0));
    assert_eq!(patch.series[0].label.show, Some(false));
}

#[test]
fn shown_label_formats_with_the_configured_complement() {
    let policy = LabelDensityPolicy::new(10, ValueKind::Value)
        .with_value_format(ValueFormat::Suffix("%".to_owned()));
    let patch = policy.on_zoom(ZoomEvent::new(0.0, 1.0));

    let formatter = patch.series[0]
        .label
        .formatter
        .as_ref()
        .expect("label formatter");
    assert_eq!(formatter.format(42.0), "42%");
}

#[test]
fn duration_labels_get_the_smaller_font() {
    assert_eq!(label_font_size(ValueKind::Time), 10.0);
    assert_eq!(label_font_size(ValueKind::Value), 11.5);
}

#[test]
fn zero_points_does_not_divide_by_zero() {
    let policy = LabelDensityPolicy::new(0, ValueKind::Value);
    assert!(policy.density_limit().is_finite());
}
