//! Tooltip blocks for the chart builders.

use crate::core::{AxisKind, TooltipSpec, ValueFormat, ValueKind};
use crate::schema::axis::TextStyle;
use crate::schema::components::{AxisPointer, Tooltip, TooltipTrigger};
use crate::schema::formatter::TooltipFormatter;

const TOOLTIP_FONT_SIZE: f64 = 11.5;

fn base_tooltip(formatter: TooltipFormatter) -> Tooltip {
    Tooltip {
        trigger: Some(TooltipTrigger::Axis),
        formatter: Some(formatter),
        text_style: Some(TextStyle {
            font_size: Some(TOOLTIP_FONT_SIZE),
            ..TextStyle::default()
        }),
        ..Tooltip::default()
    }
}

/// One label/value line plus an optional static complement.
#[must_use]
pub fn single_series_tooltip(
    spec: &TooltipSpec,
    complement: Option<&str>,
    value_kind: ValueKind,
    value_format: &ValueFormat,
    date_format: Option<&str>,
) -> Tooltip {
    base_tooltip(TooltipFormatter::SingleSeries {
        spec: spec.clone(),
        complement: complement.map(str::to_owned),
        value_kind,
        value_format: value_format.clone(),
        date_format: date_format.map(str::to_owned),
    })
}

/// One line per series under a formatted category header.
#[must_use]
pub fn multi_series_tooltip(
    value_format: &ValueFormat,
    axis_kind: AxisKind,
    date_format: Option<&str>,
) -> Tooltip {
    base_tooltip(TooltipFormatter::MultiSeries {
        value_format: value_format.clone(),
        axis_kind,
        date_format: date_format.map(str::to_owned),
    })
}

/// Bar tooltip with a shadow axis pointer; reads the data series point,
/// skipping the cosmetic background track.
#[must_use]
pub fn horizontal_bar_tooltip(
    spec: &TooltipSpec,
    axis_kind: AxisKind,
    value_format: &ValueFormat,
) -> Tooltip {
    let mut tooltip = base_tooltip(TooltipFormatter::HorizontalBar {
        spec: spec.clone(),
        axis_kind,
        value_format: value_format.clone(),
    });
    tooltip.axis_pointer = Some(AxisPointer::shadow());
    tooltip
}
