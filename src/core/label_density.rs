//! Adaptive point-label density.
//!
//! The only runtime-reactive piece of the crate: a handler descriptor for
//! the engine's viewport-change event. When the visible window is narrow
//! enough that labels cannot overlap, a partial update enabling point
//! labels is re-issued; otherwise labels are hidden. No state is kept
//! beyond what the engine already tracks.

use serde::Serialize;
use tracing::trace;

use crate::core::{ValueFormat, ValueKind};
use crate::schema::formatter::SeriesLabelFormatter;
use crate::schema::options::{OptionsPatch, SeriesPatch};
use crate::schema::series::{LabelPosition, SeriesLabel};

/// Density numerator for plain value axes.
const VALUE_DENSITY: f64 = 4500.0;
/// Density numerator for duration-valued axes (their labels are wider).
const TIME_DENSITY: f64 = 3400.0;

/// Visible window bounds on the 0-100 percentage scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomEvent {
    pub start: f64,
    pub end: f64,
}

impl ZoomEvent {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }
}

/// Zoom-change policy deciding point-label visibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDensityPolicy {
    total_points: usize,
    value_kind: ValueKind,
    value_format: ValueFormat,
    scroll_start: Option<usize>,
}

impl LabelDensityPolicy {
    /// `total_points` is the full category count of the chart; builders only
    /// construct a policy for non-empty collections.
    #[must_use]
    pub fn new(total_points: usize, value_kind: ValueKind) -> Self {
        Self {
            total_points: total_points.max(1),
            value_kind,
            value_format: ValueFormat::Raw,
            scroll_start: None,
        }
    }

    #[must_use]
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    /// Derives the density numerator from the caller's initial scroll size
    /// instead of the built-in constants.
    #[must_use]
    pub fn with_scroll_start(mut self, scroll_start: Option<usize>) -> Self {
        self.scroll_start = scroll_start;
        self
    }

    /// Window-width threshold below which labels are readable.
    #[must_use]
    pub fn density_limit(&self) -> f64 {
        let numerator = match self.scroll_start {
            Some(scroll_start) => scroll_start as f64 * 100.0 + 400.0,
            None => match self.value_kind {
                ValueKind::Time => TIME_DENSITY,
                ValueKind::Value => VALUE_DENSITY,
            },
        };
        numerator / self.total_points as f64
    }

    /// Reacts to a viewport change with a partial configuration update.
    #[must_use]
    pub fn on_zoom(&self, event: ZoomEvent) -> OptionsPatch {
        let limit = self.density_limit();
        let show = event.width() < limit;
        trace!(
            start = event.start,
            end = event.end,
            limit,
            show,
            "label density update"
        );

        let label = if show {
            SeriesLabel {
                show: Some(true),
                position: Some(LabelPosition::Top),
                formatter: Some(SeriesLabelFormatter::new(
                    self.value_kind,
                    self.value_format.clone(),
                )),
                font_size: Some(label_font_size(self.value_kind)),
                color: Some("black".to_owned()),
                distance: Some(1.1),
                font_weight: None,
            }
        } else {
            SeriesLabel {
                show: Some(false),
                ..SeriesLabel::default()
            }
        };

        OptionsPatch {
            series: vec![SeriesPatch { label }],
        }
    }
}

/// Point-label font size per value kind; duration labels are longer.
#[must_use]
pub fn label_font_size(value_kind: ValueKind) -> f64 {
    match value_kind {
        ValueKind::Time => 10.0,
        ValueKind::Value => 11.5,
    }
}
