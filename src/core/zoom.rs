//! Scroll/zoom policy: fixed view vs. scrollable windowed viewport.
//!
//! The decision is a one-time computation at build time. A collection is
//! scrollable iff it has more categories than the initial window holds;
//! the initial window then shows the most recent points by default.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::time::{is_month_granularity, slider_label_format};
use crate::schema::components::{DataZoom, ZoomType};
use crate::schema::formatter::SliderLabelFormatter;

/// Initial window size for month-granularity collections.
const MONTH_WINDOW: usize = 12;
/// Initial window size for everything else.
const DEFAULT_WINDOW: usize = 30;

/// At most two descriptors are ever emitted (inside + slider).
pub type DataZoomPair = SmallVec<[DataZoom; 2]>;

/// Number of categories visible when the chart first renders.
#[must_use]
pub fn initial_window_size(date_format: Option<&str>, scroll_start: Option<usize>) -> usize {
    scroll_start.unwrap_or(if is_month_granularity(date_format) {
        MONTH_WINDOW
    } else {
        DEFAULT_WINDOW
    })
}

/// Initial zoom start percentage so the most recent window is visible.
/// `100 - window/total*100`, clamped to `[0, 100]`.
#[must_use]
pub fn initial_zoom_start(
    total: usize,
    date_format: Option<&str>,
    scroll_start: Option<usize>,
) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let window = initial_window_size(date_format, scroll_start) as f64;
    (100.0 - window / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Builds the `dataZoom` descriptors for a collection of `total` categories.
///
/// Returns an empty pair (fixed view) when everything fits in the initial
/// window; otherwise exactly two descriptors sharing the same start and an
/// end of 100: a locked `inside` zoom on shift+wheel and a bottom slider
/// with date-rendered handle labels.
#[must_use]
pub fn data_zoom_policy(
    total: usize,
    date_format: Option<&str>,
    scroll_start: Option<usize>,
) -> DataZoomPair {
    let window = initial_window_size(date_format, scroll_start);
    if total <= window {
        debug!(total, window, "fixed view, no zoom descriptors");
        return DataZoomPair::new();
    }

    let start = initial_zoom_start(total, date_format, scroll_start);
    debug!(total, window, start, "scrollable view");

    let mut pair = DataZoomPair::new();
    pair.push(DataZoom {
        kind: ZoomType::Inside,
        start,
        end: 100.0,
        zoom_lock: Some(true),
        zoom_on_mouse_wheel: Some("shift".to_owned()),
        bottom: None,
        show: None,
        label_formatter: None,
    });
    pair.push(DataZoom {
        kind: ZoomType::Slider,
        start,
        end: 100.0,
        zoom_lock: None,
        zoom_on_mouse_wheel: None,
        bottom: Some(0.0),
        show: Some(true),
        label_formatter: Some(SliderLabelFormatter::new(slider_label_format(date_format))),
    });
    pair
}
