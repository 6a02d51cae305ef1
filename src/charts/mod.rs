//! Chart-configuration builders.
//!
//! Each builder is a pure function from typed props to a [`BuiltChart`]:
//! the declarative option object plus the event-callback descriptors the
//! host wires into the engine. Builders are idempotent for identical
//! inputs and hold no state.

pub mod area;
pub mod coordinate;
pub mod horizontal_bar;
pub mod line;
pub mod props;
pub mod toolbox;
pub mod tooltip;

use std::fmt;
use std::sync::Arc;

use crate::core::LabelDensityPolicy;
use crate::schema::ChartOptions;

pub use area::build_area_chart;
pub use coordinate::build_coordinate_line_chart;
pub use horizontal_bar::build_horizontal_bar_chart;
pub use line::build_line_chart;
pub use props::{
    AreaChartProps, AxisNames, CoordinateChartProps, HorizontalBarChartProps, LineChartProps,
    LineMark, ToolboxOptions,
};

/// Click payload forwarded unchanged from a bar segment to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct BarClickEvent {
    pub name: String,
    pub value: f64,
    pub item_id: Option<String>,
    pub data_index: usize,
}

/// Caller-supplied bar click handler, passed through untouched.
pub type ClickHandler = Arc<dyn Fn(&BarClickEvent) + Send + Sync>;

/// Event callbacks a built chart exposes to the host.
#[derive(Clone, Default)]
pub struct ChartEvents {
    /// Viewport-change handler driving adaptive label density.
    pub data_zoom: Option<LabelDensityPolicy>,
    /// Bar-segment click pass-through.
    pub click: Option<ClickHandler>,
}

impl ChartEvents {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

impl fmt::Debug for ChartEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartEvents")
            .field("data_zoom", &self.data_zoom)
            .field("click", &self.click.as_ref().map(|_| "Fn(..)"))
            .finish()
    }
}

/// Result of a chart builder: options for the engine, callbacks for the host.
#[derive(Debug, Clone)]
pub struct BuiltChart {
    pub options: ChartOptions,
    pub events: ChartEvents,
}
