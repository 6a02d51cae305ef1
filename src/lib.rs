//! echarts-composer: typed chart-option composer for dashboards.
//!
//! This crate turns domain records (labeled numeric series, named
//! multi-series collections, coordinate tuples) into declarative option
//! objects matching the external engine's schema, plus the event-callback
//! descriptors a host wires into the engine. Every builder is a pure
//! function of its inputs.

pub mod charts;
pub mod core;
pub mod error;
pub mod schema;
pub mod telemetry;

pub use charts::{
    AreaChartProps, AxisNames, BarClickEvent, BuiltChart, ChartEvents, ClickHandler,
    CoordinateChartProps, HorizontalBarChartProps, LineChartProps, LineMark, ToolboxOptions,
    build_area_chart, build_coordinate_line_chart, build_horizontal_bar_chart, build_line_chart,
};
pub use core::{
    AxisKind, Coordinate, CoordinateGroups, Entry, LabelDensityPolicy, NamedSeries, TooltipSpec,
    ValueFormat, ValueKind, ZoomEvent,
};
pub use error::{ChartError, ChartResult};
