//! Plain-data representation of the external engine's option schema.
//!
//! The schema belongs to the rendering engine, not to this crate: field
//! names are preserved verbatim in serialized output and optionality is
//! modeled explicitly. Structs are output-only (`Serialize`); options are
//! never parsed back.

pub mod axis;
pub mod components;
pub mod formatter;
pub mod options;
pub mod series;
pub mod toolbox;

pub use axis::{Axis, AxisData, AxisLabel, AxisLine, AxisTick, AxisType, SplitLine, TextStyle};
pub use components::{
    AxisPointer, DataZoom, Grid, GridOffset, Legend, LegendEntry, Title, Tooltip, TooltipTrigger,
    ZoomType,
};
pub use formatter::{
    LabelFormatter, RenderedPoint, SeriesLabelFormatter, SliderLabelFormatter, TooltipFormatter,
};
pub use options::{ChartOptions, OptionsPatch, SeriesPatch};
pub use series::{
    AreaStyle, ItemStyle, LabelPosition, LineKind, LineStyle, Series, SeriesData, SeriesLabel,
    SeriesType, StyledValue,
};
pub use toolbox::{DataView, SaveAsImage, SaveAsImageWithTitle, Toolbox, ToolboxFeature};
