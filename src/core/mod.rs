pub mod domain;
pub mod format;
pub mod label_density;
pub mod time;
pub mod types;
pub mod zoom;

pub use domain::{Domain, value_domain};
pub use label_density::{LabelDensityPolicy, ZoomEvent};
pub use types::{
    AxisKind, Coordinate, CoordinateGroups, Entry, NamedSeries, PointStyle, TooltipSpec,
    ValueFormat, ValueKind,
};
