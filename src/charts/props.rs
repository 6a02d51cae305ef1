//! Typed props for the chart builders.
//!
//! Conditional behavior the original dashboards expressed through optional
//! props is modeled as explicit `Option` fields with `with_*` setters;
//! required shapes (the coordinate 3-tuple, legend name triple) are
//! enforced by construction.

use crate::charts::ClickHandler;
use crate::core::{AxisKind, CoordinateGroups, Entry, NamedSeries, TooltipSpec, ValueFormat, ValueKind};
use crate::schema::Grid;

/// Display names for the two value axes of the coordinate/fixed-axis charts.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisNames {
    pub x: String,
    pub y: String,
}

impl AxisNames {
    #[must_use]
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Which toolbox buttons to attach, keyed by their display titles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolboxOptions {
    pub save_as_image: Option<String>,
    pub data_view: Option<String>,
    pub save_as_image_with_title: Option<String>,
}

impl ToolboxOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_save_as_image(mut self, title: impl Into<String>) -> Self {
        self.save_as_image = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_data_view(mut self, title: impl Into<String>) -> Self {
        self.data_view = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_save_as_image_with_title(mut self, title: impl Into<String>) -> Self {
        self.save_as_image_with_title = Some(title.into());
        self
    }
}

/// A constant reference line drawn across all x positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMark {
    pub value: f64,
    pub color: String,
    pub name: String,
}

impl LineMark {
    #[must_use]
    pub fn new(value: f64, color: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value,
            color: color.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AreaChartProps {
    pub data: Vec<Entry>,
    pub x_kind: AxisKind,
    pub value_kind: ValueKind,
    pub value_format: ValueFormat,
    pub color: Option<String>,
    pub tooltip: Option<TooltipSpec>,
    pub tooltip_complement: Option<String>,
    pub line_mark: Option<LineMark>,
    pub date_format: Option<String>,
    pub grid: Option<Grid>,
    pub rotate_label: Option<f64>,
    pub font_label_size: Option<f64>,
    pub title: Option<String>,
    pub toolbox: Option<ToolboxOptions>,
    pub scroll_start: Option<usize>,
}

impl AreaChartProps {
    #[must_use]
    pub fn new(data: Vec<Entry>) -> Self {
        Self {
            data,
            x_kind: AxisKind::Category,
            value_kind: ValueKind::Value,
            value_format: ValueFormat::Raw,
            color: None,
            tooltip: None,
            tooltip_complement: None,
            line_mark: None,
            date_format: None,
            grid: None,
            rotate_label: None,
            font_label_size: None,
            title: None,
            toolbox: None,
            scroll_start: None,
        }
    }

    #[must_use]
    pub fn with_x_kind(mut self, x_kind: AxisKind) -> Self {
        self.x_kind = x_kind;
        self
    }

    #[must_use]
    pub fn with_value_kind(mut self, value_kind: ValueKind) -> Self {
        self.value_kind = value_kind;
        self
    }

    #[must_use]
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipSpec) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn with_tooltip_complement(mut self, complement: impl Into<String>) -> Self {
        self.tooltip_complement = Some(complement.into());
        self
    }

    #[must_use]
    pub fn with_line_mark(mut self, mark: LineMark) -> Self {
        self.line_mark = Some(mark);
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    #[must_use]
    pub fn with_rotate_label(mut self, rotate: f64) -> Self {
        self.rotate_label = Some(rotate);
        self
    }

    #[must_use]
    pub fn with_font_label_size(mut self, size: f64) -> Self {
        self.font_label_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_toolbox(mut self, toolbox: ToolboxOptions) -> Self {
        self.toolbox = Some(toolbox);
        self
    }

    #[must_use]
    pub fn with_scroll_start(mut self, scroll_start: usize) -> Self {
        self.scroll_start = Some(scroll_start);
        self
    }
}

#[derive(Debug, Clone)]
pub struct LineChartProps {
    pub series: Vec<NamedSeries>,
    pub colors: Option<Vec<String>>,
    pub x_kind: AxisKind,
    pub value_kind: ValueKind,
    pub value_format: ValueFormat,
    pub date_format: Option<String>,
    pub show_label: bool,
    pub smooth: bool,
    pub disable_marks: bool,
    pub no_tooltip: bool,
    pub axis_names: Option<AxisNames>,
    pub grid: Option<Grid>,
    pub rotate_label: Option<f64>,
    pub font_label_size: Option<f64>,
    pub title: Option<String>,
    pub toolbox: Option<ToolboxOptions>,
    pub scroll_start: Option<usize>,
}

impl LineChartProps {
    #[must_use]
    pub fn new(series: Vec<NamedSeries>) -> Self {
        Self {
            series,
            colors: None,
            x_kind: AxisKind::Category,
            value_kind: ValueKind::Value,
            value_format: ValueFormat::Raw,
            date_format: None,
            show_label: false,
            smooth: false,
            disable_marks: false,
            no_tooltip: false,
            axis_names: None,
            grid: None,
            rotate_label: None,
            font_label_size: None,
            title: None,
            toolbox: None,
            scroll_start: None,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_x_kind(mut self, x_kind: AxisKind) -> Self {
        self.x_kind = x_kind;
        self
    }

    #[must_use]
    pub fn with_value_kind(mut self, value_kind: ValueKind) -> Self {
        self.value_kind = value_kind;
        self
    }

    #[must_use]
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    #[must_use]
    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    #[must_use]
    pub fn with_disable_marks(mut self, disable_marks: bool) -> Self {
        self.disable_marks = disable_marks;
        self
    }

    #[must_use]
    pub fn with_no_tooltip(mut self, no_tooltip: bool) -> Self {
        self.no_tooltip = no_tooltip;
        self
    }

    #[must_use]
    pub fn with_axis_names(mut self, axis_names: AxisNames) -> Self {
        self.axis_names = Some(axis_names);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    #[must_use]
    pub fn with_rotate_label(mut self, rotate: f64) -> Self {
        self.rotate_label = Some(rotate);
        self
    }

    #[must_use]
    pub fn with_font_label_size(mut self, size: f64) -> Self {
        self.font_label_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_toolbox(mut self, toolbox: ToolboxOptions) -> Self {
        self.toolbox = Some(toolbox);
        self
    }

    #[must_use]
    pub fn with_scroll_start(mut self, scroll_start: usize) -> Self {
        self.scroll_start = Some(scroll_start);
        self
    }
}

#[derive(Clone)]
pub struct HorizontalBarChartProps {
    pub data: Vec<Entry>,
    pub color: Option<String>,
    pub x_kind: AxisKind,
    pub x_format: ValueFormat,
    pub tooltip: Option<TooltipSpec>,
    pub grid: Option<Grid>,
    pub label_word_size: Option<usize>,
    pub show_tick_infos: bool,
    pub bold_tick_label: bool,
    pub title: Option<String>,
    pub margin_left_title: Option<String>,
    pub title_font_size: Option<f64>,
    pub margin_right_toolbox: Option<String>,
    pub toolbox: Option<ToolboxOptions>,
    pub on_click: Option<ClickHandler>,
}

impl HorizontalBarChartProps {
    #[must_use]
    pub fn new(data: Vec<Entry>) -> Self {
        Self {
            data,
            color: None,
            x_kind: AxisKind::Category,
            x_format: ValueFormat::Raw,
            tooltip: None,
            grid: None,
            label_word_size: None,
            show_tick_infos: false,
            bold_tick_label: false,
            title: None,
            margin_left_title: None,
            title_font_size: None,
            margin_right_toolbox: None,
            toolbox: None,
            on_click: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_x_kind(mut self, x_kind: AxisKind) -> Self {
        self.x_kind = x_kind;
        self
    }

    #[must_use]
    pub fn with_x_format(mut self, x_format: ValueFormat) -> Self {
        self.x_format = x_format;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipSpec) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    #[must_use]
    pub fn with_label_word_size(mut self, size: usize) -> Self {
        self.label_word_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_show_tick_infos(mut self, show_tick_infos: bool) -> Self {
        self.show_tick_infos = show_tick_infos;
        self
    }

    #[must_use]
    pub fn with_bold_tick_label(mut self, bold_tick_label: bool) -> Self {
        self.bold_tick_label = bold_tick_label;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_margin_left_title(mut self, margin: impl Into<String>) -> Self {
        self.margin_left_title = Some(margin.into());
        self
    }

    #[must_use]
    pub fn with_title_font_size(mut self, size: f64) -> Self {
        self.title_font_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_margin_right_toolbox(mut self, margin: impl Into<String>) -> Self {
        self.margin_right_toolbox = Some(margin.into());
        self
    }

    #[must_use]
    pub fn with_toolbox(mut self, toolbox: ToolboxOptions) -> Self {
        self.toolbox = Some(toolbox);
        self
    }

    #[must_use]
    pub fn with_on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }
}

impl std::fmt::Debug for HorizontalBarChartProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizontalBarChartProps")
            .field("data", &self.data)
            .field("color", &self.color)
            .field("x_kind", &self.x_kind)
            .field("x_format", &self.x_format)
            .field("tooltip", &self.tooltip)
            .field("show_tick_infos", &self.show_tick_infos)
            .field("bold_tick_label", &self.bold_tick_label)
            .field("title", &self.title)
            .field("on_click", &self.on_click.as_ref().map(|_| "Fn(..)"))
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct CoordinateChartProps {
    pub coordinates: CoordinateGroups,
    pub legend_names: [String; 3],
    pub coordinate_names: AxisNames,
    pub colors: Option<Vec<String>>,
    pub y_range_values: Option<f64>,
    pub x_max_value: Option<f64>,
    pub legend_position: Option<f64>,
    pub grid: Option<Grid>,
    pub title: Option<String>,
    /// Whether the title block is visible. Defaults to hidden when the
    /// save-with-title tool is attached (the host shows it on export).
    pub show_title: Option<bool>,
    pub toolbox: Option<ToolboxOptions>,
}

impl CoordinateChartProps {
    #[must_use]
    pub fn new(
        coordinates: CoordinateGroups,
        legend_names: [String; 3],
        coordinate_names: AxisNames,
    ) -> Self {
        Self {
            coordinates,
            legend_names,
            coordinate_names,
            colors: None,
            y_range_values: None,
            x_max_value: None,
            legend_position: None,
            grid: None,
            title: None,
            show_title: None,
            toolbox: None,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_y_range_values(mut self, range: f64) -> Self {
        self.y_range_values = Some(range);
        self
    }

    #[must_use]
    pub fn with_x_max_value(mut self, max: f64) -> Self {
        self.x_max_value = Some(max);
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, top: f64) -> Self {
        self.legend_position = Some(top);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_show_title(mut self, show_title: bool) -> Self {
        self.show_title = Some(show_title);
        self
    }

    #[must_use]
    pub fn with_toolbox(mut self, toolbox: ToolboxOptions) -> Self {
        self.toolbox = Some(toolbox);
        self
    }
}
