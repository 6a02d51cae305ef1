//! Toolbox assembler: presence of a caller-supplied title attaches the
//! corresponding button, nothing else. Feature order (my-tool, save,
//! data-view) matches the order the engine draws the buttons in.

use indexmap::IndexMap;

use crate::charts::props::ToolboxOptions;
use crate::schema::axis::TextStyle;
use crate::schema::components::Tooltip;
use crate::schema::toolbox::{
    DataView, SaveAsImage, SaveAsImageWithTitle, Toolbox, ToolboxFeature,
};

/// Default toolbox offset for line-family charts.
pub const DEFAULT_RIGHT: &str = "9.52%";
/// Default toolbox offset for the horizontal bar chart.
pub const BAR_DEFAULT_RIGHT: &str = "8.7%";

fn chrome_tooltip() -> Tooltip {
    Tooltip {
        show: Some(true),
        background_color: Some("grey".to_owned()),
        text_style: Some(TextStyle {
            font_size: Some(12.0),
            ..TextStyle::default()
        }),
        ..Tooltip::default()
    }
}

/// Builds the toolbox block, or nothing when the caller attached no options.
#[must_use]
pub fn build_toolbox(options: Option<&ToolboxOptions>, right: &str) -> Option<Toolbox> {
    let options = options?;

    let mut feature = IndexMap::new();
    if let Some(title) = &options.save_as_image_with_title {
        feature.insert(
            "myTool".to_owned(),
            ToolboxFeature::SaveAsImageWithTitle(SaveAsImageWithTitle::new(title)),
        );
    }
    if let Some(title) = &options.save_as_image {
        feature.insert(
            "saveAsImage".to_owned(),
            ToolboxFeature::SaveAsImage(SaveAsImage::new(title)),
        );
    }
    if let Some(title) = &options.data_view {
        feature.insert(
            "dataView".to_owned(),
            ToolboxFeature::DataView(DataView::new(title)),
        );
    }

    Some(Toolbox {
        show_title: false,
        right: right.to_owned(),
        feature,
        tooltip: Some(chrome_tooltip()),
    })
}
