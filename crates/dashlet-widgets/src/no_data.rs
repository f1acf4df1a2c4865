//! Empty-state placeholder element.

use dashlet_core::Element;

/// Placeholder rendered in place of graphic and legend when the dataset
/// has no entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoData;

impl NoData {
    /// Create the placeholder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Element for NoData {
    fn element_name(&self) -> &'static str {
        "NoData"
    }

    fn to_html(&self) -> String {
        r#"<dashlet-nodata class="no-data"></dashlet-nodata>"#.to_string()
    }

    fn to_css(&self) -> String {
        ".no-data { display: block; text-align: center; }".into()
    }
}
