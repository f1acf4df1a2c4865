//! Composite pie-summary widget.
//!
//! `PieSummary` is the imperative entry point the dashboard calls on
//! every data update: [`PieSummary::draw`] takes a fresh [`DataSet`],
//! renders header + graphic + legend (or the empty-state view), and
//! replaces the previously displayed markup. The widget has exactly two
//! render states: empty (zero entries) and populated (1–4 slots bound).

use crate::aggregate::{aggregate, DataSet};
use crate::legend::{Legend, SLOT_COUNT};
use crate::no_data::NoData;
use crate::pie_graph::PieGraph;
use dashlet_core::{escape, Element};
use serde::{Deserialize, Serialize};

/// Pie chart summary widget for an operational dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieSummary {
    /// Header text; per-instance configuration, not derived from data.
    caption: String,
    /// Header icon URI; read at render time, not validated.
    image: String,
    test_id_value: Option<String>,
    /// Markup of the most recent draw; fully replaced on each call.
    #[serde(skip)]
    rendered: Option<String>,
}

impl PieSummary {
    /// Create a new summary widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header caption.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Set the header icon URI.
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the caption.
    #[must_use]
    pub fn get_caption(&self) -> &str {
        &self.caption
    }

    /// Get the image URI.
    #[must_use]
    pub fn get_image(&self) -> &str {
        &self.image
    }

    /// Render markup for `data` without storing it.
    ///
    /// An empty dataset renders the empty-state view; the aggregator is
    /// not invoked. Otherwise the graphic placeholder receives the full
    /// dataset while the legend binds the top [`SLOT_COUNT`] buckets.
    #[must_use]
    pub fn render(&self, data: &DataSet) -> String {
        let body = if data.is_empty() {
            NoData::new().to_html()
        } else {
            let graph = PieGraph::new().data(data.clone());
            let legend = Legend::bind(aggregate(data, SLOT_COUNT));
            format!("{}\n{}", graph.to_html(), legend.to_html())
        };

        format!(
            concat!(
                "<div class=\"summary-headline\">",
                "<img src=\"{src}\" width=\"24\" height=\"24\" alt=\"{alt}\">",
                "<h3>{caption}</h3>",
                "</div>\n",
                "<div class=\"summary-body\">\n{body}\n</div>"
            ),
            src = escape(&self.image),
            alt = escape(&self.caption),
            caption = escape(&self.caption),
            body = body,
        )
    }

    /// Render `data` and replace the displayed markup.
    pub fn draw(&mut self, data: &DataSet) {
        self.rendered = Some(self.render(data));
    }

    /// Markup of the most recent [`draw`](Self::draw), if any.
    #[must_use]
    pub fn displayed(&self) -> Option<&str> {
        self.rendered.as_deref()
    }
}

impl Element for PieSummary {
    fn element_name(&self) -> &'static str {
        "PieSummary"
    }

    fn to_html(&self) -> String {
        self.rendered
            .clone()
            .unwrap_or_else(|| self.render(&DataSet::new()))
    }

    fn to_css(&self) -> String {
        [
            ".summary-headline { display: flex; align-items: center; }".to_string(),
            ".summary-body { display: block; }".to_string(),
            PieGraph::new().to_css(),
            Legend::default().to_css(),
            NoData::new().to_css(),
        ]
        .join("\n")
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
