//! Proportional pie graphic.
//!
//! The graph is the other half of the widget's asymmetry: it always
//! receives the full, unaggregated dataset so the painted proportions
//! are true, while the legend next to it lists only the top slots.

use crate::aggregate::DataSet;
use crate::legend::SlotColor;
use dashlet_core::{Canvas, Element, Rect};
use serde::{Deserialize, Serialize};

/// Pie graphic painting proportional slices for every dataset entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieGraph {
    data: DataSet,
    #[serde(skip)]
    bounds: Rect,
    test_id_value: Option<String>,
}

impl PieGraph {
    /// Create an empty pie graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dataset. The graph keeps every entry; no aggregation.
    #[must_use]
    pub fn data(mut self, data: DataSet) -> Self {
        self.data = data;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Number of dataset entries the graph will paint.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }

    /// Sum of all magnitudes.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.data.total()
    }

    /// Position the graph within allocated bounds.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Paint one filled arc per entry, clockwise from 12 o'clock, slice
    /// angle proportional to magnitude. A non-positive total paints
    /// nothing.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let total = self.total();
        if total <= 0.0 {
            return;
        }

        let center = self.bounds.center();
        let radius = self.bounds.width.min(self.bounds.height) / 2.0 * 0.8;

        let mut start_angle = -std::f32::consts::FRAC_PI_2;
        for (rank, (_, magnitude)) in self.data.iter().enumerate() {
            let fraction = (magnitude / total) as f32;
            let end_angle = fraction.mul_add(std::f32::consts::TAU, start_angle);
            canvas.fill_arc(
                center,
                radius,
                start_angle,
                end_angle,
                SlotColor::for_rank(rank).color(),
            );
            start_angle = end_angle;
        }
    }
}

impl Element for PieGraph {
    fn element_name(&self) -> &'static str {
        "PieGraph"
    }

    fn to_html(&self) -> String {
        // Placeholder tag; the host mounts the canvas-backed graphic here.
        r#"<dashlet-piegraph class="summary-graph-wrap"></dashlet-piegraph>"#.to_string()
    }

    fn to_css(&self) -> String {
        ".summary-graph-wrap { display: flex; }".into()
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
