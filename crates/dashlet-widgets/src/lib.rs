//! Widget implementations for the dashlet toolkit.

pub mod aggregate;
pub mod legend;
pub mod no_data;
pub mod pie_graph;
pub mod pie_summary;

pub use aggregate::{aggregate, Bucket, DataSet};
pub use legend::{format_magnitude, Legend, SlotColor, SLOT_COUNT};
pub use no_data::NoData;
pub use pie_graph::PieGraph;
pub use pie_summary::PieSummary;
