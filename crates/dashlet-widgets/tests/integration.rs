//! End-to-end scenarios for the pie summary widget.

use dashlet_core::{unescape, Element, Rect, RecordingCanvas};
use dashlet_widgets::{aggregate, DataSet, Legend, PieGraph, PieSummary, SLOT_COUNT};

fn widget() -> PieSummary {
    PieSummary::new().caption("Sessions").image("/img/pie.png")
}

fn five_entries() -> DataSet {
    DataSet::new()
        .entry("A", 1.0)
        .entry("B", 5.0)
        .entry("C", 3.0)
        .entry("D", 2.0)
        .entry("E", 4.0)
}

#[test]
fn scenario_empty_dataset_shows_empty_state_only() {
    let html = widget().render(&DataSet::new());
    assert!(html.contains("<dashlet-nodata"));
    assert!(!html.contains("graph-legend"));
    assert!(!html.contains("<dashlet-piegraph"));
}

#[test]
fn scenario_single_entry() {
    let data = DataSet::new().entry("A", 5.0);
    let html = widget().render(&data);

    // One visible bound slot, three hidden, all four present in layout.
    assert_eq!(html.matches(r#"class="graph-dot""#).count(), SLOT_COUNT);
    assert_eq!(html.matches("visibility: visible").count(), 1);
    assert_eq!(html.matches("visibility: hidden").count(), 3);
    assert!(html.contains("A <span class=\"caption-strong\">5</span>"));

    // The graphic receives the full dataset.
    let mut graph = PieGraph::new().data(data);
    graph.layout(Rect::new(0.0, 0.0, 64.0, 64.0));
    let mut canvas = RecordingCanvas::new();
    graph.paint(&mut canvas);
    assert_eq!(canvas.arc_count(), 1);
}

#[test]
fn scenario_five_entries_top_four_in_legend() {
    let data = five_entries();
    let html = widget().render(&data);

    let pos = |needle: &str| html.find(needle).unwrap();
    assert!(pos("B <span") < pos("E <span"));
    assert!(pos("E <span") < pos("C <span"));
    assert!(pos("C <span") < pos("D <span"));
    assert!(!html.contains("A <span"));
    assert_eq!(html.matches("visibility: visible").count(), 4);

    // The graphic is not bounded by the legend limit: all 5 entries paint.
    let mut graph = PieGraph::new().data(data);
    graph.layout(Rect::new(0.0, 0.0, 64.0, 64.0));
    let mut canvas = RecordingCanvas::new();
    graph.paint(&mut canvas);
    assert_eq!(canvas.arc_count(), 5);
}

#[test]
fn scenario_equal_magnitudes_tie_break_deterministic() {
    let data = DataSet::new().entry("A", 3.0).entry("B", 3.0);
    let first = widget().render(&data);
    for _ in 0..10 {
        assert_eq!(widget().render(&data), first);
    }
    let pos = |needle: &str| first.find(needle).unwrap();
    assert!(pos("A <span") < pos("B <span"));
}

#[test]
fn bound_slot_count_matches_entry_count_up_to_limit() {
    for count in 0..8usize {
        let data: DataSet = (0..count)
            .map(|i| (format!("label-{i}"), i as f64 + 1.0))
            .collect();
        let legend = Legend::bind(aggregate(&data, SLOT_COUNT));
        assert_eq!(legend.bound_count(), count.min(SLOT_COUNT));
    }
}

#[test]
fn hostile_label_round_trips_through_escaping() {
    let label = "<b>X</b>";
    let data = DataSet::new().entry(label, 1.0);
    let html = widget().render(&data);

    assert!(!html.contains(label));
    let escaped = "&lt;b&gt;X&lt;/b&gt;";
    assert!(html.contains(escaped));
    assert_eq!(unescape(escaped), label);
}

#[test]
fn repeated_draw_fully_replaces_markup() {
    let mut summary = widget();

    summary.draw(&five_entries());
    let populated = summary.displayed().unwrap().to_string();
    assert!(populated.contains("graph-legend"));

    summary.draw(&DataSet::new());
    let emptied = summary.displayed().unwrap();
    assert!(emptied.contains("<dashlet-nodata"));
    assert!(!emptied.contains("graph-legend"));

    summary.draw(&five_entries());
    assert_eq!(summary.displayed().unwrap(), populated);
}

#[test]
fn widget_state_survives_serde() {
    let summary = widget().test_id("sessions-pie");
    let json = serde_json::to_string(&summary).unwrap();
    let back: PieSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back.get_caption(), "Sessions");
    assert_eq!(back.render(&five_entries()), summary.render(&five_entries()));
}
