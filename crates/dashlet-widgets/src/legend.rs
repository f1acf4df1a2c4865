//! Color-coded legend bound to four fixed display slots.
//!
//! The legend is the readability-bounded half of the widget: it lists at
//! most [`SLOT_COUNT`] buckets, one per slot. A slot that has no bucket
//! is rendered hidden rather than omitted, so the legend's vertical
//! footprint is the same no matter how many buckets are bound.

use crate::aggregate::Bucket;
use dashlet_core::{escape, Color, Element};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Number of legend display slots. Fixed; this is the aggregation limit.
pub const SLOT_COUNT: usize = 4;

/// Fixed color identity of a legend slot.
///
/// Rank *i* always renders with the same color regardless of which
/// bucket occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotColor {
    /// Slot 0
    DarkBlue,
    /// Slot 1
    Red,
    /// Slot 2
    Green,
    /// Slot 3
    Yellow,
}

impl SlotColor {
    /// Get the color identity for a slot rank. Ranks past the last slot
    /// cycle through the palette (used by the proportion graphic).
    #[must_use]
    pub const fn for_rank(rank: usize) -> Self {
        match rank % SLOT_COUNT {
            0 => Self::DarkBlue,
            1 => Self::Red,
            2 => Self::Green,
            _ => Self::Yellow,
        }
    }

    /// CSS class name for the slot's dot.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::DarkBlue => "dot-dark-blue",
            Self::Red => "dot-red",
            Self::Green => "dot-green",
            Self::Yellow => "dot-yellow",
        }
    }

    /// Concrete display color.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::DarkBlue => Color::rgb(0.114, 0.208, 0.341),
            Self::Red => Color::rgb(0.902, 0.224, 0.275),
            Self::Green => Color::rgb(0.165, 0.616, 0.561),
            Self::Yellow => Color::rgb(0.914, 0.769, 0.416),
        }
    }
}

/// Format a magnitude for legend display.
///
/// Whole numbers print without a decimal point (`5`, not `5.0`); other
/// values keep their shortest natural form.
#[must_use]
pub fn format_magnitude(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Legend holding four fixed slots, each either bound to a bucket or
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    slots: [Option<Bucket>; SLOT_COUNT],
}

impl Legend {
    /// Bind ranked buckets to slots: rank *i* binds slot *i*. Buckets
    /// beyond the last slot are ignored; remaining slots stay empty.
    #[must_use]
    pub fn bind(buckets: Vec<Bucket>) -> Self {
        let mut slots: [Option<Bucket>; SLOT_COUNT] = Default::default();
        for (slot, bucket) in slots.iter_mut().zip(buckets) {
            *slot = Some(bucket);
        }
        Self { slots }
    }

    /// Get the bucket bound at `rank`, if any.
    #[must_use]
    pub fn bucket(&self, rank: usize) -> Option<&Bucket> {
        self.slots.get(rank).and_then(Option::as_ref)
    }

    /// Number of bound (visible) slots.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check whether a slot is rendered hidden.
    #[must_use]
    pub fn is_hidden(&self, rank: usize) -> bool {
        self.bucket(rank).is_none()
    }

    fn slot_html(rank: usize, slot: Option<&Bucket>) -> String {
        let visibility = if slot.is_some() { "visible" } else { "hidden" };
        let (label, value) = slot.map_or_else(
            || (String::new(), String::new()),
            |b| (escape(&b.label), escape(&format_magnitude(b.magnitude))),
        );
        format!(
            concat!(
                r#"<span class="graph-dot" style="visibility: {vis}">"#,
                r#"<span class="graph-dot-ellipse {class}"></span>"#,
                r#"{label} <span class="caption-strong">{value}</span>"#,
                "</span>"
            ),
            vis = visibility,
            class = SlotColor::for_rank(rank).css_class(),
            label = label,
            value = value,
        )
    }
}

impl Element for Legend {
    fn element_name(&self) -> &'static str {
        "Legend"
    }

    fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="graph-legend">"#);
        for (rank, slot) in self.slots.iter().enumerate() {
            html.push_str(&Self::slot_html(rank, slot.as_ref()));
        }
        html.push_str("</div>");
        html
    }

    fn to_css(&self) -> String {
        let mut css = String::from(
            ".graph-legend { display: flex; flex-direction: column; }\n\
             .graph-dot-ellipse { display: inline-block; width: 8px; height: 8px; border-radius: 50%; }\n",
        );
        for rank in 0..SLOT_COUNT {
            let slot_color = SlotColor::for_rank(rank);
            let _ = writeln!(
                css,
                ".{} {{ background: {}; }}",
                slot_color.css_class(),
                slot_color.color().to_hex()
            );
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(labels: &[(&str, f64)]) -> Vec<Bucket> {
        labels.iter().map(|(l, m)| Bucket::new(*l, *m)).collect()
    }

    // ===== SlotColor Tests =====

    #[test]
    fn test_slot_color_rank_order_is_fixed() {
        assert_eq!(SlotColor::for_rank(0), SlotColor::DarkBlue);
        assert_eq!(SlotColor::for_rank(1), SlotColor::Red);
        assert_eq!(SlotColor::for_rank(2), SlotColor::Green);
        assert_eq!(SlotColor::for_rank(3), SlotColor::Yellow);
    }

    #[test]
    fn test_slot_color_cycles_past_last_slot() {
        assert_eq!(SlotColor::for_rank(4), SlotColor::DarkBlue);
        assert_eq!(SlotColor::for_rank(7), SlotColor::Yellow);
    }

    #[test]
    fn test_slot_color_css_classes_are_distinct() {
        let classes: Vec<&str> = (0..SLOT_COUNT)
            .map(|r| SlotColor::for_rank(r).css_class())
            .collect();
        let mut unique = classes.clone();
        unique.dedup();
        assert_eq!(classes.len(), unique.len());
    }

    #[test]
    fn test_slot_color_colors_are_distinct() {
        let hexes: Vec<String> = (0..SLOT_COUNT)
            .map(|r| SlotColor::for_rank(r).color().to_hex())
            .collect();
        for (i, a) in hexes.iter().enumerate() {
            for b in &hexes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    // ===== format_magnitude Tests =====

    #[test]
    fn test_format_magnitude_whole_numbers() {
        assert_eq!(format_magnitude(5.0), "5");
        assert_eq!(format_magnitude(0.0), "0");
        assert_eq!(format_magnitude(-3.0), "-3");
    }

    #[test]
    fn test_format_magnitude_fractional() {
        assert_eq!(format_magnitude(2.5), "2.5");
    }

    #[test]
    fn test_format_magnitude_non_finite() {
        assert_eq!(format_magnitude(f64::NAN), "NaN");
        assert_eq!(format_magnitude(f64::INFINITY), "inf");
    }

    // ===== Binding Tests =====

    #[test]
    fn test_bind_empty() {
        let legend = Legend::bind(Vec::new());
        assert_eq!(legend.bound_count(), 0);
        for rank in 0..SLOT_COUNT {
            assert!(legend.is_hidden(rank));
        }
    }

    #[test]
    fn test_bind_partial() {
        let legend = Legend::bind(ranked(&[("A", 5.0)]));
        assert_eq!(legend.bound_count(), 1);
        assert_eq!(legend.bucket(0).unwrap().label, "A");
        assert!(legend.is_hidden(1));
        assert!(legend.is_hidden(2));
        assert!(legend.is_hidden(3));
    }

    #[test]
    fn test_bind_rank_i_binds_slot_i() {
        let legend = Legend::bind(ranked(&[("B", 5.0), ("E", 4.0), ("C", 3.0), ("D", 2.0)]));
        assert_eq!(legend.bucket(0).unwrap().label, "B");
        assert_eq!(legend.bucket(1).unwrap().label, "E");
        assert_eq!(legend.bucket(2).unwrap().label, "C");
        assert_eq!(legend.bucket(3).unwrap().label, "D");
        assert_eq!(legend.bound_count(), 4);
    }

    #[test]
    fn test_bind_ignores_buckets_beyond_slots() {
        let legend = Legend::bind(ranked(&[
            ("A", 5.0),
            ("B", 4.0),
            ("C", 3.0),
            ("D", 2.0),
            ("E", 1.0),
        ]));
        assert_eq!(legend.bound_count(), SLOT_COUNT);
        assert!(legend.bucket(4).is_none());
    }

    #[test]
    fn test_bucket_out_of_range() {
        let legend = Legend::bind(ranked(&[("A", 1.0)]));
        assert!(legend.bucket(100).is_none());
    }

    // ===== Markup Tests =====

    #[test]
    fn test_html_always_has_four_slots() {
        for count in 0..=4 {
            let buckets: Vec<Bucket> = (0..count)
                .map(|i| Bucket::new(format!("L{i}"), f64::from(i)))
                .collect();
            let html = Legend::bind(buckets).to_html();
            assert_eq!(html.matches(r#"class="graph-dot""#).count(), 4);
        }
    }

    #[test]
    fn test_html_hides_unbound_slots_only() {
        let html = Legend::bind(ranked(&[("A", 5.0)])).to_html();
        assert_eq!(html.matches("visibility: visible").count(), 1);
        assert_eq!(html.matches("visibility: hidden").count(), 3);
    }

    #[test]
    fn test_html_shows_label_and_value() {
        let html = Legend::bind(ranked(&[("Requests", 120.0)])).to_html();
        assert!(html.contains("Requests"));
        assert!(html.contains(r#"<span class="caption-strong">120</span>"#));
    }

    #[test]
    fn test_html_escapes_labels() {
        let html = Legend::bind(ranked(&[("<b>X</b>", 1.0)])).to_html();
        assert!(!html.contains("<b>X</b>"));
        assert!(html.contains("&lt;b&gt;X&lt;/b&gt;"));
    }

    #[test]
    fn test_html_slot_color_order_is_input_independent() {
        let a = Legend::bind(ranked(&[("first", 9.0)])).to_html();
        let b = Legend::bind(ranked(&[("other", 1.0)])).to_html();
        // Slot 0 carries the dark blue dot no matter which label is bound.
        let class_order = |html: &str| {
            (0..SLOT_COUNT)
                .map(|r| SlotColor::for_rank(r).css_class())
                .map(|c| html.find(c).unwrap())
                .collect::<Vec<_>>()
        };
        let order_a = class_order(&a);
        assert!(order_a.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(order_a, class_order(&b));
    }

    #[test]
    fn test_html_is_deterministic() {
        let legend = Legend::bind(ranked(&[("A", 3.0), ("B", 3.0)]));
        assert_eq!(legend.to_html(), legend.to_html());
    }

    #[test]
    fn test_css_contains_all_slot_colors() {
        let css = Legend::default().to_css();
        for rank in 0..SLOT_COUNT {
            let slot_color = SlotColor::for_rank(rank);
            assert!(css.contains(slot_color.css_class()));
            assert!(css.contains(&slot_color.color().to_hex()));
        }
    }

    #[test]
    fn test_element_name() {
        assert_eq!(Legend::default().element_name(), "Legend");
    }
}
