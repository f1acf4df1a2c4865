//! Top-N aggregation of category data.
//!
//! [`aggregate`] collapses an unbounded label→magnitude mapping into an
//! ordered sequence of at most `limit` [`Bucket`]s, ranked by magnitude
//! descending. The legend binds those buckets to its fixed display
//! slots; the proportion graphic never goes through this reduction.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Label→magnitude mapping supplied for one render.
///
/// Keys are unique. Entries keep insertion order, which is what makes
/// the aggregation tie-break deterministic: two labels with equal
/// magnitudes rank in the order they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    entries: IndexMap<String, f64>,
}

impl DataSet {
    /// Create an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing the magnitude if the label already exists.
    pub fn insert(&mut self, label: impl Into<String>, magnitude: f64) {
        self.entries.insert(label.into(), magnitude);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn entry(mut self, label: impl Into<String>, magnitude: f64) -> Self {
        self.insert(label, magnitude);
        self
    }

    /// Get the magnitude for a label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.get(label).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dataset has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(label, m)| (label.as_str(), *m))
    }

    /// Sum of all magnitudes.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for DataSet {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(label, m)| (label.into(), m))
                .collect(),
        }
    }
}

/// A ranked (label, magnitude) pair surviving aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Category label
    pub label: String,
    /// Numeric magnitude
    pub magnitude: f64,
}

impl Bucket {
    /// Create a new bucket.
    #[must_use]
    pub fn new(label: impl Into<String>, magnitude: f64) -> Self {
        Self {
            label: label.into(),
            magnitude,
        }
    }
}

/// Rank all entries by magnitude descending and return the top `limit`.
///
/// Equal magnitudes keep their `data` insertion order (stable sort), so
/// repeated calls with the same input produce the same output. Entries
/// beyond `limit` are dropped, not merged into a remainder bucket.
/// Magnitudes are not validated; negative values are ranked like any
/// other.
#[must_use]
pub fn aggregate(data: &DataSet, limit: usize) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = data
        .iter()
        .map(|(label, magnitude)| Bucket::new(label, magnitude))
        .collect();
    buckets.sort_by(|a, b| {
        b.magnitude
            .partial_cmp(&a.magnitude)
            .unwrap_or(Ordering::Equal)
    });
    buckets.truncate(limit);
    buckets
}
