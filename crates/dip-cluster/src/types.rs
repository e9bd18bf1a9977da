//! Core types for dip-test clustering

use dip_core::labels::{self, Label};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Half-open index range `[start, end)` into a sorted sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "interval start {start} past end {end}");
        Self { start, end }
    }

    /// Returns the number of indices covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Checks if a sorted index falls within this interval.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A unit of work for the segmenter.
///
/// `verified` marks intervals already known to be a modal interval of a
/// significant parent, which are resolved as-is rather than mirror-corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub interval: Interval,
    pub verified: bool,
}

impl Candidate {
    pub fn new(start: usize, end: usize, verified: bool) -> Self {
        Self {
            interval: Interval::new(start, end),
            verified,
        }
    }
}

/// Result of one-dimensional dip clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniDipResult {
    /// Cluster per row of the input, `None` for noise.
    pub labels: Vec<Label>,
    /// Number of clusters found.
    pub n_clusters: usize,
    /// The sample in ascending order.
    pub sorted: Vec<f64>,
    /// `order[k]` is the input row of `sorted[k]`.
    pub order: Vec<usize>,
    /// Cluster extents in sorted-index space, ascending and disjoint.
    pub boundaries: Vec<Interval>,
}

impl UniDipResult {
    /// Returns the labels with `-1` for noise.
    pub fn labels_i32(&self) -> Vec<i32> {
        labels::labels_to_i32(&self.labels)
    }

    /// Returns the number of rows left unassigned.
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_none()).count()
    }

    /// Returns the value range `(min, max)` covered by each cluster's boundary interval.
    pub fn cluster_ranges(&self) -> Vec<(f64, f64)> {
        self.boundaries
            .iter()
            .filter(|b| !b.is_empty())
            .map(|b| (self.sorted[b.start], self.sorted[b.end - 1]))
            .collect()
    }

    /// Drops the sorted view, keeping only the labels.
    pub fn into_clustering(self) -> Clustering {
        Clustering {
            labels: self.labels,
            n_clusters: self.n_clusters,
        }
    }
}

/// Labels over the rows of a sample, with the number of clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clustering {
    pub labels: Vec<Label>,
    pub n_clusters: usize,
}

impl Clustering {
    pub fn new(labels: Vec<Label>, n_clusters: usize) -> Self {
        Self { labels, n_clusters }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_none()).count()
    }

    /// Returns the number of points per cluster id.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        labels::cluster_sizes(&self.labels, self.n_clusters)
    }

    /// Returns the row indices assigned to cluster `id`.
    pub fn members(&self, id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label == Some(id))
            .map(|(row, _)| row)
            .collect()
    }

    pub fn labels_i32(&self) -> Vec<i32> {
        labels::labels_to_i32(&self.labels)
    }
}

impl From<UniDipResult> for Clustering {
    fn from(result: UniDipResult) -> Self {
        result.into_clustering()
    }
}
