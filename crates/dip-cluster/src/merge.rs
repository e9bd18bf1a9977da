//! Merging of adjacent clusters
//!
//! The segmenter can cut a single mode into neighbouring pieces. Each inner
//! cluster is tested together with a window reaching into its left and right
//! neighbour; each window extends at most twice the size of the cluster on
//! the other side. When the better of the two windows is unimodal, the
//! cluster is absorbed by that neighbour and the ids above it shift down.
//! Ties go to the left neighbour.

use crate::segmenter::Segmentation;
use crate::types::Interval;
use dip_core::labels::remove_label;
use dip_stat::SignificanceEstimator;
use tracing::debug;

/// Window spanning the tail of `left` and the head of `right`
///
/// The window reaches back into `left` by twice `right`'s size and forward
/// into `right` by twice `left`'s size, clamped to the two clusters.
pub(crate) fn join_window(left: Interval, right: Interval) -> Interval {
    let start = left
        .start
        .max(left.end.saturating_sub(2 * right.len()));
    let end = right.end.min(right.start + 2 * left.len());
    Interval::new(start, end)
}

/// Merge adjacent clusters whose combined sample is unimodal
pub fn merge_clusters(
    sorted: &[f64],
    order: &[usize],
    mut segmentation: Segmentation,
    estimator: &SignificanceEstimator,
    significance: f64,
) -> Segmentation {
    let mut i = 1;
    while i + 1 < segmentation.boundaries.len() {
        let left = segmentation.boundaries[i - 1];
        let center = segmentation.boundaries[i];
        let right = segmentation.boundaries[i + 1];

        let p_left = estimator.p_value_of(&sorted[join_window(left, center).range()]);
        let p_right = estimator.p_value_of(&sorted[join_window(center, right).range()]);

        if p_left >= p_right && p_left >= significance {
            debug!(cluster = i, into = i - 1, p_value = p_left, "merging cluster left");
            // The gap between the two clusters joins the merged cluster too
            segmentation.assign(order, Interval::new(left.end, center.end), i - 1);
            segmentation.labels = remove_label(std::mem::take(&mut segmentation.labels), i);
            segmentation.boundaries[i - 1] = Interval::new(left.start, center.end);
            segmentation.boundaries.remove(i);
            segmentation.n_clusters -= 1;
        } else if p_right > p_left && p_right >= significance {
            debug!(cluster = i + 1, into = i, p_value = p_right, "merging cluster right");
            segmentation.assign(order, Interval::new(center.end, right.end), i);
            segmentation.labels = remove_label(std::mem::take(&mut segmentation.labels), i + 1);
            segmentation.boundaries[i] = Interval::new(center.start, right.end);
            segmentation.boundaries.remove(i + 1);
            segmentation.n_clusters -= 1;
        } else {
            i += 1;
        }
    }
    segmentation
}
