//! Assignment of noise points to clusters
//!
//! Points below the first cluster join it, points above the last cluster join
//! that one, and each gap between two clusters is cut at the midpoint between
//! the last value of the lower cluster and the first value of the upper one.

use crate::segmenter::Segmentation;
use crate::types::Interval;
use tracing::debug;

/// Give every noise point a cluster
pub fn assign_outliers(sorted: &[f64], order: &[usize], segmentation: &mut Segmentation) {
    let n = sorted.len();
    let boundaries = segmentation.boundaries.clone();
    let (Some(first), Some(last)) = (boundaries.first(), boundaries.last()) else {
        return;
    };
    let last_id = boundaries.len() - 1;

    segmentation.assign(order, Interval::new(0, first.start), 0);
    segmentation.assign(order, Interval::new(last.end, n), last_id);

    for (id, pair) in boundaries.windows(2).enumerate() {
        let (lower, upper) = (pair[0], pair[1]);
        if lower.end == upper.start {
            continue;
        }
        let below = sorted[lower.end - 1];
        let above = sorted[upper.start];
        let border = below + (above - below) / 2.0;
        // Sorted positions below the border go to the lower cluster
        let split = lower.end + sorted[lower.end..upper.start].partition_point(|&x| x < border);
        debug!(lower = id, upper = id + 1, border, "splitting gap between clusters");
        segmentation.assign(order, Interval::new(lower.end, split), id);
        segmentation.assign(order, Interval::new(split, upper.start), id + 1);
    }
}
