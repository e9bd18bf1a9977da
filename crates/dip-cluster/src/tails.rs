//! Growing clusters into the gaps between them
//!
//! Mirror correction can leave too much of a cluster's tail unassigned. For
//! every gap (before the first cluster, between clusters, after the last) the
//! gap is tested with mirroring; if it still holds structure it is clustered
//! on its own, and the outermost sub-clusters are offered to the neighbouring
//! clusters. A neighbour takes a sub-cluster, together with the rest of the
//! gap up to the neighbour, when the joined window is unimodal. This repeats
//! per gap until nothing is taken.

use crate::merge::join_window;
use crate::mirror::mirrored_dip;
use crate::segmenter::Segmentation;
use crate::types::Interval;
use crate::unidip::cluster_sorted;
use dip_stat::SignificanceEstimator;
use tracing::debug;

/// Smallest gap worth testing
const MIN_GAP: usize = 4;

/// Extend clusters into neighbouring gaps with residual structure
pub fn extend_tails(
    sorted: &[f64],
    order: &[usize],
    segmentation: &mut Segmentation,
    estimator: &SignificanceEstimator,
    significance: f64,
) {
    let n = sorted.len();
    let count = segmentation.boundaries.len();

    for i in 0..=count {
        loop {
            let boundaries = &segmentation.boundaries;
            let gap = Interval::new(
                if i == 0 { 0 } else { boundaries[i - 1].end },
                if i == count { n } else { boundaries[i].start },
            );
            if gap.len() < MIN_GAP {
                break;
            }

            let values = &sorted[gap.range()];
            let correction = mirrored_dip(values, None);
            if estimator.p_value(correction.dip, 2 * values.len() - 1) >= significance {
                break;
            }

            let inner = cluster_sorted(values, estimator, significance);
            let (Some(&first), Some(&last)) = (inner.boundaries.first(), inner.boundaries.last())
            else {
                break;
            };

            // Sub-cluster next to the left neighbour, shifted into sample space
            let left = (i != 0).then(|| {
                let neighbour = boundaries[i - 1];
                let piece = Interval::new(gap.start + first.start, gap.start + first.end);
                let window = join_window(neighbour, piece);
                let window = Interval::new(window.start, piece.end);
                (estimator.p_value_of(&sorted[window.range()]), window.end)
            });
            let right = (i != count).then(|| {
                let neighbour = boundaries[i];
                let piece = Interval::new(gap.start + last.start, gap.start + last.end);
                let window = join_window(piece, neighbour);
                let window = Interval::new(piece.start, window.end);
                (estimator.p_value_of(&sorted[window.range()]), window.start)
            });

            let p_left = left.map_or(-1.0, |(p, _)| p);
            let p_right = right.map_or(-1.0, |(p, _)| p);
            let several = inner.n_clusters > 1;
            let mut extended = false;

            if let Some((p, new_start)) = right {
                if p >= significance && (several || p > p_left) {
                    let grown = Interval::new(new_start, segmentation.boundaries[i].end);
                    debug!(
                        cluster = i,
                        from = %segmentation.boundaries[i],
                        to = %grown,
                        p_value = p,
                        "extending cluster left edge"
                    );
                    let taken = Interval::new(new_start, segmentation.boundaries[i].start);
                    segmentation.assign(order, taken, i);
                    segmentation.boundaries[i] = grown;
                    extended = true;
                }
            }
            if let Some((p, new_end)) = left {
                if p >= significance && (several || p > p_right) {
                    let grown = Interval::new(segmentation.boundaries[i - 1].start, new_end);
                    debug!(
                        cluster = i - 1,
                        from = %segmentation.boundaries[i - 1],
                        to = %grown,
                        p_value = p,
                        "extending cluster right edge"
                    );
                    let taken = Interval::new(segmentation.boundaries[i - 1].end, new_end);
                    segmentation.assign(order, taken, i - 1);
                    segmentation.boundaries[i - 1] = grown;
                    extended = true;
                }
            }

            if !extended {
                break;
            }
        }
    }
}
