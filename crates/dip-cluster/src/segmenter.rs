//! Recursive partition of a sorted sample into unimodal intervals
//!
//! Work is a queue of candidate intervals, processed front first. A candidate
//! whose dip is significant is split around its modal interval: the modal
//! interval itself is queued as verified, and each flank is queued only if the
//! flank joined with the modal interval is itself significantly multimodal.
//! Because the pieces are pushed to the front in right, modal, left order,
//! the queue resolves clusters from left to right and the boundary list comes
//! out ascending.
//!
//! A candidate that is not significant becomes a cluster. Verified candidates
//! keep their extent; unverified ones are narrowed to the mirror-corrected
//! modal interval, and whatever they lose is left as noise.

use crate::mirror::mirrored_dip;
use crate::types::{Candidate, Interval};
use dip_core::Label;
use dip_stat::SignificanceEstimator;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Clusters of a sorted sample before or after merging.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Cluster per input row, `None` for noise.
    pub labels: Vec<Label>,
    pub n_clusters: usize,
    /// Cluster extents in sorted-index space.
    pub boundaries: Vec<Interval>,
}

impl Segmentation {
    fn empty(n: usize) -> Self {
        Self {
            labels: vec![None; n],
            n_clusters: 0,
            boundaries: Vec::new(),
        }
    }

    /// Labels the rows behind sorted positions `range` with `id`.
    pub(crate) fn assign(&mut self, order: &[usize], range: Interval, id: usize) {
        for &row in &order[range.range()] {
            self.labels[row] = Some(id);
        }
    }
}

/// What to do with a window whose dip is significant
#[derive(Debug, PartialEq)]
enum Split {
    /// No piece is worth queueing; the window stays noise
    Unresolved,
    /// Every piece is the window itself, so it is resolved as one cluster
    Whole,
    /// Pieces to queue ahead of the remaining windows
    Pieces(Vec<Candidate>),
}

fn plan_split(candidate: Candidate, pieces: Vec<Candidate>) -> Split {
    if pieces.is_empty() {
        Split::Unresolved
    } else if pieces.iter().all(|piece| piece.interval == candidate.interval) {
        // Requeueing the same window would never terminate
        Split::Whole
    } else {
        Split::Pieces(pieces)
    }
}

/// Splits `sorted` into clusters.
///
/// `order[k]` is the row of `sorted[k]`; labels are indexed by row.
pub fn segment(
    sorted: &[f64],
    order: &[usize],
    estimator: &SignificanceEstimator,
    significance: f64,
) -> Segmentation {
    let n = sorted.len();
    let mut segmentation = Segmentation::empty(n);
    if n == 0 {
        return segmentation;
    }

    let mut queue = VecDeque::from([Candidate::new(0, n, false)]);
    while let Some(candidate) = queue.pop_front() {
        let Interval { start, end } = candidate.interval;
        let window = &sorted[start..end];
        let outcome = estimator.test(window);
        let (low, high) = outcome.result.modal_interval;

        let cluster = if outcome.rejects_unimodality(significance) {
            let mut pieces = Vec::with_capacity(3);
            if high + 1 != window.len()
                && estimator.p_value_of(&sorted[start + low..end]) < significance
            {
                pieces.push(Candidate::new(start + high + 1, end, false));
            }
            if low != high {
                pieces.push(Candidate::new(start + low, start + high + 1, true));
            }
            if low != 0 && estimator.p_value_of(&sorted[start..start + high + 1]) < significance {
                pieces.push(Candidate::new(start, start + low, false));
            }

            match plan_split(candidate, pieces) {
                Split::Unresolved => {
                    debug!(
                        interval = %candidate.interval,
                        p_value = outcome.p_value,
                        "significant window has no significant piece, leaving it unassigned"
                    );
                    None
                }
                Split::Whole => {
                    debug!(
                        interval = %candidate.interval,
                        p_value = outcome.p_value,
                        "significant window cannot be split, keeping it whole"
                    );
                    Some(candidate.interval)
                }
                Split::Pieces(pieces) => {
                    trace!(
                        interval = %candidate.interval,
                        p_value = outcome.p_value,
                        pieces = pieces.len(),
                        "split"
                    );
                    for piece in pieces {
                        queue.push_front(piece);
                    }
                    None
                }
            }
        } else if candidate.verified {
            Some(candidate.interval)
        } else {
            let correction = mirrored_dip(window, Some((low, high)));
            let (low, high) = correction.modal_interval;
            Some(Interval::new(start + low, start + high + 1))
        };

        if let Some(cluster) = cluster {
            let id = segmentation.n_clusters;
            debug!(
                cluster = id,
                interval = %cluster,
                lower = sorted[cluster.start],
                upper = sorted[cluster.end - 1],
                "resolved cluster"
            );
            segmentation.assign(order, cluster, id);
            segmentation.boundaries.push(cluster);
            segmentation.n_clusters += 1;
        }
    }

    segmentation
}
