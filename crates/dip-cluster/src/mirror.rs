//! Boundary correction by mirroring
//!
//! The dip test is biased at the edges of a sample: a cluster that is cut
//! off on one side looks unimodal, but its modal interval hugs the cut. To
//! counter this, the sample is reflected about its first point and,
//! separately, about its last point. Whichever reflection has the larger dip
//! supplies the modal interval, mapped back into the original index space.

use dip_stat::dip;

/// Dip and corrected modal interval of a mirrored sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorCorrection {
    /// Dip of the winning reflection, computed on `2n - 1` points
    pub dip: f64,
    /// Inclusive `(low, high)` in the unmirrored sample
    pub modal_interval: (usize, usize),
}

/// Sample reflected about its first point: `x0 - (x[n-1] - x0), ..., x0, ..., x[n-1]`
fn mirror_left(sorted: &[f64]) -> Vec<f64> {
    let pivot = sorted[0];
    sorted[1..]
        .iter()
        .rev()
        .map(|&x| pivot - (x - pivot))
        .chain(sorted.iter().copied())
        .collect()
}

/// Sample reflected about its last point
fn mirror_right(sorted: &[f64]) -> Vec<f64> {
    let pivot = sorted[sorted.len() - 1];
    sorted
        .iter()
        .copied()
        .chain(
            sorted[..sorted.len() - 1]
                .iter()
                .rev()
                .map(|&x| pivot + (pivot - x)),
        )
        .collect()
}

/// Mirror-corrected modal interval of a sorted, non-empty sample
///
/// `original` is the modal interval of the unmirrored sample when the caller
/// already has it; it is only needed when the winning interval straddles the
/// reflection point and is computed on demand otherwise.
pub fn mirrored_dip(sorted: &[f64], original: Option<(usize, usize)>) -> MirrorCorrection {
    let n = sorted.len();
    if n < 2 {
        return MirrorCorrection {
            dip: 0.0,
            modal_interval: (0, n.saturating_sub(1)),
        };
    }

    let left = dip(&mirror_left(sorted));
    let right = dip(&mirror_right(sorted));
    let original = || original.unwrap_or_else(|| dip(sorted).modal_interval);

    let (winner, modal_interval) = if left.dip > right.dip {
        let (low, high) = left.modal_interval;
        // Index n - 1 is the pivot; n.. is the original sample shifted by n - 1
        let interval = if low < n && high >= n {
            original()
        } else if low >= n {
            (low - (n - 1), high - (n - 1))
        } else {
            ((n - 1) - high, (n - 1) - low)
        };
        (left, interval)
    } else {
        let (low, high) = right.modal_interval;
        let interval = if low < n && high >= n {
            original()
        } else if high < n {
            (low, high)
        } else {
            (2 * (n - 1) - high, 2 * (n - 1) - low)
        };
        (right, interval)
    };

    MirrorCorrection {
        dip: winner.dip,
        modal_interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reflections() {
        let x = [1.0, 2.0, 4.0];
        assert_eq!(mirror_left(&x), vec![-2.0, 0.0, 1.0, 2.0, 4.0]);
        assert_eq!(mirror_right(&x), vec![1.0, 2.0, 4.0, 6.0, 7.0]);
    }

    #[test]
    fn test_interval_stays_in_range() {
        let x: Vec<f64> = (0..25).map(|i| (i as f64 * 0.37).exp()).collect();
        let correction = mirrored_dip(&x, None);
        let (low, high) = correction.modal_interval;
        assert!(low <= high && high < x.len());
        assert!(correction.dip > 0.0);
    }

    #[test]
    fn test_symmetric_sample_interval_is_symmetric() {
        let half = [-3.0, -2.2, -1.7, -1.3, -1.0, -0.7, -0.5, -0.3, -0.1];
        let mut x: Vec<f64> = half.to_vec();
        x.push(0.0);
        x.extend(half.iter().map(|v| -v));
        x.sort_by(f64::total_cmp);
        let n = x.len();

        let correction = mirrored_dip(&x, None);
        let (low, high) = correction.modal_interval;
        assert_eq!(low + high, n - 1);
        assert_relative_eq!(correction.dip, 0.0702702702702703, epsilon = 1e-9);

        let left = dip(&mirror_left(&x)).dip;
        let right = dip(&mirror_right(&x)).dip;
        assert_relative_eq!(left, right, epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_samples() {
        assert_eq!(mirrored_dip(&[3.0], None).modal_interval, (0, 0));
        let correction = mirrored_dip(&[1.0, 2.0], None);
        assert!(correction.modal_interval.1 < 2);
    }
}
