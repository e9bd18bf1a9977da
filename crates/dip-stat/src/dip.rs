//! Hartigan's dip statistic
//!
//! The dip of a sample is the maximum distance between its empirical
//! distribution function and the closest unimodal distribution function.
//! This is the AS 217 algorithm: it alternates between the greatest convex
//! minorant (GCM) and least concave majorant (LCM) of the empirical CDF,
//! shrinking the candidate modal interval `[low, high]` until the distance
//! between the two fits stops improving the dip.
//!
//! All distances are accumulated in units of `2n * dip` and divided out at
//! the end, which avoids a division per comparison.

use dip_core::{utils, Result};

/// Outcome of a dip computation on a sorted sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipResult {
    /// The dip statistic, in `[0, 0.25]`
    pub dip: f64,
    /// Inclusive zero-based `(low, high)` indices of the modal interval
    pub modal_interval: (usize, usize),
    /// Number of points the statistic was computed on
    pub n_points: usize,
}

impl DipResult {
    /// Result for samples too small or too flat to carry any modality information
    fn degenerate(n_points: usize) -> Self {
        Self {
            dip: 0.0,
            modal_interval: (0, n_points.saturating_sub(1)),
            n_points,
        }
    }

    /// Lower index of the modal interval
    pub fn low(&self) -> usize {
        self.modal_interval.0
    }

    /// Upper (inclusive) index of the modal interval
    pub fn high(&self) -> usize {
        self.modal_interval.1
    }
}

/// Reusable index buffers for repeated dip computations
///
/// Bootstrap evaluation computes thousands of dips of the same size; keeping
/// one workspace per worker avoids reallocating the four index arrays.
#[derive(Debug, Default, Clone)]
pub struct DipWorkspace {
    mn: Vec<usize>,
    mj: Vec<usize>,
    gcm: Vec<usize>,
    lcm: Vec<usize>,
}

impl DipWorkspace {
    /// Create an empty workspace; buffers grow on first use
    pub fn new() -> Self {
        Self::default()
    }

    fn prepare(&mut self, n: usize) {
        for buffer in [&mut self.mn, &mut self.mj, &mut self.gcm, &mut self.lcm] {
            buffer.clear();
            buffer.resize(n + 2, 0);
        }
    }

    /// Compute the dip of an ascending sample
    ///
    /// Fewer than four points, or a single distinct value, give a dip of 0 and
    /// the full index range as modal interval.
    pub fn compute(&mut self, sorted: &[f64]) -> DipResult {
        let n = sorted.len();
        if n < 4 || sorted[0] == sorted[n - 1] {
            return DipResult::degenerate(n);
        }
        debug_assert!(utils::is_sorted(sorted), "dip requires sorted input");

        self.prepare(n);
        let DipWorkspace { mn, mj, gcm, lcm } = self;
        // One-based view of the sample
        let x = |i: usize| sorted[i - 1];

        // Indices over which combination is needed for the convex minorant
        mn[1] = 1;
        for j in 2..=n {
            mn[j] = j - 1;
            loop {
                let mnj = mn[j];
                let mnmnj = mn[mnj];
                if mnj == 1
                    || (x(j) - x(mnj)) * ((mnj - mnmnj) as f64)
                        < (x(mnj) - x(mnmnj)) * ((j - mnj) as f64)
                {
                    break;
                }
                mn[j] = mnmnj;
            }
        }

        // Indices over which combination is needed for the concave majorant
        mj[n] = n;
        for k in (1..n).rev() {
            mj[k] = k + 1;
            loop {
                let mjk = mj[k];
                let mjmjk = mj[mjk];
                if mjk == n
                    || (x(k) - x(mjk)) * (mjk as f64 - mjmjk as f64)
                        < (x(mjk) - x(mjmjk)) * (k as f64 - mjk as f64)
                {
                    break;
                }
                mj[k] = mjmjk;
            }
        }

        let mut low = 1;
        let mut high = n;
        let mut dip = 1.0_f64;

        loop {
            if high <= low {
                break;
            }

            // Change points of the GCM from high down to low
            gcm[1] = high;
            let mut i = 1;
            while gcm[i] > low {
                gcm[i + 1] = mn[gcm[i]];
                i += 1;
            }
            let l_gcm = i;
            let mut ig = l_gcm;
            let mut ix = ig - 1;

            // Change points of the LCM from low up to high
            lcm[1] = low;
            let mut i = 1;
            while lcm[i] < high {
                lcm[i + 1] = mj[lcm[i]];
                i += 1;
            }
            let l_lcm = i;
            let mut ih = l_lcm;
            let mut iv = 2;

            // Largest distance between the GCM and the LCM from low to high
            let mut d = 0.0_f64;
            if l_gcm != 2 || l_lcm != 2 {
                loop {
                    let gcmix = gcm[ix];
                    let lcmiv = lcm[iv];
                    if gcmix > lcmiv {
                        // Next point is from the LCM
                        let gcmi1 = gcm[ix + 1];
                        let dx = (lcmiv as f64 - gcmi1 as f64 + 1.0)
                            - (x(lcmiv) - x(gcmi1)) * (gcmix - gcmi1) as f64
                                / (x(gcmix) - x(gcmi1));
                        iv += 1;
                        if dx >= d {
                            d = dx;
                            ig = ix + 1;
                            ih = iv - 1;
                        }
                    } else {
                        // Next point is from the GCM
                        let lcmiv1 = lcm[iv - 1];
                        let dx = (x(gcmix) - x(lcmiv1)) * (lcmiv - lcmiv1) as f64
                            / (x(lcmiv) - x(lcmiv1))
                            - (gcmix as f64 - lcmiv1 as f64 - 1.0);
                        ix -= 1;
                        if dx >= d {
                            d = dx;
                            ig = ix + 1;
                            ih = iv;
                        }
                    }
                    ix = ix.max(1);
                    iv = iv.min(l_lcm);
                    if gcm[ix] == lcm[iv] {
                        break;
                    }
                }
            } else {
                d = 1.0;
            }

            if d < dip {
                break;
            }

            // Dip for the convex minorant
            let mut dip_l = 0.0_f64;
            for j in ig..l_gcm {
                let mut max_t = 1.0_f64;
                let jb = gcm[j + 1];
                let je = gcm[j];
                if je - jb > 1 && x(je) != x(jb) {
                    let c = (je - jb) as f64 / (x(je) - x(jb));
                    for jj in jb..=je {
                        let t = (jj - jb + 1) as f64 - (x(jj) - x(jb)) * c;
                        max_t = max_t.max(t);
                    }
                }
                dip_l = dip_l.max(max_t);
            }

            // Dip for the concave majorant
            let mut dip_u = 0.0_f64;
            for j in ih..l_lcm {
                let mut max_t = 1.0_f64;
                let jb = lcm[j];
                let je = lcm[j + 1];
                if je - jb > 1 && x(je) != x(jb) {
                    let c = (je - jb) as f64 / (x(je) - x(jb));
                    for jj in jb..=je {
                        let t = (x(jj) - x(jb)) * c - (jj as f64 - jb as f64 - 1.0);
                        max_t = max_t.max(t);
                    }
                }
                dip_u = dip_u.max(max_t);
            }

            dip = dip.max(dip_u.max(dip_l));

            // Without this check the cycle can repeat forever
            if low == gcm[ig] && high == lcm[ih] {
                break;
            }
            low = gcm[ig];
            high = lcm[ih];
        }

        DipResult {
            dip: dip / (2 * n) as f64,
            modal_interval: (low - 1, high - 1),
            n_points: n,
        }
    }
}

/// Dip statistic and modal interval of an ascending sample
///
/// # Examples
///
/// ```rust
/// use dip_stat::dip;
///
/// // Evenly spaced points attain the minimal dip 1 / (2n)
/// let sample: Vec<f64> = (0..10).map(f64::from).collect();
/// let result = dip(&sample);
/// assert!((result.dip - 0.05).abs() < 1e-12);
/// ```
pub fn dip(sorted: &[f64]) -> DipResult {
    DipWorkspace::new().compute(sorted)
}

/// Dip statistic only
pub fn dip_value(sorted: &[f64]) -> f64 {
    dip(sorted).dip
}

/// Validating entry point: checks finiteness and sorts when needed
pub fn dip_test(sample: &[f64], is_sorted: bool) -> Result<DipResult> {
    utils::validate_sample(sample, "dip sample")?;
    if is_sorted {
        Ok(dip(sample))
    } else {
        let (sorted, _) = utils::sort_with_order(sample);
        Ok(dip(&sorted))
    }
}
