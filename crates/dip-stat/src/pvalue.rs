//! Significance of the dip statistic
//!
//! Two strategies are available: interpolation in the critical value table
//! and a seeded bootstrap against uniform samples of the same size. The
//! bootstrap null distribution depends only on the sample size and seed, so
//! an estimator caches it per size and reuses it for every later query.

use crate::dip::{DipResult, DipWorkspace};
use crate::table::table_pvalue;
use dip_core::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument, trace};

/// Default number of bootstrap resamples
pub const DEFAULT_N_BOOTS: usize = 2000;

/// Default bootstrap seed
pub const DEFAULT_SEED: u64 = 0;

/// How dip p-values are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PValueStrategy {
    /// Interpolate in the tabulated critical values
    #[default]
    Table,
    /// Simulate the uniform null distribution
    Bootstrap,
}

impl PValueStrategy {
    /// Lowercase name, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Bootstrap => "bootstrap",
        }
    }
}

impl fmt::Display for PValueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PValueStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "bootstrap" => Ok(Self::Bootstrap),
            _ => Err(Error::unknown_strategy(s)),
        }
    }
}

/// A dip result together with its p-value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipOutcome {
    pub result: DipResult,
    pub p_value: f64,
}

impl DipOutcome {
    /// Whether unimodality is rejected at level `alpha`
    pub fn rejects_unimodality(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

type NullCache = Arc<Mutex<HashMap<usize, Arc<Vec<f64>>>>>;

/// P-value source for dip statistics
///
/// Cloning is cheap and clones share the bootstrap cache.
///
/// # Examples
///
/// ```rust
/// use dip_stat::SignificanceEstimator;
///
/// let estimator = SignificanceEstimator::bootstrap(200, 7).unwrap();
/// let sample: Vec<f64> = (0..50).map(|i| (i as f64 / 49.0).powi(3)).collect();
/// let outcome = estimator.test(&sample);
/// assert!((0.0..=1.0).contains(&outcome.p_value));
/// ```
#[derive(Debug, Clone)]
pub struct SignificanceEstimator {
    strategy: PValueStrategy,
    n_boots: usize,
    seed: u64,
    null_cache: NullCache,
}

impl Default for SignificanceEstimator {
    fn default() -> Self {
        Self::table()
    }
}

impl SignificanceEstimator {
    /// Table lookup estimator
    pub fn table() -> Self {
        Self {
            strategy: PValueStrategy::Table,
            n_boots: DEFAULT_N_BOOTS,
            seed: DEFAULT_SEED,
            null_cache: NullCache::default(),
        }
    }

    /// Bootstrap estimator with `n_boots` resamples drawn from `seed`
    pub fn bootstrap(n_boots: usize, seed: u64) -> Result<Self> {
        Self::from_config(PValueStrategy::Bootstrap, n_boots, seed)
    }

    /// Build an estimator from configuration values
    ///
    /// `n_boots` is checked even for the table strategy so that a bad
    /// configuration fails the same way whichever strategy is selected.
    pub fn from_config(strategy: PValueStrategy, n_boots: usize, seed: u64) -> Result<Self> {
        if n_boots == 0 {
            return Err(Error::InvalidParameter(
                "n_boots must be positive".to_string(),
            ));
        }
        Ok(Self {
            strategy,
            n_boots,
            seed,
            null_cache: NullCache::default(),
        })
    }

    pub fn strategy(&self) -> PValueStrategy {
        self.strategy
    }

    pub fn n_boots(&self) -> usize {
        self.n_boots
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// P-value of a dip observed on `n` points
    pub fn p_value(&self, dip: f64, n: usize) -> f64 {
        if n < 4 {
            return 1.0;
        }
        match self.strategy {
            PValueStrategy::Table => table_pvalue(dip, n),
            PValueStrategy::Bootstrap => {
                let null = self.null_distribution(n);
                // Fraction of null dips at least as large as the observed one
                let below = null.partition_point(|&d| d < dip);
                (null.len() - below) as f64 / null.len() as f64
            }
        }
    }

    /// Dip and p-value of an ascending sample
    pub fn test(&self, sorted: &[f64]) -> DipOutcome {
        let result = crate::dip(sorted);
        let p_value = self.p_value(result.dip, sorted.len());
        trace!(
            n = sorted.len(),
            dip = result.dip,
            p_value,
            low = result.low(),
            high = result.high(),
            "dip test"
        );
        DipOutcome { result, p_value }
    }

    /// P-value of an ascending sample
    pub fn p_value_of(&self, sorted: &[f64]) -> f64 {
        self.test(sorted).p_value
    }

    /// Sorted bootstrap dips for sample size `n`, computed once per size
    pub fn null_distribution(&self, n: usize) -> Arc<Vec<f64>> {
        let mut cache = self.null_cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(null) = cache.get(&n) {
            return Arc::clone(null);
        }
        let null = Arc::new(simulate_null(n, self.n_boots, self.seed));
        cache.insert(n, Arc::clone(&null));
        null
    }

    /// Number of sample sizes with a cached null distribution
    pub fn cached_sizes(&self) -> usize {
        self.null_cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

/// Dip of one uniform resample; resample `index` reads its own ChaCha stream
fn resample_dip(
    workspace: &mut DipWorkspace,
    buffer: &mut Vec<f64>,
    n: usize,
    seed: u64,
    index: usize,
) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    buffer.clear();
    buffer.extend((0..n).map(|_| rng.gen::<f64>()));
    buffer.sort_unstable_by(f64::total_cmp);
    workspace.compute(buffer).dip
}

#[instrument(skip_all, fields(n = n, n_boots = n_boots, seed = seed))]
fn simulate_null(n: usize, n_boots: usize, seed: u64) -> Vec<f64> {
    debug!("Simulating {} uniform resamples of size {}", n_boots, n);

    #[cfg(feature = "parallel")]
    let mut dips: Vec<f64> = {
        use rayon::prelude::*;
        (0..n_boots)
            .into_par_iter()
            .map_init(
                || (DipWorkspace::new(), Vec::with_capacity(n)),
                |(workspace, buffer), index| resample_dip(workspace, buffer, n, seed, index),
            )
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut dips: Vec<f64> = {
        let mut workspace = DipWorkspace::new();
        let mut buffer = Vec::with_capacity(n);
        (0..n_boots)
            .map(|index| resample_dip(&mut workspace, &mut buffer, n, seed, index))
            .collect()
    };

    dips.sort_unstable_by(f64::total_cmp);
    dips
}

/// P-value of a dip observed on `n_points` points
///
/// The bootstrap strategy draws from the default seed; use a
/// [`SignificanceEstimator`] to choose the seed or to reuse the simulated
/// null distribution across calls.
#[instrument(skip_all, fields(n = n_points, strategy = %strategy, n_boots = n_boots))]
pub fn dip_pvalue(
    dip: f64,
    n_points: usize,
    strategy: PValueStrategy,
    n_boots: usize,
) -> Result<f64> {
    if !dip.is_finite() || dip < 0.0 {
        return Err(Error::InvalidInput(format!(
            "dip must be a finite non-negative value, got {dip}"
        )));
    }
    let estimator = SignificanceEstimator::from_config(strategy, n_boots, DEFAULT_SEED)?;
    Ok(estimator.p_value(dip, n_points))
}
