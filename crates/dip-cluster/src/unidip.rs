//! One-dimensional dip clustering
//!
//! UniDip sorts the sample once, splits it into unimodal intervals, merges
//! neighbours that turn out to be one mode, and then optionally grows
//! clusters into the gaps and hands noise points to the nearest cluster.

use crate::config::DipConfig;
use crate::merge::merge_clusters;
use crate::outliers::assign_outliers;
use crate::segmenter::{segment, Segmentation};
use crate::tails::extend_tails;
use crate::traits::DipClusterer;
use crate::types::UniDipResult;
use dip_core::{utils, Error, Label, Result};
use dip_stat::{PValueStrategy, SignificanceEstimator};
use tracing::{debug, instrument};

/// Segment and merge an ascending sample whose rows are its positions
pub(crate) fn cluster_sorted(
    sorted: &[f64],
    estimator: &SignificanceEstimator,
    significance: f64,
) -> Segmentation {
    let order: Vec<usize> = (0..sorted.len()).collect();
    let segmentation = segment(sorted, &order, estimator, significance);
    merge_clusters(sorted, &order, segmentation, estimator, significance)
}

/// UniDip clusterer.
///
/// # Examples
///
/// ```rust
/// use dip_cluster::UniDipBuilder;
///
/// // Two logistic-shaped modes
/// let quantiles: Vec<f64> = (0..100)
///     .map(|i| (i as f64 + 0.5) / 100.0)
///     .map(|u| (u / (1.0 - u)).ln())
///     .collect();
/// let mut sample = quantiles.clone();
/// sample.extend(quantiles.iter().map(|x| x + 40.0));
///
/// let unidip = UniDipBuilder::new().significance(0.05).build().unwrap();
/// let result = unidip.fit(&sample).unwrap();
/// assert_eq!(result.n_clusters, 2);
/// ```
#[derive(Debug, Clone)]
pub struct UniDip {
    config: DipConfig,
    estimator: SignificanceEstimator,
}

impl Default for UniDip {
    fn default() -> Self {
        Self {
            config: DipConfig::default(),
            estimator: SignificanceEstimator::table(),
        }
    }
}

impl UniDip {
    /// Validates `config` and creates the clusterer.
    pub fn new(config: DipConfig) -> Result<Self> {
        let estimator = config.estimator()?;
        Ok(Self { config, estimator })
    }

    pub fn config(&self) -> &DipConfig {
        &self.config
    }

    pub fn estimator(&self) -> &SignificanceEstimator {
        &self.estimator
    }

    /// Clusters a sample given in any order.
    #[instrument(skip(self, sample), fields(n = sample.len(), significance = self.config.significance))]
    pub fn fit(&self, sample: &[f64]) -> Result<UniDipResult> {
        utils::validate_sample(sample, "UniDip sample")?;
        Ok(self.cluster(sample, false))
    }

    /// Clusters an ascending sample without sorting it again.
    ///
    /// Rows are the sample positions, so `order` in the result is the identity.
    #[instrument(skip(self, sorted), fields(n = sorted.len(), significance = self.config.significance))]
    pub fn fit_sorted(&self, sorted: &[f64]) -> Result<UniDipResult> {
        utils::validate_sample(sorted, "UniDip sample")?;
        if !utils::is_sorted(sorted) {
            return Err(Error::InvalidInput(
                "sample flagged as sorted is not in ascending order".to_string(),
            ));
        }
        Ok(self.cluster(sorted, true))
    }

    /// Full pipeline on a validated sample
    pub(crate) fn cluster(&self, sample: &[f64], already_sorted: bool) -> UniDipResult {
        let significance = self.config.significance;
        let (sorted, order) = if already_sorted {
            (sample.to_vec(), (0..sample.len()).collect())
        } else {
            utils::sort_with_order(sample)
        };

        let segmentation = segment(&sorted, &order, &self.estimator, significance);
        let mut segmentation =
            merge_clusters(&sorted, &order, segmentation, &self.estimator, significance);

        if self.config.extend_tails {
            extend_tails(&sorted, &order, &mut segmentation, &self.estimator, significance);
        }
        if !self.config.outliers_allowed {
            assign_outliers(&sorted, &order, &mut segmentation);
        }

        debug!(
            n_clusters = segmentation.n_clusters,
            noise = segmentation.labels.iter().filter(|l| l.is_none()).count(),
            "UniDip finished"
        );

        UniDipResult {
            labels: segmentation.labels,
            n_clusters: segmentation.n_clusters,
            sorted,
            order,
            boundaries: segmentation.boundaries,
        }
    }
}

impl DipClusterer for UniDip {
    type Input = [f64];
    type Output = UniDipResult;

    fn config(&self) -> &DipConfig {
        &self.config
    }

    fn fit(&self, data: &[f64]) -> Result<UniDipResult> {
        UniDip::fit(self, data)
    }
}

/// Clusters a one-dimensional sample, returning labels per row and the cluster count.
pub fn unidip(
    sample: &[f64],
    significance: f64,
    pval_strategy: PValueStrategy,
    n_boots: usize,
    outliers_allowed: bool,
    extend_tails: bool,
) -> Result<(Vec<Label>, usize)> {
    let config = DipConfig {
        significance,
        pval_strategy,
        n_boots,
        outliers_allowed,
        extend_tails,
        ..DipConfig::default()
    };
    let result = UniDip::new(config)?.fit(sample)?;
    Ok((result.labels, result.n_clusters))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two logistic modes of 80 points each, interleaved
    fn two_blocks() -> Vec<f64> {
        let quantile = |i: usize| {
            let u = (i as f64 + 0.5) / 80.0;
            (u / (1.0 - u)).ln()
        };
        (0..80)
            .flat_map(|i| [quantile(i), 25.0 + quantile(i)])
            .collect()
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        let unidip = UniDip::default();
        assert!(matches!(
            unidip.fit(&[]),
            Err(Error::InsufficientData { expected: 1, actual: 0 })
        ));
        assert!(matches!(unidip.fit(&[1.0, f64::INFINITY]), Err(Error::Computation(_))));
        assert!(matches!(unidip.fit_sorted(&[2.0, 1.0]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_fit_sorted_matches_fit() {
        let mut sample = two_blocks();
        sample.sort_by(f64::total_cmp);
        let unidip = UniDip::default();
        let a = unidip.fit(&sample).unwrap();
        let b = unidip.fit_sorted(&sample).unwrap();
        assert_eq!(a.n_clusters, b.n_clusters);
        assert_eq!(a.boundaries, b.boundaries);
        assert_eq!(b.order, (0..sample.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_result_is_consistent() {
        let result = UniDip::default().fit(&two_blocks()).unwrap();
        assert_eq!(result.n_clusters, 2);
        assert_eq!(result.boundaries.len(), result.n_clusters);
        for (id, interval) in result.boundaries.iter().enumerate() {
            for k in interval.range() {
                assert_eq!(result.labels[result.order[k]], Some(id));
            }
        }
        assert!(result.boundaries.windows(2).all(|w| w[0].end <= w[1].start));
    }

    #[test]
    fn test_free_function_validates_config() {
        let sample = two_blocks();
        assert!(unidip(&sample, 0.0, PValueStrategy::Table, 10, true, false).is_err());
        assert!(unidip(&sample, 0.05, PValueStrategy::Bootstrap, 0, true, false).is_err());
        let (labels, k) = unidip(&sample, 0.01, PValueStrategy::Table, 10, false, false).unwrap();
        assert_eq!(k, 2);
        assert!(labels.iter().all(Option::is_some));
    }

    #[test]
    fn test_tiny_samples_form_one_cluster() {
        let result = UniDip::default().fit(&[3.0, 1.0]).unwrap();
        assert_eq!(result.n_clusters, 1);
        assert_eq!(result.labels, vec![Some(0), Some(0)]);

        let result = UniDip::default().fit(&[7.0; 12]).unwrap();
        assert_eq!(result.n_clusters, 1);
    }
}
