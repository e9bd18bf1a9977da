//! Multidimensional dip clustering
//!
//! SkinnyDip starts with every point in one cluster and visits the
//! dimensions in order. In each dimension, every cluster that exists at the
//! start of the pass is re-clustered with UniDip on that coordinate. Its
//! first sub-cluster keeps the parent's id, further sub-clusters get fresh
//! ids, and points UniDip leaves as noise stay noise for the rest of the run.

use crate::config::DipConfig;
use crate::traits::DipClusterer;
use crate::types::Clustering;
use crate::unidip::UniDip;
use dip_core::{Error, Label, Result};
use dip_stat::PValueStrategy;
use nalgebra::DMatrix;
use tracing::{debug, instrument};

/// Converts row-major vectors to a matrix with one row per point.
pub fn rows_to_matrix(rows: &[Vec<f64>]) -> Result<DMatrix<f64>> {
    let Some(first) = rows.first() else {
        return Err(Error::empty_input());
    };
    let dims = first.len();
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != dims) {
        return Err(Error::size_mismatch(dims, row.len(), &format!("row {index}")));
    }
    Ok(DMatrix::from_fn(rows.len(), dims, |r, c| rows[r][c]))
}

/// SkinnyDip clusterer.
///
/// # Examples
///
/// ```rust
/// use dip_cluster::SkinnyDipBuilder;
///
/// // Two well separated squares of evenly spread points
/// let mut rows = Vec::new();
/// for (cx, cy) in [(0.0, 0.0), (30.0, 30.0)] {
///     for i in 0..15 {
///         for j in 0..15 {
///             rows.push(vec![cx + i as f64 * 0.1, cy + j as f64 * 0.1]);
///         }
///     }
/// }
///
/// let skinnydip = SkinnyDipBuilder::new().outliers_allowed(false).build().unwrap();
/// let clustering = skinnydip.fit_rows(&rows).unwrap();
/// assert_eq!(clustering.n_clusters, 2);
/// assert_eq!(clustering.noise_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkinnyDip {
    unidip: UniDip,
}

impl SkinnyDip {
    /// Validates `config` and creates the clusterer.
    pub fn new(config: DipConfig) -> Result<Self> {
        Ok(Self {
            unidip: UniDip::new(config)?,
        })
    }

    pub fn config(&self) -> &DipConfig {
        self.unidip.config()
    }

    /// Clusters the rows of `data`.
    #[instrument(skip(self, data), fields(n = data.nrows(), dims = data.ncols()))]
    pub fn fit(&self, data: &DMatrix<f64>) -> Result<Clustering> {
        let (n, dims) = data.shape();
        if n == 0 {
            return Err(Error::empty_input());
        }
        if dims == 0 {
            return Err(Error::InvalidInput("sample has no dimensions".to_string()));
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("SkinnyDip sample"));
        }

        if dims == 1 {
            let column: Vec<f64> = data.column(0).iter().copied().collect();
            return Ok(self.unidip.cluster(&column, false).into());
        }

        let mut labels: Vec<Label> = vec![Some(0); n];
        let mut n_clusters = 1;

        for dim in 0..dims {
            // Clusters created during this pass are refined from the next dimension on
            let existing = n_clusters;
            for id in 0..existing {
                let rows: Vec<usize> = (0..n).filter(|&row| labels[row] == Some(id)).collect();
                if rows.is_empty() {
                    continue;
                }
                let values: Vec<f64> = rows.iter().map(|&row| data[(row, dim)]).collect();
                let result = self.unidip.cluster(&values, false);

                for (&row, local) in rows.iter().zip(&result.labels) {
                    labels[row] = match *local {
                        Some(0) => Some(id),
                        Some(sub) => Some(sub + n_clusters - 1),
                        None => None,
                    };
                }
                debug!(
                    dim,
                    cluster = id,
                    points = rows.len(),
                    sub_clusters = result.n_clusters,
                    "refined cluster"
                );
                n_clusters += result.n_clusters.saturating_sub(1);
            }
        }

        debug!(n_clusters, "SkinnyDip finished");
        Ok(Clustering::new(labels, n_clusters))
    }

    /// Clusters row-major vectors.
    pub fn fit_rows(&self, rows: &[Vec<f64>]) -> Result<Clustering> {
        let data = rows_to_matrix(rows)?;
        self.fit(&data)
    }
}

impl DipClusterer for SkinnyDip {
    type Input = DMatrix<f64>;
    type Output = Clustering;

    fn config(&self) -> &DipConfig {
        SkinnyDip::config(self)
    }

    fn fit(&self, data: &DMatrix<f64>) -> Result<Clustering> {
        SkinnyDip::fit(self, data)
    }
}

fn build(
    significance: f64,
    pval_strategy: PValueStrategy,
    n_boots: usize,
    outliers_allowed: bool,
    extend_tails: bool,
) -> Result<SkinnyDip> {
    SkinnyDip::new(DipConfig {
        significance,
        pval_strategy,
        n_boots,
        outliers_allowed,
        extend_tails,
        ..DipConfig::default()
    })
}

/// Clusters the rows of a matrix, returning labels per row and the cluster count.
pub fn skinnydip(
    data: &DMatrix<f64>,
    significance: f64,
    pval_strategy: PValueStrategy,
    n_boots: usize,
    outliers_allowed: bool,
    extend_tails: bool,
) -> Result<(Vec<Label>, usize)> {
    let clustering = build(significance, pval_strategy, n_boots, outliers_allowed, extend_tails)?
        .fit(data)?;
    Ok((clustering.labels, clustering.n_clusters))
}

/// Row-major variant of [`skinnydip`].
pub fn skinnydip_rows(
    rows: &[Vec<f64>],
    significance: f64,
    pval_strategy: PValueStrategy,
    n_boots: usize,
    outliers_allowed: bool,
    extend_tails: bool,
) -> Result<(Vec<Label>, usize)> {
    let clustering = build(significance, pval_strategy, n_boots, outliers_allowed, extend_tails)?
        .fit_rows(rows)?;
    Ok((clustering.labels, clustering.n_clusters))
}
