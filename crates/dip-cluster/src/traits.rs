//! Core traits for dip-test clustering

use crate::config::DipConfig;
use crate::types::Clustering;
use dip_core::Result;

/// Trait for clusterers driven by the dip test.
pub trait DipClusterer {
    /// Sample type accepted by [`fit`](Self::fit).
    type Input: ?Sized;
    /// Result of a fit.
    type Output;

    /// Returns the configuration the clusterer was built with.
    fn config(&self) -> &DipConfig;

    /// Clusters `data`.
    fn fit(&self, data: &Self::Input) -> Result<Self::Output>;

    /// Clusters `data` and returns only the labels, with `-1` for noise.
    fn fit_predict(&self, data: &Self::Input) -> Result<Vec<i32>>
    where
        Self::Output: Into<Clustering>,
    {
        let clustering: Clustering = self.fit(data)?.into();
        Ok(clustering.labels_i32())
    }
}
