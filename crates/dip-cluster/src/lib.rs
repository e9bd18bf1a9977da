//! Dip-test clustering: UniDip and SkinnyDip
//!
//! This crate finds clusters in noisy data by repeatedly asking Hartigan's dip
//! test whether a stretch of a one-dimensional sample is unimodal. Points that
//! belong to no mode are reported as noise rather than forced into a cluster.
//!
//! # Algorithm Overview
//!
//! UniDip works on one coordinate:
//! 1. Sort the sample once and keep the sort permutation
//! 2. Split the sorted sample around modal intervals while the dip test rejects unimodality
//! 3. Narrow stand-alone clusters with a mirror correction of the boundary bias
//! 4. Merge neighbours whose joined sample is unimodal
//! 5. Optionally extend clusters into gaps and assign noise to the nearest cluster
//!
//! SkinnyDip runs UniDip on each dimension in turn, refining the clusters of
//! the previous dimensions.
//!
//! # Examples
//!
//! ## One dimension
//!
//! ```rust
//! use dip_cluster::default_unidip;
//!
//! let mut data: Vec<f64> = (0..200).map(|i| (i as f64 / 199.0 - 0.5).powi(3)).collect();
//! data.extend((0..200).map(|i| 10.0 + (i as f64 / 199.0 - 0.5).powi(3)));
//!
//! let result = default_unidip().fit(&data).unwrap();
//! println!("{} clusters, {} noise points", result.n_clusters, result.noise_count());
//! assert_eq!(result.n_clusters, 2);
//! ```
//!
//! ## Several dimensions
//!
//! ```rust
//! use dip_cluster::{skinnydip, PValueStrategy};
//! use nalgebra::DMatrix;
//!
//! let data = DMatrix::from_fn(300, 2, |row, col| {
//!     let jitter = (row % 10) as f64 * 0.1 + (row / 10 % 10) as f64 * 0.01;
//!     let centre = if row < 150 { 0.0 } else { 25.0 };
//!     centre + jitter + col as f64
//! });
//!
//! let (labels, n_clusters) =
//!     skinnydip(&data, 0.01, PValueStrategy::Table, 2000, false, false).unwrap();
//! assert_eq!(labels.len(), 300);
//! assert!(n_clusters >= 2);
//! ```

pub mod builder;
pub mod config;
pub mod merge;
pub mod mirror;
pub mod outliers;
pub mod segmenter;
pub mod skinnydip;
pub mod tails;
pub mod traits;
pub mod types;
pub mod unidip;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_data;

// Re-exports
pub use builder::{
    default_skinnydip, default_unidip, skinnydip_with_significance, unidip_with_significance,
    SkinnyDipBuilder, UniDipBuilder,
};
pub use config::{DipConfig, DEFAULT_SIGNIFICANCE};
pub use dip_core::{Error, Label, Result};
pub use dip_stat::PValueStrategy;
pub use mirror::{mirrored_dip, MirrorCorrection};
pub use skinnydip::{rows_to_matrix, skinnydip, skinnydip_rows, SkinnyDip};
pub use traits::DipClusterer;
pub use types::{Candidate, Clustering, Interval, UniDipResult};
pub use unidip::{unidip, UniDip};
