//! # SkinnyDip
//!
//! Dip-test based clustering for noisy data.
//!
//! This crate re-exports the workspace crates:
//!
//! - **dip-core**: error types, noise-aware labels and sample utilities
//! - **dip-stat**: Hartigan's dip statistic with table and bootstrap p-values
//! - **dip-cluster**: UniDip for one-dimensional samples and SkinnyDip for
//!   multidimensional data
//!
//! ## Quick Start
//!
//! ```rust
//! use skinnydip::prelude::*;
//!
//! let mut sample: Vec<f64> = (0..200).map(|i| (i as f64 / 199.0 - 0.5).powi(3)).collect();
//! sample.extend((0..200).map(|i| 10.0 + (i as f64 / 199.0 - 0.5).powi(3)));
//!
//! let unidip = UniDipBuilder::new().significance(0.01).build()?;
//! let result = unidip.fit(&sample)?;
//! assert_eq!(result.n_clusters, 2);
//! # Ok::<(), ::skinnydip::Error>(())
//! ```

pub use dip_core::{labels, utils, Error, Label, Result};

pub use dip_stat::{
    dip, dip_pvalue, dip_test, dip_value, table_pvalue, DipOutcome, DipResult, DipWorkspace,
    PValueStrategy, SignificanceEstimator, DEFAULT_N_BOOTS, DEFAULT_SEED,
};

pub use dip_cluster::{
    default_skinnydip, default_unidip, mirrored_dip, rows_to_matrix, skinnydip,
    skinnydip_rows, skinnydip_with_significance, unidip, unidip_with_significance, Clustering,
    DipClusterer, DipConfig, Interval, MirrorCorrection, SkinnyDip, SkinnyDipBuilder, UniDip,
    UniDipBuilder, UniDipResult, DEFAULT_SIGNIFICANCE,
};

/// Commonly used types and traits.
///
/// The free functions `skinnydip` and `unidip` are left out so that a glob
/// import does not shadow the crate name.
pub mod prelude {
    pub use dip_cluster::{
        Clustering, DipClusterer, DipConfig, SkinnyDip, SkinnyDipBuilder, UniDip, UniDipBuilder,
        UniDipResult,
    };
    pub use dip_core::{Error, Label};
    pub use dip_stat::{dip, dip_test, PValueStrategy, SignificanceEstimator};
}
