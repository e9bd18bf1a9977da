//! Hartigan's dip test of unimodality
//!
//! This crate computes the dip statistic of a sorted sample together with the
//! modal interval that realizes the best unimodal fit, and turns dips into
//! p-values under the uniform null.
//!
//! # P-value strategies
//!
//! - **Table**: interpolation in tabulated critical values. Fast and
//!   deterministic; the default.
//! - **Bootstrap**: the fraction of simulated uniform samples whose dip is at
//!   least the observed one. Seeded, cached per sample size, and parallel
//!   under the `parallel` feature without changing results.
//!
//! # Examples
//!
//! ```rust
//! use dip_stat::{dip, SignificanceEstimator};
//!
//! let mut sample: Vec<f64> = (0..40).map(|i| i as f64 * 0.05).collect();
//! sample.extend((0..40).map(|i| 10.0 + i as f64 * 0.05));
//!
//! let result = dip(&sample);
//! let p = SignificanceEstimator::table().p_value(result.dip, sample.len());
//! assert!(p < 0.01, "two separated modes should reject unimodality");
//! ```

pub mod dip;
pub mod pvalue;
pub mod table;

pub use dip::{dip, dip_test, dip_value, DipResult, DipWorkspace};
pub use pvalue::{
    dip_pvalue, DipOutcome, PValueStrategy, SignificanceEstimator, DEFAULT_N_BOOTS, DEFAULT_SEED,
};
pub use table::table_pvalue;
