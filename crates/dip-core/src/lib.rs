//! Core types for dip-test clustering
//!
//! This crate holds the pieces shared by the dip statistic and the clustering
//! crates: the unified error type, sample validation and sorting helpers, and
//! the label vector representation used throughout.
//!
//! # Example
//!
//! ```rust
//! use dip_core::{labels::remove_label, utils::sort_with_order};
//!
//! let (sorted, order) = sort_with_order(&[2.0, 0.0, 1.0]);
//! assert_eq!(sorted, vec![0.0, 1.0, 2.0]);
//! assert_eq!(order, vec![1, 2, 0]);
//!
//! let labels = remove_label(vec![Some(0), Some(2)], 1);
//! assert_eq!(labels, vec![Some(0), Some(1)]);
//! ```

pub mod error;
pub mod labels;
pub mod utils;

pub use error::{Error, Result};
pub use labels::{Label, NOISE};
