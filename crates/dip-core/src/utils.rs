//! Utility functions for working with sample slices

use crate::{Error, Result};
use ordered_float::OrderedFloat;

/// Reject empty samples and samples containing NaN or infinite values
pub fn validate_sample(sample: &[f64], context: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Stable argsort: the permutation that sorts `data` ascending
///
/// Equal values keep their original relative order, so the permutation is
/// deterministic for samples with duplicates.
///
/// # Examples
///
/// ```rust
/// use dip_core::utils::argsort;
///
/// assert_eq!(argsort(&[3.0, 1.0, 2.0, 1.0]), vec![1, 3, 2, 0]);
/// ```
pub fn argsort(data: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by_key(|&i| OrderedFloat(data[i]));
    order
}

/// Sort a sample, returning the sorted values and the sort permutation
///
/// `order[k]` is the original index of `sorted[k]`.
pub fn sort_with_order(data: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let order = argsort(data);
    let sorted = order.iter().map(|&i| data[i]).collect();
    (sorted, order)
}

/// Check whether a slice is sorted ascending
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
