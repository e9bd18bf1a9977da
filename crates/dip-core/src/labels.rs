//! Cluster label vectors
//!
//! A label vector holds one entry per row of the original (unsorted) sample.
//! `None` marks a noise point, `Some(id)` a point assigned to cluster `id`.

/// One cluster assignment; `None` is noise
pub type Label = Option<usize>;

/// Integer code used for noise in the `i32` rendering of a label vector
pub const NOISE: i32 = -1;

/// Remove cluster `removed` from the id space by shifting every higher id down by one
///
/// Points still carrying `removed` are left as they are; callers relabel those
/// rows before calling this. Noise and lower ids are untouched.
///
/// # Examples
///
/// ```rust
/// use dip_core::labels::remove_label;
///
/// let labels = vec![Some(0), Some(0), None, Some(2), Some(3)];
/// assert_eq!(remove_label(labels, 1), vec![Some(0), Some(0), None, Some(1), Some(2)]);
/// ```
pub fn remove_label(labels: Vec<Label>, removed: usize) -> Vec<Label> {
    labels
        .into_iter()
        .map(|label| match label {
            Some(id) if id > removed => Some(id - 1),
            other => other,
        })
        .collect()
}

/// Render labels with the `-1` noise convention
pub fn labels_to_i32(labels: &[Label]) -> Vec<i32> {
    labels
        .iter()
        .map(|label| label.map_or(NOISE, |id| id as i32))
        .collect()
}

/// Number of points per cluster id, for ids `0..n_clusters`
pub fn cluster_sizes(labels: &[Label], n_clusters: usize) -> Vec<usize> {
    let mut sizes = vec![0; n_clusters];
    for id in labels.iter().flatten() {
        if let Some(size) = sizes.get_mut(*id) {
            *size += 1;
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_remove_label_keeps_noise_and_lower_ids() {
        let labels = vec![None, Some(0), Some(1), Some(4)];
        assert_eq!(remove_label(labels, 1), vec![None, Some(0), Some(1), Some(3)]);
    }

    #[test]
    fn test_labels_to_i32() {
        assert_eq!(labels_to_i32(&[Some(2), None, Some(0)]), vec![2, NOISE, 0]);
    }

    #[test]
    fn test_cluster_sizes() {
        let labels = vec![Some(0), None, Some(1), Some(1), Some(0), Some(1)];
        assert_eq!(cluster_sizes(&labels, 2), vec![2, 3]);
    }

    proptest! {
        #[test]
        fn prop_remove_label_restores_contiguity(
            n_clusters in 2usize..10,
            removed_seed in 0usize..100,
            raw in prop::collection::vec(0usize..100, 1..100),
        ) {
            let removed = removed_seed % n_clusters;
            // Labels over 0..n_clusters with `removed` already absorbed elsewhere
            let labels: Vec<Label> = raw
                .iter()
                .map(|&v| v % n_clusters)
                .map(|id| if id == removed { None } else { Some(id) })
                .collect();
            let relabelled = remove_label(labels.clone(), removed);
            for (before, after) in labels.iter().zip(&relabelled) {
                match (before, after) {
                    (None, None) => {}
                    (Some(b), Some(a)) if *b < removed => prop_assert_eq!(a, b),
                    (Some(b), Some(a)) => prop_assert_eq!(*a, b - 1),
                    _ => prop_assert!(false, "noise status changed"),
                }
                if let Some(a) = after {
                    prop_assert!(*a < n_clusters - 1);
                }
            }
        }
    }
}
