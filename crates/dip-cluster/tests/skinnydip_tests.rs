//! SkinnyDip on synthetic multidimensional data

use dip_cluster::test_data::TestDistributions;
use dip_cluster::{
    default_skinnydip, default_unidip, skinnydip, skinnydip_rows, Clustering, DipClusterer, Error,
    PValueStrategy, SkinnyDipBuilder,
};
use nalgebra::DMatrix;
use std::collections::HashMap;

/// Map each ground-truth group to the single cluster holding its clustered points
fn group_to_cluster(truth: &[usize], clustering: &Clustering) -> HashMap<usize, usize> {
    let mut mapping = HashMap::new();
    for (&group, label) in truth.iter().zip(&clustering.labels) {
        if let Some(id) = label {
            let previous = mapping.insert(group, *id);
            assert!(
                previous.is_none() || previous == Some(*id),
                "group {group} split across clusters"
            );
        }
    }
    mapping
}

#[test]
fn test_three_blobs() {
    let data = TestDistributions::three_blobs_2d();
    let clustering = default_skinnydip().fit(&data).unwrap();
    println!(
        "three blobs: {} clusters, sizes {:?}, {} noise",
        clustering.n_clusters,
        clustering.cluster_sizes(),
        clustering.noise_count()
    );
    assert_eq!(clustering.n_clusters, 3);

    let mapping = group_to_cluster(&TestDistributions::three_blobs_truth(), &clustering);
    let mut ids: Vec<usize> = mapping.values().copied().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2], "each blob needs its own cluster");
}

#[test]
fn test_blobs_sharing_first_coordinate_split_in_second() {
    let data = TestDistributions::three_blobs_2d();
    let clustering = default_skinnydip().fit(&data).unwrap();
    let mapping = group_to_cluster(&TestDistributions::three_blobs_truth(), &clustering);
    // Blobs 0 and 1 share x = 0: the lower one keeps the parent's id
    assert_eq!(mapping[&0], 0);
    assert_eq!(mapping[&2], 1);
    assert_eq!(mapping[&1], 2);
}

#[test]
fn test_noisy_blobs() {
    let data = TestDistributions::noisy_blobs_2d();
    let clustering = default_skinnydip().fit(&data).unwrap();
    assert_eq!(clustering.n_clusters, 3);
    assert!(clustering.noise_count() > 0);
    assert!(clustering.cluster_sizes().iter().all(|&size| size >= 150));
}

#[test]
fn test_outliers_disallowed() {
    let data = TestDistributions::noisy_blobs_2d();
    let skinnydip = SkinnyDipBuilder::new().outliers_allowed(false).build().unwrap();
    let clustering = skinnydip.fit(&data).unwrap();
    assert_eq!(clustering.n_clusters, 3);
    assert_eq!(clustering.noise_count(), 0);
    let total: usize = clustering.cluster_sizes().iter().sum();
    assert_eq!(total, data.nrows());
}

#[test]
fn test_rows_and_matrix_agree() {
    let data = TestDistributions::three_blobs_2d();
    let rows: Vec<Vec<f64>> = data.row_iter().map(|row| row.iter().copied().collect()).collect();

    let from_matrix = skinnydip(&data, 0.01, PValueStrategy::Table, 2000, true, false).unwrap();
    let from_rows = skinnydip_rows(&rows, 0.01, PValueStrategy::Table, 2000, true, false).unwrap();
    assert_eq!(from_matrix, from_rows);
}

#[test]
fn test_fit_predict() {
    let data = TestDistributions::three_blobs_2d();
    let skinnydip = default_skinnydip();
    let labels = skinnydip.fit_predict(&data).unwrap();
    assert_eq!(labels.len(), 600);
    assert!(labels.iter().all(|&label| (-1..3).contains(&label)));
}

#[test]
fn test_ragged_rows_rejected() {
    let rows = vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0]];
    let err = skinnydip_rows(&rows, 0.01, PValueStrategy::Table, 2000, true, false).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_config_errors_surface_first() {
    let data = DMatrix::<f64>::zeros(0, 2);
    // The configuration is rejected before the empty matrix is looked at
    let err = skinnydip(&data, 1.0, PValueStrategy::Table, 2000, true, false).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

#[test]
fn test_dimension_order_changes_only_ids() {
    let data = TestDistributions::three_blobs_2d();
    let swapped = DMatrix::from_fn(data.nrows(), 2, |r, c| data[(r, 1 - c)]);
    let a = default_skinnydip().fit(&data).unwrap();
    let b = default_skinnydip().fit(&swapped).unwrap();
    assert_eq!(a.n_clusters, b.n_clusters);
    assert_eq!(a.noise_count() > 0, b.noise_count() > 0);
}

#[test]
fn test_more_dimensions_never_fewer_clusters() {
    let data = TestDistributions::noisy_blobs_2d();
    let first_column: Vec<f64> = data.column(0).iter().copied().collect();

    let first_only = default_unidip().fit(&first_column).unwrap();
    let all_dims = default_skinnydip().fit(&data).unwrap();
    assert_eq!(first_only.n_clusters, 2);
    assert!(all_dims.n_clusters >= first_only.n_clusters);
}
