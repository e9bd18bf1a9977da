//! UniDip on synthetic one-dimensional distributions

use dip_cluster::test_data::{TestDistributions, TestParameters};
use dip_cluster::{
    default_unidip, unidip, DipClusterer, PValueStrategy, UniDip, UniDipBuilder, UniDipResult,
};

fn cluster_means(data: &[f64], result: &UniDipResult) -> Vec<f64> {
    (0..result.n_clusters)
        .map(|id| {
            let members: Vec<f64> = data
                .iter()
                .zip(&result.labels)
                .filter(|(_, label)| **label == Some(id))
                .map(|(x, _)| *x)
                .collect();
            members.iter().sum::<f64>() / members.len() as f64
        })
        .collect()
}

fn assert_structure(result: &UniDipResult) {
    assert_eq!(result.boundaries.len(), result.n_clusters);
    assert!(result.boundaries.iter().all(|b| !b.is_empty()));
    assert!(result.boundaries.windows(2).all(|w| w[0].end <= w[1].start));
    assert!(result.labels.iter().flatten().all(|&id| id < result.n_clusters));
}

#[test]
fn test_unimodal_normal() {
    let data = TestDistributions::unimodal_normal();
    let result = default_unidip().fit(&data).unwrap();
    println!("unimodal: {} clusters, {} noise", result.n_clusters, result.noise_count());
    assert_eq!(result.n_clusters, 1, "Should detect exactly 1 cluster");
    assert_structure(&result);
}

#[test]
fn test_unimodal_normal_across_seeds() {
    let unidip = default_unidip();
    let single = (0..20)
        .filter(|&seed| {
            let data = TestDistributions::normal(500, 0.0, 1.0, seed);
            let result = unidip.fit(&data).unwrap();
            assert_structure(&result);
            result.n_clusters == 1
        })
        .count();
    // At the 1% level a false split is rare
    assert!(single >= 18, "only {single} of 20 normal samples gave one cluster");
}

#[test]
fn test_bimodal_separated() {
    let data = TestDistributions::bimodal_separated();
    let result = default_unidip().fit(&data).unwrap();
    assert_eq!(result.n_clusters, 2);
    assert_structure(&result);

    let means = cluster_means(&data, &result);
    assert!(means[0].abs() < 1.0, "Should find cluster near 0, got {}", means[0]);
    assert!((means[1] - 20.0).abs() < 1.0, "Should find cluster near 20, got {}", means[1]);
}

#[test]
fn test_bimodal_boundary_falls_between_modes() {
    for seed in [1, 2, 3] {
        let data = TestDistributions::mixture_normal(&[0.0, 20.0], 500, 1.0, seed);
        let result = default_unidip().fit(&data).unwrap();
        assert_eq!(result.n_clusters, 2, "seed {seed}");
        assert_structure(&result);

        let members = |id: usize| {
            data.iter()
                .zip(&result.labels)
                .filter(move |(_, label)| **label == Some(id))
                .map(|(x, _)| *x)
        };
        let first_max = members(0).fold(f64::NEG_INFINITY, f64::max);
        let second_min = members(1).fold(f64::INFINITY, f64::min);
        assert!(first_max < 10.0, "seed {seed}: first cluster reaches {first_max}");
        assert!(second_min > 10.0, "seed {seed}: second cluster starts at {second_min}");

        // Each cluster holds most of its own component
        assert!(result.labels[..500].iter().filter(|l| **l == Some(0)).count() > 400);
        assert!(result.labels[500..].iter().filter(|l| **l == Some(1)).count() > 400);
    }
}

#[test]
fn test_three_gaussians_are_ordered_by_location() {
    let data = TestDistributions::trimodal();
    let result = default_unidip().fit(&data).unwrap();
    assert_eq!(result.n_clusters, 3);
    assert_structure(&result);

    let means = cluster_means(&data, &result);
    for (mean, expected) in means.iter().zip([-20.0, 0.0, 20.0]) {
        assert!((mean - expected).abs() < 1.0, "cluster mean {mean} far from {expected}");
    }

    // Clustered points carry the id of their own component
    for (row, label) in result.labels.iter().enumerate() {
        if let Some(id) = label {
            assert_eq!(*id, row / 200, "row {row}");
        }
    }
}

#[test]
fn test_noise_is_reported() {
    let data = TestDistributions::noisy_trimodal();
    let result = default_unidip().fit(&data).unwrap();
    assert_eq!(result.n_clusters, 3);
    assert!(result.noise_count() > 0);

    // Most of the uniform background is left unassigned
    let noise_in_background = result.labels[600..].iter().filter(|l| l.is_none()).count();
    assert!(noise_in_background > 75, "only {noise_in_background} of 150 noise points unassigned");
}

#[test]
fn test_outliers_disallowed_labels_everything() {
    let data = TestDistributions::noisy_trimodal();
    let unidip = UniDipBuilder::new().outliers_allowed(false).build().unwrap();
    let result = unidip.fit(&data).unwrap();
    assert_eq!(result.n_clusters, 3);
    assert_eq!(result.noise_count(), 0);

    // Every component point lands in its own cluster
    for row in 0..600 {
        assert_eq!(result.labels[row], Some(row / 200), "row {row}");
    }

    // Along the sorted sample the clusters are contiguous
    let sorted_labels: Vec<usize> = result.order.iter().map(|&row| result.labels[row].unwrap()).collect();
    assert!(sorted_labels.windows(2).all(|w| w[0] <= w[1]));
}

fn assert_only_adds_members(plain: &UniDipResult, extended: &UniDipResult) {
    assert_eq!(extended.n_clusters, plain.n_clusters);
    assert!(extended.noise_count() <= plain.noise_count());
    for (before, after) in plain.labels.iter().zip(&extended.labels) {
        if before.is_some() {
            assert_eq!(before, after);
        }
    }
    for (before, after) in plain.boundaries.iter().zip(&extended.boundaries) {
        assert!(after.start <= before.start && after.end >= before.end);
    }
}

#[test]
fn test_tail_extension_only_adds_members() {
    let data = TestDistributions::noisy_trimodal();
    let plain = default_unidip().fit(&data).unwrap();
    let extended = UniDipBuilder::new().extend_tails(true).build().unwrap().fit(&data).unwrap();
    assert_only_adds_members(&plain, &extended);
}

#[test]
fn test_tail_extension_reclaims_heavy_tails() {
    let plain_unidip = default_unidip();
    let extending = UniDipBuilder::new().extend_tails(true).build().unwrap();

    let mut grown = 0;
    for seed in 0..10 {
        let data = TestDistributions::heavy_tailed_bimodal(seed);
        let plain = plain_unidip.fit(&data).unwrap();
        let extended = extending.fit(&data).unwrap();
        assert_eq!(extended.n_clusters, 2, "seed {seed}");
        assert_structure(&extended);
        assert_only_adds_members(&plain, &extended);

        if extended.boundaries != plain.boundaries {
            println!("seed {seed}: {:?} -> {:?}", plain.boundaries, extended.boundaries);
            assert!(extended.noise_count() < plain.noise_count());
            grown += 1;
        }
    }
    // Most heavy-tailed samples leave tail mass for the clusters to take back
    assert!(grown >= 3, "only {grown} of 10 heavy-tailed samples had a cluster extended");
}

#[test]
fn test_bootstrap_strategy() {
    let data = TestDistributions::bimodal_separated();
    let build = || {
        UniDipBuilder::new()
            .pval_strategy(PValueStrategy::Bootstrap)
            .n_boots(TestParameters::N_BOOTS)
            .seed(TestParameters::SEED)
            .build()
            .unwrap()
    };
    let first = build().fit(&data).unwrap();
    let second = build().fit(&data).unwrap();
    assert_eq!(first.n_clusters, 2);
    assert_eq!(first, second, "seeded bootstrap runs must agree");
}

#[test]
fn test_lenient_significance_does_not_merge_components() {
    let data = TestDistributions::trimodal();
    let unidip = UniDipBuilder::new().significance(TestParameters::LENIENT).build().unwrap();
    let result = unidip.fit(&data).unwrap();
    assert!(result.n_clusters >= 3);
}

#[test]
fn test_free_function_and_trait_agree() {
    let data = TestDistributions::bimodal_separated();
    let (labels, n_clusters) =
        unidip(&data, 0.01, PValueStrategy::Table, 2000, true, false).unwrap();
    let result = UniDip::default().fit(&data).unwrap();
    assert_eq!(labels, result.labels);
    assert_eq!(n_clusters, result.n_clusters);

    let predicted = DipClusterer::fit_predict(&UniDip::default(), &data[..]).unwrap();
    assert_eq!(predicted, result.labels_i32());
    assert!(predicted.iter().all(|&label| label >= -1 && label < 2));
}

#[test]
fn test_unknown_strategy_fails_before_clustering() {
    let err = "kde".parse::<PValueStrategy>().unwrap_err();
    assert!(matches!(err, dip_cluster::Error::InvalidParameter(_)));
}
