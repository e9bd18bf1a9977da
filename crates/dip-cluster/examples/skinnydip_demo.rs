//! Clusters noisy synthetic data with UniDip and SkinnyDip
//!
//! Set `RUST_LOG=dip_cluster=debug` to follow the splits and merges.

#[cfg(feature = "test-utils")]
fn main() -> dip_cluster::Result<()> {
    use dip_cluster::test_data::TestDistributions;
    use dip_cluster::{DipClusterer, PValueStrategy, SkinnyDipBuilder, UniDipBuilder};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== UniDip on three modes plus uniform noise ===\n");
    let sample = TestDistributions::noisy_trimodal();
    let unidip = UniDipBuilder::new().significance(0.01).build()?;
    let result = unidip.fit(&sample)?;
    println!("Clusters: {}", result.n_clusters);
    println!("Noise points: {}", result.noise_count());
    for (id, range) in result.cluster_ranges().iter().enumerate() {
        println!("   Cluster {id}: [{:.2}, {:.2}]", range.0, range.1);
    }

    println!("\n=== Same sample, tails extended, no outliers ===\n");
    let unidip = UniDipBuilder::new()
        .extend_tails(true)
        .outliers_allowed(false)
        .build()?;
    let result = unidip.fit(&sample)?;
    println!("Clusters: {}", result.n_clusters);
    println!("Noise points: {}", result.noise_count());

    println!("\n=== Bootstrap p-values ===\n");
    let unidip = UniDipBuilder::new()
        .pval_strategy(PValueStrategy::Bootstrap)
        .n_boots(500)
        .seed(1)
        .build()?;
    let labels = unidip.fit_predict(&sample[..])?;
    let assigned = labels.iter().filter(|&&label| label >= 0).count();
    println!("Assigned {assigned} of {} points", labels.len());

    println!("\n=== SkinnyDip on 2-D blobs with background noise ===\n");
    let data = TestDistributions::noisy_blobs_2d();
    let skinnydip = SkinnyDipBuilder::new().build()?;
    let clustering = skinnydip.fit(&data)?;
    println!("Clusters: {}", clustering.n_clusters);
    println!("Cluster sizes: {:?}", clustering.cluster_sizes());
    println!("Noise points: {}", clustering.noise_count());

    Ok(())
}

#[cfg(not(feature = "test-utils"))]
fn main() {
    eprintln!("This example requires the 'test-utils' feature to be enabled.");
    eprintln!("Run with: cargo run --example skinnydip_demo --features test-utils");
}
