//! Test data generators for dip clustering
//!
//! This module provides standardized, seeded test distributions that can be
//! used across tests and benchmarks to ensure consistency and reproducibility.

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, StudentT, Uniform};

/// Standard test distributions for dip clustering
pub struct TestDistributions;

impl TestDistributions {
    /// Samples from N(`mean`, `std_dev`)
    pub fn normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let normal = Normal::new(mean, std_dev).unwrap();
        (0..n).map(|_| normal.sample(&mut rng)).collect()
    }

    /// Equal-sized normal components with common spread, in component order
    pub fn mixture_normal(means: &[f64], per_component: usize, std_dev: f64, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = Vec::with_capacity(means.len() * per_component);
        for &mean in means {
            let normal = Normal::new(mean, std_dev).unwrap();
            data.extend((0..per_component).map(|_| normal.sample(&mut rng)));
        }
        data
    }

    /// Create a clearly unimodal normal distribution
    ///
    /// Returns 500 samples from N(0, 1)
    pub fn unimodal_normal() -> Vec<f64> {
        Self::normal(500, 0.0, 1.0, 42)
    }

    /// Create a clearly bimodal distribution
    ///
    /// Returns 500 samples: 250 from N(0, 1) and 250 from N(20, 1)
    pub fn bimodal_separated() -> Vec<f64> {
        Self::mixture_normal(&[0.0, 20.0], 250, 1.0, 42)
    }

    /// Create a trimodal distribution
    ///
    /// Returns 600 samples: 200 each from N(-20, 1), N(0, 1) and N(20, 1)
    pub fn trimodal() -> Vec<f64> {
        Self::mixture_normal(&[-20.0, 0.0, 20.0], 200, 1.0, 42)
    }

    /// Trimodal data plus 150 points of uniform noise on [-40, 40]
    ///
    /// The first 600 entries are the components, the last 150 the noise.
    pub fn noisy_trimodal() -> Vec<f64> {
        let mut data = Self::trimodal();
        let mut rng = StdRng::seed_from_u64(7);
        let uniform = Uniform::new(-40.0, 40.0);
        data.extend((0..150).map(|_| uniform.sample(&mut rng)));
        data
    }

    /// Heavy-tailed mode next to a narrow one, over a uniform background
    ///
    /// Returns 660 samples: 400 from a Student t with 3 degrees of freedom,
    /// 200 from N(30, 1) and 60 uniform on [-30, 60]. The t component's tails
    /// reach far past what mirror correction keeps in the cluster.
    pub fn heavy_tailed_bimodal(seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let student = StudentT::new(3.0).unwrap();
        let normal = Normal::new(30.0, 1.0).unwrap();
        let uniform = Uniform::new(-30.0, 60.0);
        let mut data: Vec<f64> = (0..400).map(|_| student.sample(&mut rng)).collect();
        data.extend((0..200).map(|_| normal.sample(&mut rng)));
        data.extend((0..60).map(|_| uniform.sample(&mut rng)));
        data
    }

    /// Isotropic Gaussian blobs, one row per point, blob by blob
    pub fn blobs_2d(centers: &[(f64, f64)], per_blob: usize, std_dev: f64, seed: u64) -> DMatrix<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0.0, std_dev).unwrap();
        let n = centers.len() * per_blob;
        let mut data = DMatrix::zeros(n, 2);
        for (blob, &(cx, cy)) in centers.iter().enumerate() {
            for i in 0..per_blob {
                let row = blob * per_blob + i;
                data[(row, 0)] = cx + noise.sample(&mut rng);
                data[(row, 1)] = cy + noise.sample(&mut rng);
            }
        }
        data
    }

    /// Three blobs of 200 points at (0, 0), (0, 20) and (20, 20)
    ///
    /// The first two share their x range, so they only separate once the
    /// second dimension is examined.
    pub fn three_blobs_2d() -> DMatrix<f64> {
        Self::blobs_2d(&[(0.0, 0.0), (0.0, 20.0), (20.0, 20.0)], 200, 1.0, 42)
    }

    /// [`three_blobs_2d`](Self::three_blobs_2d) plus 100 uniform points on [-10, 30]^2
    pub fn noisy_blobs_2d() -> DMatrix<f64> {
        let blobs = Self::three_blobs_2d();
        let mut rng = StdRng::seed_from_u64(7);
        let uniform = Uniform::new(-10.0, 30.0);
        let n = blobs.nrows();
        let mut data = blobs.resize_vertically(n + 100, 0.0);
        for row in n..n + 100 {
            data[(row, 0)] = uniform.sample(&mut rng);
            data[(row, 1)] = uniform.sample(&mut rng);
        }
        data
    }

    /// Ground-truth blob index per row of [`three_blobs_2d`](Self::three_blobs_2d)
    pub fn three_blobs_truth() -> Vec<usize> {
        (0..600).map(|row| row / 200).collect()
    }
}

/// Standard test parameters
pub struct TestParameters;

impl TestParameters {
    /// Default significance level
    pub const SIGNIFICANCE: f64 = 0.01;

    /// Lenient significance level (splits more readily)
    pub const LENIENT: f64 = 0.05;

    /// Bootstrap resamples small enough for fast tests
    pub const N_BOOTS: usize = 300;

    /// Fixed bootstrap seed
    pub const SEED: u64 = 17;
}
