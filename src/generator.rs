//! Synthetic two-class dataset generation.
//!
//! `SyntheticClassDataGenerator` draws two Gaussian clusters and labels them
//! 0 and 1. The random source is passed in explicitly so callers decide
//! between unseeded demo runs and seeded deterministic tests.
use ndarray::{Array1, Array2};
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::MultivariateNormal;

use crate::config::GeneratorConfig;
use crate::dataset::Dataset;
use crate::error::DatasetError;

/// Generates a labeled 2D point cloud from two bivariate normal clusters.
#[derive(Debug, Clone, Default)]
pub struct SyntheticClassDataGenerator {
    config: GeneratorConfig,
}

impl SyntheticClassDataGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `num_samples_per_class` points per cluster.
    ///
    /// The negative cluster (label 0) comes first, then the positive cluster
    /// (label 1); the concatenation order is never shuffled. Draws are made
    /// in f64 and narrowed to f32 for the feature matrix.
    ///
    /// # Arguments
    ///
    /// * `rng` - The random source to draw from
    /// * `num_samples_per_class` - How many points to draw per cluster
    ///
    /// # Returns
    ///
    /// A `Dataset` of exactly `2 * num_samples_per_class` samples where
    /// `y[i] == 0.0` for `i < num_samples_per_class` and `1.0` otherwise.
    ///
    /// # Errors
    ///
    /// * `DatasetError::InvalidSampleCount` if `num_samples_per_class == 0`
    /// * `DatasetError::Distribution` if the configured covariance matrix is
    ///   not symmetric positive-definite
    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
        num_samples_per_class: usize,
    ) -> Result<Dataset, DatasetError> {
        if num_samples_per_class == 0 {
            return Err(DatasetError::InvalidSampleCount);
        }

        let negative = self.cluster_distribution(self.config.negative_mean)?;
        let positive = self.cluster_distribution(self.config.positive_mean)?;

        let n = num_samples_per_class;
        let mut coords: Vec<f32> = Vec::with_capacity(2 * n * 2);
        for cluster in [&negative, &positive] {
            for _ in 0..n {
                let point = cluster.sample(rng);
                coords.push(point[0] as f32);
                coords.push(point[1] as f32);
            }
        }

        // coords holds 2*n row-major (x1, x2) pairs, so this indexing is total
        let x = Array2::from_shape_fn((2 * n, 2), |(row, col)| coords[2 * row + col]);

        let mut labels = vec![0.0f32; 2 * n];
        labels[n..].fill(1.0);
        let y = Array1::from_vec(labels);

        Dataset::new(x, y)
    }

    fn cluster_distribution(&self, mean: [f64; 2]) -> Result<MultivariateNormal, DatasetError> {
        let cov = self.config.covariance;
        MultivariateNormal::new(
            mean.to_vec(),
            vec![cov[0][0], cov[0][1], cov[1][0], cov[1][1]],
        )
        .map_err(|e| DatasetError::Distribution(e.to_string()))
    }
}
