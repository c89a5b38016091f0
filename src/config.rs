use serde::{Deserialize, Serialize};

/// Central configuration for the synthetic two-class generator.
///
/// Both clusters share one covariance matrix; they differ only in their
/// means. The defaults reproduce the classic linearly-separable-ish pair of
/// clusters used by the demo binaries.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeneratorConfig {
    /// Mean of the negative class (label 0)
    pub negative_mean: [f64; 2],
    /// Mean of the positive class (label 1)
    pub positive_mean: [f64; 2],
    /// Shared 2x2 covariance matrix, must be symmetric positive-definite
    pub covariance: [[f64; 2]; 2],
}

impl GeneratorConfig {
    pub fn new(
        negative_mean: [f64; 2],
        positive_mean: [f64; 2],
        covariance: [[f64; 2]; 2],
    ) -> Self {
        Self {
            negative_mean,
            positive_mean,
            covariance,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            negative_mean: [0.0, 3.0],
            positive_mean: [3.0, 0.0],
            covariance: [[1.0, 0.5], [0.5, 1.0]],
        }
    }
}
