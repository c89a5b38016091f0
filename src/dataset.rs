//! Data structures and helpers for labeled 2D point clouds.
//!
//! This module defines `Dataset`, the paired feature-matrix/label-vector
//! produced by the generator, and contains helpers for filtering rows by
//! class and summarizing the class balance.
use ndarray::{Array1, Array2, Axis};

use crate::error::DatasetError;

/// An ordered collection of 2D samples with one binary label per sample.
///
/// Labels hold only the literals `0.0` (negative class) and `1.0` (positive
/// class); they are stored as `f32` so the matrix and the labels share a
/// dtype when handed to tensor code.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature matrix, one sample per row
    pub x: Array2<f32>,
    /// Parallel labels, one per row of `x`
    pub y: Array1<f32>,
}

impl Dataset {
    /// Pair a feature matrix with its labels.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::LengthMismatch` if `y` does not have exactly
    /// one label per row of `x`.
    pub fn new(x: Array2<f32>, y: Array1<f32>) -> Result<Self, DatasetError> {
        if x.nrows() != y.len() {
            return Err(DatasetError::LengthMismatch {
                rows: x.nrows(),
                labels: y.len(),
            });
        }
        Ok(Dataset { x, y })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of feature columns (2 for generated data).
    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Filter the dataset by applying a boolean mask to `x` and `y`.
    ///
    /// # Arguments
    ///
    /// * `mask` - A boolean mask (`Array1<bool>`) of the same length as the
    ///   number of samples
    ///
    /// # Returns
    ///
    /// A new `Dataset` with only rows where `mask[i] == true`
    pub fn filter(&self, mask: &Array1<bool>) -> Dataset {
        let selected_indices: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| if m { Some(i) } else { None })
            .collect();

        Dataset {
            x: self.x.select(Axis(0), &selected_indices),
            y: self.y.select(Axis(0), &selected_indices),
        }
    }

    /// All samples labeled 0.
    pub fn negative_samples(&self) -> Dataset {
        let mask = self.y.mapv(|v| v == 0.0);
        self.filter(&mask)
    }

    /// All samples labeled 1.
    pub fn positive_samples(&self) -> Dataset {
        let mask = self.y.mapv(|v| v == 1.0);
        self.filter(&mask)
    }

    /// Log a one-line summary of the class balance and feature count.
    pub fn log_summary(&self) {
        let negatives = self.y.iter().filter(|&&v| v == 0.0).count();
        let positives = self.y.iter().filter(|&&v| v == 1.0).count();
        log::info!(
            "Dataset: {} negative and {} positive samples, {} feature columns",
            negatives,
            positives,
            self.n_features()
        );
    }
}
