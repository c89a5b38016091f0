use std::error::Error;
use std::fmt;

/// Custom error type for dataset generation failures
#[derive(Debug)]
pub enum DatasetError {
    /// A caller asked for zero samples per class
    InvalidSampleCount,
    /// The configured covariance matrix was rejected by the sampler
    Distribution(String),
    /// Feature rows and labels have different lengths
    LengthMismatch { rows: usize, labels: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::InvalidSampleCount => {
                write!(f, "num_samples_per_class must be at least 1")
            }
            DatasetError::Distribution(msg) => {
                write!(f, "Invalid cluster distribution: {}", msg)
            }
            DatasetError::LengthMismatch { rows, labels } => write!(
                f,
                "Feature matrix has {} rows but {} labels were given",
                rows, labels
            ),
        }
    }
}

impl Error for DatasetError {}
