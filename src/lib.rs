//! toy-classifiers: small machine-learning demo utilities.
//!
//! This crate provides a synthetic two-class dataset generator (two Gaussian
//! clusters with configurable means and covariance), a plotly scatter report
//! for the generated data, and setup diagnostics for checking accelerator
//! availability and converting between ndarray matrices and candle tensors.
//!
//! The design favors small, testable modules: the generator takes its random
//! source as an explicit argument so demos can run unseeded while tests use a
//! fixed seed.
pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod report;
