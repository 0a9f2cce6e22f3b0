//! Rust wrapper around the BEER machine-translation metric.
//!
//! The scoring model itself lives in a pre-built Java program published by
//! its authors; this crate validates the runtime, fetches the packaged
//! scorer, stages inputs in temp files, and parses the scorer's console
//! output into numbers.

pub mod cli;
pub mod core;

// Re-export main types
pub use core::{
    BeerScoreResult, BeerScorer, BeerScorerBuilder, BeerScorerConfig, MetricError, MetricInfo,
};

/// Convenient alias for a result with the crate's error type.
pub type Result<T, E = core::MetricError> = std::result::Result<T, E>;
