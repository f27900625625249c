//! Top-level error for a single benchmark run.

use super::error_code::BenchErrorCode;
use super::{CacheError, ChartError, ConfigError, ExecutionError};

/// Errors that abort one benchmark.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// A series of a comparison chart failed; names the benchmark and variant.
    #[error("{benchmark} ({variant}): {source}")]
    Variant {
        benchmark: String,
        variant: String,
        #[source]
        source: Box<BenchError>,
    },
}

impl BenchError {
    /// Attach the benchmark and variant that produced this error.
    pub fn in_variant(self, benchmark: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::Variant {
            benchmark: benchmark.into(),
            variant: variant.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, with variant context peeled off.
    pub fn root(&self) -> &BenchError {
        match self {
            Self::Variant { source, .. } => source.root(),
            other => other,
        }
    }
}

impl BenchErrorCode for BenchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Execution(e) => e.error_code(),
            Self::Cache(e) => e.error_code(),
            Self::Chart(e) => e.error_code(),
            Self::Variant { source, .. } => source.error_code(),
        }
    }
}
