//! Benchmark process execution errors.

use std::path::PathBuf;

use super::error_code::{self, BenchErrorCode};

/// Errors raised while running a benchmark binary and reading its result.
///
/// None of these are retried: a broken binary stops the sweep.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("Benchmark binary not found: {path}")]
    BinaryNotFound { path: PathBuf },

    #[error("Failed to spawn {path}: {source}")]
    SpawnFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} {args:?} exited with {status}: {stderr}")]
    NonZeroExit {
        path: PathBuf,
        args: Vec<String>,
        status: String,
        stderr: String,
    },

    #[error("{path} {args:?} printed {output:?}, expected a single number")]
    MalformedOutput {
        path: PathBuf,
        args: Vec<String>,
        output: String,
    },
}

impl ExecutionError {
    /// Path of the binary that failed.
    pub fn binary(&self) -> &std::path::Path {
        match self {
            Self::BinaryNotFound { path }
            | Self::SpawnFailed { path, .. }
            | Self::NonZeroExit { path, .. }
            | Self::MalformedOutput { path, .. } => path.as_path(),
        }
    }
}

impl BenchErrorCode for ExecutionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BinaryNotFound { .. } => error_code::BINARY_NOT_FOUND,
            _ => error_code::EXECUTION_ERROR,
        }
    }
}
