//! Chart rendering errors.

use std::path::PathBuf;

use super::error_code::{self, BenchErrorCode};

/// Errors raised while writing or rendering a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("IO error writing chart {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Renderer `{program}` is not installed: {source}")]
    RendererMissing {
        program: String,
        source: std::io::Error,
    },

    #[error("Renderer `{program}` failed on {script}: {stderr}")]
    RendererFailed {
        program: String,
        script: PathBuf,
        stderr: String,
    },

    #[error("Failed to serialize chart dataset: {0}")]
    Serialization(String),

    #[error("Chart {name} has no data points")]
    NoData { name: String },
}

impl BenchErrorCode for ChartError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RendererMissing { .. } => error_code::RENDERER_MISSING,
            _ => error_code::CHART_ERROR,
        }
    }
}
