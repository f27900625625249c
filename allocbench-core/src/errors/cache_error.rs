//! Result cache errors.

use std::path::PathBuf;

use super::error_code::{self, BenchErrorCode};

/// Errors raised by the result cache.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// A record exists for the key but does not decode to a numeric list.
    #[error("Corrupt cache record for {key} at {path}: {message}")]
    Corrupt {
        key: String,
        path: PathBuf,
        message: String,
    },

    #[error("Cache IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cache key {key} cannot be stored: {message}")]
    InvalidKey { key: String, message: String },

    #[error("Result for {key} cannot be stored: {message}")]
    InvalidValue { key: String, message: String },
}

impl BenchErrorCode for CacheError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Corrupt { .. } => error_code::CACHE_CORRUPT,
            Self::Io { .. } => error_code::CACHE_IO,
            Self::InvalidKey { .. } | Self::InvalidValue { .. } => error_code::CACHE_INVALID_KEY,
        }
    }
}
