//! BenchErrorCode trait for stable, greppable diagnostics.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait BenchErrorCode {
    /// Returns the error code string (e.g., "EXECUTION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXECUTION_ERROR: &str = "EXECUTION_ERROR";
pub const BINARY_NOT_FOUND: &str = "BINARY_NOT_FOUND";
pub const CACHE_CORRUPT: &str = "CACHE_CORRUPT";
pub const CACHE_IO: &str = "CACHE_IO";
pub const CACHE_INVALID_KEY: &str = "CACHE_INVALID_KEY";
pub const CHART_ERROR: &str = "CHART_ERROR";
pub const RENDERER_MISSING: &str = "RENDERER_MISSING";
