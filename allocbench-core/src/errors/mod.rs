//! Error handling for allocbench.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod bench_error;
pub mod cache_error;
pub mod chart_error;
pub mod config_error;
pub mod error_code;
pub mod execution_error;

pub use bench_error::BenchError;
pub use cache_error::CacheError;
pub use chart_error::ChartError;
pub use config_error::ConfigError;
pub use error_code::BenchErrorCode;
pub use execution_error::ExecutionError;
