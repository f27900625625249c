//! # allocbench-core
//!
//! Shared building blocks for the allocbench experiment driver: error
//! enums, layered configuration, benchmark descriptors, tracing setup and
//! compiled defaults. Nothing in this crate spawns processes or touches the
//! result cache; that lives in `allocbench-engine`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{BenchConfig, BenchPaths, CliOverrides, SweepConfig, VariantFlags};
pub use errors::{BenchError, CacheError, ChartError, ConfigError, ExecutionError};
pub use types::Benchmark;
