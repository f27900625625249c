//! # allocbench-engine
//!
//! Experiment orchestration for allocator benchmarks:
//! - **sampler**: runs a benchmark binary a fixed number of times and
//!   averages the reported latency
//! - **cache**: one durable record per sweep identity, read-through and
//!   write-through around every sweep
//! - **sweep**: thread-count and recovery-iteration sweeps
//! - **assemble**: one labeled series per allocator variant
//! - **chart**: rendering of assembled series
//! - **session**: runs a selection of benchmarks with per-benchmark error scoping
//!
//! Execution is strictly sequential. Benchmarks measure behavior under a
//! controlled thread count, so two benchmark processes never run at once.

pub mod assemble;
pub mod cache;
pub mod chart;
pub mod sampler;
pub mod session;
pub mod sweep;
pub mod variant;

pub use assemble::{ComparisonAssembler, Series};
pub use cache::{CacheKey, CacheStore, FileCacheStore, MemoryCacheStore};
pub use chart::{Chart, ChartRenderer, GnuplotRenderer, JsonRenderer};
pub use sampler::{CommandRunner, ProcessSampler, Sampler, SystemRunner, TimeUnit, VariantEnv};
pub use session::{BenchSession, SessionReport};
pub use sweep::{RecoverySweepRunner, SweepRunner};
pub use variant::{VariantDescriptor, VARIANTS};
