//! Configuration system for allocbench.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod bench_config;
pub mod path_options;
pub mod recovery_options;
pub mod sweep_config;
pub mod sweep_options;
pub mod variant_options;

pub use bench_config::{BenchConfig, BenchPaths, CliOverrides, ResolvedConfig};
pub use path_options::PathOptions;
pub use recovery_options::RecoveryOptions;
pub use sweep_config::{SweepConfig, VariantFlags};
pub use sweep_options::SweepOptions;
pub use variant_options::VariantOptions;
