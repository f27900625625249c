//! Compiled defaults for the allocbench experiment driver.

/// allocbench version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of times each benchmark binary is executed per sweep point.
pub const SAMPLE_COUNT: usize = 5;

/// Default lower bound of the thread sweep.
pub const DEFAULT_THREADS_MIN: u32 = 1;

/// Default upper bound of the thread sweep.
pub const DEFAULT_THREADS_MAX: u32 = 20;

/// Default minimum payload size in bytes.
pub const DEFAULT_PAYLOAD_MIN: u32 = 64;

/// Default maximum payload size in bytes.
pub const DEFAULT_PAYLOAD_MAX: u32 = 64;

/// Default number of iterations swept by the recovery benchmark.
pub const DEFAULT_RECOVERY_ITERATIONS: u32 = 20;

/// Thread-range value written into recovery cache keys.
pub const RECOVERY_THREAD_SENTINEL: u32 = 0;

/// Binary name of the recovery benchmark.
pub const RECOVERY_BINARY: &str = "bench_recovery";

/// Prefix shared by every benchmark binary.
pub const BINARY_PREFIX: &str = "bench_";

// ---- Paths ----

/// Directory holding the compiled benchmark binaries.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Directory holding cached sweep results.
pub const DEFAULT_CACHE_DIR: &str = "cached";

/// Directory receiving rendered charts.
pub const DEFAULT_PLOTS_DIR: &str = "plots";

/// Directory holding the shared library under test.
pub const DEFAULT_LIBRARY_DIR: &str = "..";

/// Shared object preloaded for the baseline third-party allocator.
pub const DEFAULT_JEMALLOC_PATH: &str = "/usr/lib/libjemalloc.so";

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "allocbench.toml";

// ---- Child environment ----

/// Library search path variable handed to benchmark binaries.
pub const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

/// Preload variable used to substitute the allocator under test.
pub const PRELOAD_VAR: &str = "LD_PRELOAD";

// ---- Chart metadata ----

/// Y axis label for thread-sweep charts.
pub const THREAD_SWEEP_Y_LABEL: &str = "Time in ms";

/// X axis label for thread-sweep charts.
pub const THREAD_SWEEP_X_LABEL: &str = "Parallel Threads";

/// Y axis label for the recovery chart.
pub const RECOVERY_Y_LABEL: &str = "Recovery time in μs";

/// X axis label for the recovery chart.
pub const RECOVERY_X_LABEL: &str = "Iterations of 10k allocations";
