//! Cache identity of a sweep.

use std::fmt;

use allocbench_core::constants::{RECOVERY_BINARY, RECOVERY_THREAD_SENTINEL};
use allocbench_core::SweepConfig;

/// Identity of a sweep: binary, thread range, payload range, allocator.
///
/// Renders as `<binary>_<tmin>_<tmax>_<pmin>_<pmax>_<true|false>`. The five
/// trailing fields never contain `_`, so splitting from the right recovers
/// every component and distinct keys always render distinctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    binary: String,
    threads_min: u32,
    threads_max: u32,
    payload_min: u32,
    payload_max: u32,
    alternate_allocator: bool,
}

impl CacheKey {
    pub fn new(
        binary: impl Into<String>,
        threads_min: u32,
        threads_max: u32,
        payload_min: u32,
        payload_max: u32,
        alternate_allocator: bool,
    ) -> Self {
        Self {
            binary: binary.into(),
            threads_min,
            threads_max,
            payload_min,
            payload_max,
            alternate_allocator,
        }
    }

    /// Key of a thread sweep of `binary`.
    pub fn for_sweep(binary: &str, config: &SweepConfig, alternate_allocator: bool) -> Self {
        Self::new(
            binary,
            config.threads_min(),
            config.threads_max(),
            config.payload_min(),
            config.payload_max(),
            alternate_allocator,
        )
    }

    /// Key of the recovery sweep. Thread fields hold the sentinel so the
    /// record never collides with a thread sweep of the same binary.
    pub fn for_recovery(config: &SweepConfig) -> Self {
        Self::new(
            RECOVERY_BINARY,
            RECOVERY_THREAD_SENTINEL,
            RECOVERY_THREAD_SENTINEL,
            config.payload_min(),
            config.payload_max(),
            false,
        )
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn alternate_allocator(&self) -> bool {
        self.alternate_allocator
    }

    /// Record file name.
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}_{}",
            self.binary,
            self.threads_min,
            self.threads_max,
            self.payload_min,
            self.payload_max,
            self.alternate_allocator
        )
    }
}
