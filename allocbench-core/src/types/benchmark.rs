//! Benchmark descriptors: logical name, binary stem and chart title.

use std::fmt;
use std::str::FromStr;

use crate::constants;
use crate::errors::ConfigError;

/// The benchmarks shipped with nvm_malloc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Benchmark {
    AllocFree,
    AllocFreeAlloc,
    Fastalloc,
    Linkedlist,
    /// Internal recovery; swept over iterations instead of threads.
    Recovery,
}

impl Benchmark {
    /// Every benchmark in the order `--run-all` executes them.
    pub const ALL: [Benchmark; 5] = [
        Self::AllocFree,
        Self::AllocFreeAlloc,
        Self::Fastalloc,
        Self::Linkedlist,
        Self::Recovery,
    ];

    /// Thread-sweep benchmarks, charted per allocator variant.
    pub const THREAD_SWEEPS: [Benchmark; 4] = [
        Self::AllocFree,
        Self::AllocFreeAlloc,
        Self::Fastalloc,
        Self::Linkedlist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AllocFree => "alloc_free",
            Self::AllocFreeAlloc => "alloc_free_alloc",
            Self::Fastalloc => "fastalloc",
            Self::Linkedlist => "linkedlist",
            Self::Recovery => "recovery",
        }
    }

    /// Chart title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::AllocFree => "Allocate and Free",
            Self::AllocFreeAlloc => "Allocate, Free and Allocate",
            Self::Fastalloc => "Allocation Loop",
            Self::Linkedlist => "Linked List Creation",
            Self::Recovery => "nvm_malloc Internal Recovery",
        }
    }

    /// Stem of the benchmark's binaries, e.g. `bench_alloc_free`.
    pub fn binary_stem(&self) -> String {
        format!("{}{}", constants::BINARY_PREFIX, self.name())
    }

    pub fn is_recovery(&self) -> bool {
        matches!(self, Self::Recovery)
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Benchmark {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "benchmark".to_string(),
                message: format!("unknown benchmark `{s}`"),
            })
    }
}
