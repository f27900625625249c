//! Resolved, immutable sweep description handed to every runner call.

use std::ops::RangeInclusive;

use crate::errors::ConfigError;

/// Which optional series a comparison chart includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VariantFlags {
    /// Run the plain binaries a second time with jemalloc preloaded.
    pub alternate_allocator: bool,
    /// Run the `_nvm_clflushopt` build.
    pub clflushopt: bool,
    /// Run the `_nvm_clwb` build.
    pub clwb: bool,
}

/// A thread/payload sweep.
///
/// Built once from external input and never mutated afterwards. The
/// payload range is normalized on construction: a `payload_max` below
/// `payload_min` is raised to `payload_min`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    threads_min: u32,
    threads_max: u32,
    payload_min: u32,
    payload_max: u32,
    ignore_cache: bool,
    variants: VariantFlags,
}

impl SweepConfig {
    /// Create a sweep over `threads` with allocation sizes in `payload`.
    ///
    /// Zero thread counts and a zero minimum payload are rejected. An
    /// inverted thread range is accepted and produces an empty sweep.
    pub fn new(
        threads: RangeInclusive<u32>,
        payload: RangeInclusive<u32>,
    ) -> Result<Self, ConfigError> {
        let (threads_min, threads_max) = threads.into_inner();
        let (payload_min, mut payload_max) = payload.into_inner();

        for (field, value) in [
            ("threads_min", threads_min),
            ("threads_max", threads_max),
            ("payload_min", payload_min),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must be a positive integer".to_string(),
                });
            }
        }

        if payload_max < payload_min {
            tracing::debug!(
                payload_min,
                payload_max,
                "payload_max below payload_min, clamping"
            );
            payload_max = payload_min;
        }
        if threads_max < threads_min {
            tracing::warn!(threads_min, threads_max, "empty thread range");
        }

        Ok(Self {
            threads_min,
            threads_max,
            payload_min,
            payload_max,
            ignore_cache: false,
            variants: VariantFlags::default(),
        })
    }

    /// Bypass cached results and overwrite them with fresh measurements.
    pub fn with_ignore_cache(mut self, ignore_cache: bool) -> Self {
        self.ignore_cache = ignore_cache;
        self
    }

    pub fn with_variants(mut self, variants: VariantFlags) -> Self {
        self.variants = variants;
        self
    }

    pub fn threads_min(&self) -> u32 {
        self.threads_min
    }

    pub fn threads_max(&self) -> u32 {
        self.threads_max
    }

    /// Thread counts in sweep order. Empty when the range is inverted.
    pub fn threads(&self) -> RangeInclusive<u32> {
        self.threads_min..=self.threads_max
    }

    pub fn payload_min(&self) -> u32 {
        self.payload_min
    }

    pub fn payload_max(&self) -> u32 {
        self.payload_max
    }

    pub fn ignore_cache(&self) -> bool {
        self.ignore_cache
    }

    pub fn variants(&self) -> VariantFlags {
        self.variants
    }
}
