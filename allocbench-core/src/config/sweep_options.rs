//! `[sweep]` section: thread and payload ranges.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Sweep bounds as written in config files or the environment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SweepOptions {
    /// First thread count of the sweep. Default: 1.
    pub threads_min: Option<u32>,
    /// Last thread count of the sweep (inclusive). Default: 20.
    pub threads_max: Option<u32>,
    /// Smallest allocation payload in bytes. Default: 64.
    pub payload_min: Option<u32>,
    /// Largest allocation payload in bytes. Default: 64.
    pub payload_max: Option<u32>,
    /// Re-measure even when a cached result exists. Default: false.
    pub ignore_cache: Option<bool>,
}

impl SweepOptions {
    pub fn effective_threads_min(&self) -> u32 {
        self.threads_min.unwrap_or(constants::DEFAULT_THREADS_MIN)
    }

    pub fn effective_threads_max(&self) -> u32 {
        self.threads_max.unwrap_or(constants::DEFAULT_THREADS_MAX)
    }

    pub fn effective_payload_min(&self) -> u32 {
        self.payload_min.unwrap_or(constants::DEFAULT_PAYLOAD_MIN)
    }

    pub fn effective_payload_max(&self) -> u32 {
        self.payload_max.unwrap_or(constants::DEFAULT_PAYLOAD_MAX)
    }

    pub fn effective_ignore_cache(&self) -> bool {
        self.ignore_cache.unwrap_or(false)
    }
}
