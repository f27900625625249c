//! `[variants]` section: optional allocator variants.

use serde::{Deserialize, Serialize};

/// Toggles for the optional series of a comparison chart.
/// The default allocator and nvm_malloc series are always drawn.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VariantOptions {
    /// Also run the plain binaries with jemalloc preloaded.
    pub jemalloc: Option<bool>,
    /// Also run the nvm_malloc build that flushes with CLFLUSHOPT.
    pub clflushopt: Option<bool>,
    /// Also run the nvm_malloc build that flushes with CLWB.
    pub clwb: Option<bool>,
}
