//! `[paths]` section: where binaries, caches and charts live.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Directory layout. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathOptions {
    /// Directory with the compiled `bench_*` binaries. Default: `build`.
    pub build_dir: Option<String>,
    /// Directory with cached sweep results. Default: `cached`.
    pub cache_dir: Option<String>,
    /// Directory receiving charts. Default: `plots`.
    pub plots_dir: Option<String>,
    /// Directory exported as `LD_LIBRARY_PATH`. Default: `..`.
    pub library_dir: Option<String>,
    /// Shared object preloaded for the jemalloc series.
    pub jemalloc_path: Option<String>,
}

impl PathOptions {
    pub fn effective_build_dir(&self) -> &str {
        self.build_dir.as_deref().unwrap_or(constants::DEFAULT_BUILD_DIR)
    }

    pub fn effective_cache_dir(&self) -> &str {
        self.cache_dir.as_deref().unwrap_or(constants::DEFAULT_CACHE_DIR)
    }

    pub fn effective_plots_dir(&self) -> &str {
        self.plots_dir.as_deref().unwrap_or(constants::DEFAULT_PLOTS_DIR)
    }

    pub fn effective_library_dir(&self) -> &str {
        self.library_dir
            .as_deref()
            .unwrap_or(constants::DEFAULT_LIBRARY_DIR)
    }

    pub fn effective_jemalloc_path(&self) -> &str {
        self.jemalloc_path
            .as_deref()
            .unwrap_or(constants::DEFAULT_JEMALLOC_PATH)
    }
}
