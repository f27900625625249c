//! Thread-count and recovery-iteration sweeps with read-through caching.

use std::path::PathBuf;

use allocbench_core::constants::RECOVERY_BINARY;
use allocbench_core::{BenchError, BenchPaths, SweepConfig};

use crate::cache::{CacheKey, CacheStore};
use crate::sampler::{Sampler, TimeUnit, VariantEnv};

/// Runs a binary once per thread count in the configured range.
pub struct SweepRunner<'a> {
    store: &'a dyn CacheStore,
    sampler: &'a dyn Sampler,
    paths: &'a BenchPaths,
}

impl<'a> SweepRunner<'a> {
    pub fn new(store: &'a dyn CacheStore, sampler: &'a dyn Sampler, paths: &'a BenchPaths) -> Self {
        Self {
            store,
            sampler,
            paths,
        }
    }

    /// Sweep `binary_name` over `config.threads()`.
    ///
    /// Returns the cached sequence untouched when one exists and the cache
    /// is not bypassed. Otherwise measures every point with
    /// `argv = [threads, payload_min, payload_max]` in seconds, stores the
    /// full sequence and returns it.
    pub fn run(
        &self,
        binary_name: &str,
        config: &SweepConfig,
        alternate_allocator: bool,
    ) -> Result<Vec<f64>, BenchError> {
        let key = CacheKey::for_sweep(binary_name, config, alternate_allocator);
        let binary = self.paths.binary(binary_name);
        let env = variant_env(self.paths, alternate_allocator);

        memoized(self.store, &key, config.ignore_cache(), || {
            config
                .threads()
                .map(|threads| -> Result<f64, BenchError> {
                    let argv = [threads, config.payload_min(), config.payload_max()];
                    let value = self.sampler.sample(&binary, &argv, &env, TimeUnit::Seconds)?;
                    tracing::debug!(binary = binary_name, threads, value, "sweep point");
                    Ok(value)
                })
                .collect()
        })
    }
}

/// Sweeps the recovery benchmark over `1..=max_iterations`.
pub struct RecoverySweepRunner<'a> {
    store: &'a dyn CacheStore,
    sampler: &'a dyn Sampler,
    paths: &'a BenchPaths,
}

impl<'a> RecoverySweepRunner<'a> {
    pub fn new(store: &'a dyn CacheStore, sampler: &'a dyn Sampler, paths: &'a BenchPaths) -> Self {
        Self {
            store,
            sampler,
            paths,
        }
    }

    /// Path of the recovery binary.
    pub fn binary(&self) -> PathBuf {
        self.paths.binary(RECOVERY_BINARY)
    }

    /// Values are kept in the binary's own unit. The iteration count is not
    /// part of the key, so a cached record from a run with a different
    /// `max_iterations` is returned as is.
    pub fn run(&self, max_iterations: u32, config: &SweepConfig) -> Result<Vec<f64>, BenchError> {
        let key = CacheKey::for_recovery(config);
        let binary = self.binary();
        let env = variant_env(self.paths, false);

        let values = memoized(self.store, &key, config.ignore_cache(), || {
            (1..=max_iterations)
                .map(|iterations| -> Result<f64, BenchError> {
                    let argv = [iterations, config.payload_min(), config.payload_max()];
                    let value =
                        self.sampler
                            .sample(&binary, &argv, &env, TimeUnit::Milliseconds)?;
                    tracing::debug!(iterations, value, "recovery point");
                    Ok(value)
                })
                .collect()
        })?;

        if values.len() != max_iterations as usize {
            tracing::warn!(
                key = %key,
                cached = values.len(),
                requested = max_iterations,
                "recovery record length differs from requested iterations"
            );
        }
        Ok(values)
    }
}

fn variant_env(paths: &BenchPaths, alternate_allocator: bool) -> VariantEnv {
    let env = VariantEnv::new(&paths.library_dir);
    if alternate_allocator {
        env.with_preload(&paths.jemalloc_path)
    } else {
        env
    }
}

/// Read-through/write-through around a whole sweep. Nothing is stored
/// unless `measure` completes.
fn memoized(
    store: &dyn CacheStore,
    key: &CacheKey,
    ignore_cache: bool,
    measure: impl FnOnce() -> Result<Vec<f64>, BenchError>,
) -> Result<Vec<f64>, BenchError> {
    if !ignore_cache {
        if let Some(values) = store.get(key)? {
            tracing::info!(key = %key, points = values.len(), "using cached result");
            return Ok(values);
        }
    }

    tracing::debug!(key = %key, ignore_cache, "measuring");
    let values = measure()?;
    store.put(key, &values)?;
    Ok(values)
}
