//! Runs a selection of benchmarks end to end.

use std::fs;
use std::path::PathBuf;

use allocbench_core::config::ResolvedConfig;
use allocbench_core::errors::{BenchErrorCode, CacheError, ChartError};
use allocbench_core::{BenchError, Benchmark};

use crate::assemble::ComparisonAssembler;
use crate::cache::CacheStore;
use crate::chart::{Chart, ChartRenderer};
use crate::sampler::Sampler;
use crate::sweep::{RecoverySweepRunner, SweepRunner};

/// Outcome of a session. Each benchmark succeeds or fails on its own.
#[derive(Debug, Default)]
pub struct SessionReport {
    pub charts: Vec<(Benchmark, PathBuf)>,
    pub failures: Vec<(Benchmark, BenchError)>,
}

impl SessionReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Wires configuration, cache, sampler and renderer together.
pub struct BenchSession<'a> {
    config: &'a ResolvedConfig,
    store: &'a dyn CacheStore,
    sampler: &'a dyn Sampler,
    renderer: &'a dyn ChartRenderer,
}

impl<'a> BenchSession<'a> {
    pub fn new(
        config: &'a ResolvedConfig,
        store: &'a dyn CacheStore,
        sampler: &'a dyn Sampler,
        renderer: &'a dyn ChartRenderer,
    ) -> Self {
        Self {
            config,
            store,
            sampler,
            renderer,
        }
    }

    /// Create the cache and plot directories.
    pub fn prepare(&self) -> Result<(), BenchError> {
        let paths = &self.config.paths;
        fs::create_dir_all(&paths.cache_dir).map_err(|source| CacheError::Io {
            path: paths.cache_dir.clone(),
            source,
        })?;
        fs::create_dir_all(&paths.plots_dir).map_err(|source| ChartError::Io {
            path: paths.plots_dir.clone(),
            source,
        })?;
        Ok(())
    }

    /// Measure (or load) and chart one benchmark.
    pub fn run_benchmark(&self, benchmark: Benchmark) -> Result<PathBuf, BenchError> {
        let sweep = &self.config.sweep;
        let paths = &self.config.paths;

        let chart = if benchmark.is_recovery() {
            tracing::info!("Running 'recovery' for nvm_malloc");
            let iterations = self.config.recovery_iterations;
            let values = RecoverySweepRunner::new(self.store, self.sampler, paths)
                .run(iterations, sweep)
                .map_err(|e| e.in_variant(benchmark.name(), "nvm_malloc"))?;
            Chart::recovery(iterations, values)
        } else {
            let runner = SweepRunner::new(self.store, self.sampler, paths);
            let series = ComparisonAssembler::new(&runner).assemble(benchmark.name(), sweep)?;
            Chart::thread_sweep(benchmark, sweep, series)
        };

        Ok(self.renderer.render(&chart)?)
    }

    /// Run every selected benchmark in `Benchmark::ALL` order. A failure is
    /// logged and recorded; the remaining benchmarks still run.
    pub fn run(&self, selection: &[Benchmark]) -> SessionReport {
        let mut report = SessionReport::default();
        for benchmark in Benchmark::ALL.into_iter().filter(|b| selection.contains(b)) {
            match self.run_benchmark(benchmark) {
                Ok(path) => report.charts.push((benchmark, path)),
                Err(e) => {
                    tracing::error!(
                        benchmark = benchmark.name(),
                        code = e.error_code(),
                        "{e}"
                    );
                    report.failures.push((benchmark, e));
                }
            }
        }
        report
    }
}
