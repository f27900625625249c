//! # allocbench-cli
//!
//! Flag parsing for the `allocbench` binary. Flags only produce
//! [`CliOverrides`] and a benchmark selection; everything else happens in
//! `allocbench-engine`.

use std::path::Path;

use clap::{Parser, ValueEnum};

use allocbench_core::config::BenchConfig;
use allocbench_core::{BenchError, Benchmark, CliOverrides};
use allocbench_engine::{
    BenchSession, ChartRenderer, FileCacheStore, GnuplotRenderer, JsonRenderer, ProcessSampler,
    SessionReport,
};

/// nvm_malloc benchmarking tool
#[derive(Debug, Parser)]
#[command(name = "allocbench", version, about)]
pub struct Args {
    /// Run every benchmark
    #[arg(long)]
    pub run_all: bool,

    #[arg(long)]
    pub run_alloc_free: bool,

    #[arg(long)]
    pub run_alloc_free_alloc: bool,

    #[arg(long)]
    pub run_fastalloc: bool,

    #[arg(long)]
    pub run_linkedlist: bool,

    #[arg(long)]
    pub run_recovery: bool,

    /// First thread count of the sweep [default: 1]
    #[arg(long)]
    pub threads_min: Option<u32>,

    /// Last thread count of the sweep [default: 20]
    #[arg(long)]
    pub threads_max: Option<u32>,

    /// Smallest allocation size in bytes [default: 64]
    #[arg(long)]
    pub payload_min: Option<u32>,

    /// Largest allocation size in bytes; raised to --payload-min if smaller [default: 64]
    #[arg(long)]
    pub payload_max: Option<u32>,

    /// Include nvm_malloc built with CLFLUSHOPT
    #[arg(long)]
    pub has_clflushopt: bool,

    /// Include nvm_malloc built with CLWB
    #[arg(long)]
    pub has_clwb: bool,

    /// Include the default binaries with jemalloc preloaded
    #[arg(long)]
    pub with_jemalloc: bool,

    /// Re-measure and overwrite cached results
    #[arg(long)]
    pub ignore_cached: bool,

    /// Iterations swept by the recovery benchmark [default: 20]
    #[arg(long)]
    pub recovery_iterations: Option<u32>,

    /// Directory with the bench_* binaries [default: build]
    #[arg(long)]
    pub build_dir: Option<String>,

    /// Directory with cached results [default: cached]
    #[arg(long)]
    pub cache_dir: Option<String>,

    /// Directory receiving charts [default: plots]
    #[arg(long)]
    pub plots_dir: Option<String>,

    /// Directory exported as LD_LIBRARY_PATH [default: ..]
    #[arg(long)]
    pub library_dir: Option<String>,

    /// Shared object preloaded for the jemalloc series
    #[arg(long)]
    pub jemalloc_path: Option<String>,

    /// How charts are produced
    #[arg(long, value_enum, default_value_t = RendererKind::Gnuplot)]
    pub renderer: RendererKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererKind {
    /// PDF via gnuplot
    Gnuplot,
    /// JSON dataset
    Json,
}

impl Args {
    /// Benchmarks requested on the command line, in canonical order.
    pub fn selection(&self) -> Vec<Benchmark> {
        Benchmark::ALL
            .into_iter()
            .filter(|benchmark| {
                self.run_all
                    || match benchmark {
                        Benchmark::AllocFree => self.run_alloc_free,
                        Benchmark::AllocFreeAlloc => self.run_alloc_free_alloc,
                        Benchmark::Fastalloc => self.run_fastalloc,
                        Benchmark::Linkedlist => self.run_linkedlist,
                        Benchmark::Recovery => self.run_recovery,
                    }
            })
            .collect()
    }

    /// Config overrides carried by the flags. Switches that were not passed
    /// stay `None`.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            threads_min: self.threads_min,
            threads_max: self.threads_max,
            payload_min: self.payload_min,
            payload_max: self.payload_max,
            ignore_cache: self.ignore_cached.then_some(true),
            with_jemalloc: self.with_jemalloc.then_some(true),
            has_clflushopt: self.has_clflushopt.then_some(true),
            has_clwb: self.has_clwb.then_some(true),
            build_dir: self.build_dir.clone(),
            cache_dir: self.cache_dir.clone(),
            plots_dir: self.plots_dir.clone(),
            library_dir: self.library_dir.clone(),
            jemalloc_path: self.jemalloc_path.clone(),
            recovery_iterations: self.recovery_iterations,
        }
    }
}

/// Resolve configuration under `root` and run the selected benchmarks.
pub fn run(args: &Args, root: &Path) -> Result<SessionReport, BenchError> {
    let config = BenchConfig::load(root, Some(&args.overrides()))?.resolve(root)?;
    let selection = args.selection();
    if selection.is_empty() {
        tracing::warn!("no benchmarks selected; pass --run-all or a --run-<name> flag");
        return Ok(SessionReport::default());
    }

    let store = FileCacheStore::new(config.paths.cache_dir.clone());
    let sampler = ProcessSampler::default();
    let renderer: Box<dyn ChartRenderer> = match args.renderer {
        RendererKind::Gnuplot => Box::new(GnuplotRenderer::new(config.paths.plots_dir.clone())),
        RendererKind::Json => Box::new(JsonRenderer::new(config.paths.plots_dir.clone())),
    };

    let session = BenchSession::new(&config, &store, &sampler, renderer.as_ref());
    session.prepare()?;
    Ok(session.run(&selection))
}
