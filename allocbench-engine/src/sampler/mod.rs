//! Process sampling: execute a benchmark binary repeatedly, average its output.

pub mod command;
pub mod process;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use allocbench_core::constants;
use allocbench_core::errors::ExecutionError;

pub use command::{CommandRunner, Invocation, SystemRunner};
pub use process::ProcessSampler;

/// Unit the averaged sample is reported in.
///
/// Benchmark binaries print milliseconds; `Seconds` divides by 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Convert a value measured in milliseconds.
    pub fn convert_millis(&self, millis: f64) -> f64 {
        match self {
            Self::Milliseconds => millis,
            Self::Seconds => millis / 1000.0,
        }
    }
}

/// Environment handed to a benchmark process.
///
/// The library search path always points at the allocator under test;
/// `preload` substitutes a different allocator at dynamic-link time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantEnv {
    pub library_dir: PathBuf,
    pub preload: Option<PathBuf>,
}

impl VariantEnv {
    pub fn new(library_dir: impl Into<PathBuf>) -> Self {
        Self {
            library_dir: library_dir.into(),
            preload: None,
        }
    }

    pub fn with_preload(mut self, preload: impl Into<PathBuf>) -> Self {
        self.preload = Some(preload.into());
        self
    }

    /// Variables set on the child, in a stable order.
    pub fn vars(&self) -> Vec<(&'static str, OsString)> {
        let mut vars = vec![(
            constants::LIBRARY_PATH_VAR,
            self.library_dir.clone().into_os_string(),
        )];
        if let Some(preload) = &self.preload {
            vars.push((constants::PRELOAD_VAR, preload.clone().into_os_string()));
        }
        vars
    }
}

/// Produces one scalar per sweep point.
pub trait Sampler {
    /// Run `binary` with `argv` and reduce its samples to one value in `unit`.
    fn sample(
        &self,
        binary: &Path,
        argv: &[u32],
        env: &VariantEnv,
        unit: TimeUnit,
    ) -> Result<f64, ExecutionError>;
}

/// Parse a benchmark's stdout: exactly one finite number, surrounding
/// whitespace allowed.
pub fn parse_output(stdout: &str) -> Option<f64> {
    stdout
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
