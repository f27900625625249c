//! The process sampler: fixed sample count, arithmetic mean.

use std::path::Path;

use allocbench_core::constants::SAMPLE_COUNT;
use allocbench_core::errors::ExecutionError;

use super::{parse_output, CommandRunner, Invocation, Sampler, SystemRunner, TimeUnit, VariantEnv};

/// Runs a binary `sample_count` times and averages what it prints.
///
/// No outlier rejection and no retry; the first failing run aborts.
#[derive(Debug, Clone)]
pub struct ProcessSampler<R = SystemRunner> {
    runner: R,
    sample_count: usize,
}

impl Default for ProcessSampler<SystemRunner> {
    fn default() -> Self {
        Self::new(SystemRunner)
    }
}

impl<R: CommandRunner> ProcessSampler<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            sample_count: SAMPLE_COUNT,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: CommandRunner> Sampler for ProcessSampler<R> {
    fn sample(
        &self,
        binary: &Path,
        argv: &[u32],
        env: &VariantEnv,
        unit: TimeUnit,
    ) -> Result<f64, ExecutionError> {
        let invocation = Invocation {
            binary: binary.to_path_buf(),
            args: argv.iter().map(u32::to_string).collect(),
            env: env.vars(),
        };

        let mut total = 0.0;
        for run in 1..=self.sample_count {
            let stdout = self.runner.run(&invocation)?;
            let millis = parse_output(&stdout).ok_or_else(|| ExecutionError::MalformedOutput {
                path: invocation.binary.clone(),
                args: invocation.args.clone(),
                output: stdout.clone(),
            })?;
            tracing::trace!(binary = %binary.display(), run, millis, "sample");
            total += millis;
        }

        let mean = total / self.sample_count as f64;
        Ok(unit.convert_millis(mean))
    }
}
