//! Shared fakes for engine tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use allocbench_core::errors::ExecutionError;
use allocbench_core::BenchPaths;
use allocbench_engine::sampler::{CommandRunner, Invocation};
use allocbench_engine::{Sampler, TimeUnit, VariantEnv};

/// One recorded `Sampler::sample` call.
#[derive(Debug, Clone)]
pub struct SampleCall {
    pub binary: PathBuf,
    pub argv: Vec<u32>,
    pub env: VariantEnv,
    pub unit: TimeUnit,
}

impl SampleCall {
    pub fn binary_name(&self) -> String {
        self.binary
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }
}

/// Returns `argv[0]` (plus 0.5 when an allocator is preloaded) and records
/// every call. Fails for binaries named in `failing`.
#[derive(Debug, Default)]
pub struct FakeSampler {
    calls: RefCell<Vec<SampleCall>>,
    failing: Vec<String>,
    offset: f64,
}

impl FakeSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(binary: &str) -> Self {
        Self {
            failing: vec![binary.to_string()],
            ..Self::default()
        }
    }

    /// Shift every returned value, to tell a re-measurement from a cache hit.
    pub fn with_offset(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SampleCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn binaries(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for call in self.calls.borrow().iter() {
            let name = call.binary_name();
            if names.last() != Some(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl Sampler for FakeSampler {
    fn sample(
        &self,
        binary: &Path,
        argv: &[u32],
        env: &VariantEnv,
        unit: TimeUnit,
    ) -> Result<f64, ExecutionError> {
        let call = SampleCall {
            binary: binary.to_path_buf(),
            argv: argv.to_vec(),
            env: env.clone(),
            unit,
        };
        let name = call.binary_name();
        self.calls.borrow_mut().push(call);

        if self.failing.contains(&name) {
            return Err(ExecutionError::NonZeroExit {
                path: binary.to_path_buf(),
                args: argv.iter().map(u32::to_string).collect(),
                status: "exit status: 1".to_string(),
                stderr: "segfault".to_string(),
            });
        }

        let preload = if env.preload.is_some() { 0.5 } else { 0.0 };
        Ok(argv[0] as f64 + preload + self.offset)
    }
}

/// Replays fixed stdout strings, one per run, and records invocations.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outputs: RefCell<Vec<String>>,
    invocations: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new(outputs: &[&str]) -> Self {
        Self {
            outputs: RefCell::new(outputs.iter().rev().map(|s| s.to_string()).collect()),
            invocations: RefCell::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<String, ExecutionError> {
        self.invocations.borrow_mut().push(invocation.clone());
        self.outputs
            .borrow_mut()
            .pop()
            .ok_or_else(|| ExecutionError::MalformedOutput {
                path: invocation.binary.clone(),
                args: invocation.args.clone(),
                output: String::new(),
            })
    }
}

/// Default directory layout under `root`.
pub fn paths(root: &Path) -> BenchPaths {
    BenchPaths::under(root)
}
