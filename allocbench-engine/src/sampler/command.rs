//! Spawning benchmark processes.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use allocbench_core::errors::ExecutionError;

/// A fully described benchmark execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub binary: PathBuf,
    pub args: Vec<String>,
    pub env: Vec<(&'static str, OsString)>,
}

/// Runs one invocation to completion and returns its stdout.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<String, ExecutionError>;
}

/// Spawns real processes with `std::process::Command`.
///
/// The child environment is cleared and then populated only with the
/// invocation's variables. There is no timeout: a hung binary blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<String, ExecutionError> {
        if !invocation.binary.is_file() {
            return Err(ExecutionError::BinaryNotFound {
                path: invocation.binary.clone(),
            });
        }

        let output = Command::new(&invocation.binary)
            .args(&invocation.args)
            .env_clear()
            .envs(invocation.env.iter().map(|(k, v)| (*k, v)))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ExecutionError::BinaryNotFound {
                    path: invocation.binary.clone(),
                },
                _ => ExecutionError::SpawnFailed {
                    path: invocation.binary.clone(),
                    source,
                },
            })?;

        if !output.status.success() {
            return Err(ExecutionError::NonZeroExit {
                path: invocation.binary.clone(),
                args: invocation.args.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| ExecutionError::MalformedOutput {
            path: invocation.binary.clone(),
            args: invocation.args.clone(),
            output: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}
