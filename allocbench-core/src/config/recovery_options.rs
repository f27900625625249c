//! `[recovery]` section.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecoveryOptions {
    /// Number of iterations swept by the recovery benchmark. Default: 20.
    pub max_iterations: Option<u32>,
}

impl RecoveryOptions {
    pub fn effective_max_iterations(&self) -> u32 {
        self.max_iterations
            .unwrap_or(constants::DEFAULT_RECOVERY_ITERATIONS)
    }
}
