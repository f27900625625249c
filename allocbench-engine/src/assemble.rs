//! Comparison assembly: one series per enabled allocator variant.

use serde::{Deserialize, Serialize};

use allocbench_core::{BenchError, SweepConfig};

use crate::sweep::SweepRunner;
use crate::variant::{VariantDescriptor, VARIANTS};

/// A variant's sweep result with its legend label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Builds comparison series for a benchmark. Caching is left entirely to
/// the sweep runner.
pub struct ComparisonAssembler<'a> {
    runner: &'a SweepRunner<'a>,
    variants: &'a [VariantDescriptor],
}

impl<'a> ComparisonAssembler<'a> {
    pub fn new(runner: &'a SweepRunner<'a>) -> Self {
        Self {
            runner,
            variants: &VARIANTS,
        }
    }

    /// Use a custom variant table instead of [`VARIANTS`].
    pub fn with_variants(runner: &'a SweepRunner<'a>, variants: &'a [VariantDescriptor]) -> Self {
        Self { runner, variants }
    }

    /// Series for every variant enabled in `config`, in table order.
    ///
    /// The first failing variant aborts the assembly; the error names the
    /// benchmark and the variant.
    pub fn assemble(&self, name: &str, config: &SweepConfig) -> Result<Vec<Series>, BenchError> {
        let flags = config.variants();
        self.variants
            .iter()
            .filter(|variant| variant.is_enabled(&flags))
            .map(|variant| {
                tracing::info!("Running '{}' for {}", name, variant.label);
                let binary = variant.binary_name(name);
                self.runner
                    .run(&binary, config, variant.alternate_allocator)
                    .map(|values| Series::new(variant.label, values))
                    .map_err(|e| e.in_variant(name, variant.label))
            })
            .collect()
    }
}
