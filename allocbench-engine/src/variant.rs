//! Declarative table of allocator variants drawn on comparison charts.

use allocbench_core::VariantFlags;

/// One allocator variant.
///
/// Adding a variant means adding an entry to [`VARIANTS`]; the assembler
/// iterates the table and has no per-variant control flow.
#[derive(Debug, Clone, Copy)]
pub struct VariantDescriptor {
    /// Legend label.
    pub label: &'static str,
    /// Appended to `bench_<name>` to form the binary name.
    pub binary_suffix: &'static str,
    /// Preload the alternate allocator into the binary.
    pub alternate_allocator: bool,
    /// Whether the variant is part of this run.
    pub enabled: fn(&VariantFlags) -> bool,
}

impl VariantDescriptor {
    pub fn is_enabled(&self, flags: &VariantFlags) -> bool {
        (self.enabled)(flags)
    }

    /// Binary name for the logical benchmark `name`.
    pub fn binary_name(&self, name: &str) -> String {
        format!(
            "{}{}{}",
            allocbench_core::constants::BINARY_PREFIX,
            name,
            self.binary_suffix
        )
    }
}

fn always(_: &VariantFlags) -> bool {
    true
}

/// Chart order. Fixed regardless of which flags are set.
pub static VARIANTS: [VariantDescriptor; 5] = [
    VariantDescriptor {
        label: "default malloc",
        binary_suffix: "",
        alternate_allocator: false,
        enabled: always,
    },
    VariantDescriptor {
        label: "jemalloc",
        binary_suffix: "",
        alternate_allocator: true,
        enabled: |flags| flags.alternate_allocator,
    },
    VariantDescriptor {
        label: "nvm_malloc",
        binary_suffix: "_nvm",
        alternate_allocator: false,
        enabled: always,
    },
    VariantDescriptor {
        label: "nvm_malloc with CLFLUSHOPT",
        binary_suffix: "_nvm_clflushopt",
        alternate_allocator: false,
        enabled: |flags| flags.clflushopt,
    },
    VariantDescriptor {
        label: "nvm_malloc with CLWB",
        binary_suffix: "_nvm_clwb",
        alternate_allocator: false,
        enabled: |flags| flags.clwb,
    },
];
