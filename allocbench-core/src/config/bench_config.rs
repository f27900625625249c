//! Top-level allocbench configuration with layered resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PathOptions, RecoveryOptions, SweepConfig, SweepOptions, VariantFlags, VariantOptions};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ALLOCBENCH_*`)
/// 3. Project config (`allocbench.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchConfig {
    pub sweep: SweepOptions,
    pub variants: VariantOptions,
    pub paths: PathOptions,
    pub recovery: RecoveryOptions,
}

/// CLI override arguments that can be applied to a config.
///
/// Boolean flags are `Some(true)` only when the flag was passed, so an
/// absent flag never switches off something the config file enabled.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub threads_min: Option<u32>,
    pub threads_max: Option<u32>,
    pub payload_min: Option<u32>,
    pub payload_max: Option<u32>,
    pub ignore_cache: Option<bool>,
    pub with_jemalloc: Option<bool>,
    pub has_clflushopt: Option<bool>,
    pub has_clwb: Option<bool>,
    pub build_dir: Option<String>,
    pub cache_dir: Option<String>,
    pub plots_dir: Option<String>,
    pub library_dir: Option<String>,
    pub jemalloc_path: Option<String>,
    pub recovery_iterations: Option<u32>,
}

/// Absolute locations used by one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchPaths {
    pub build_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub plots_dir: PathBuf,
    pub library_dir: PathBuf,
    pub jemalloc_path: PathBuf,
}

impl BenchPaths {
    /// Lay out every directory under `root` using the compiled defaults.
    pub fn under(root: &Path) -> Self {
        PathOptions::default().resolve(root)
    }

    /// Full path of a benchmark binary.
    pub fn binary(&self, name: &str) -> PathBuf {
        self.build_dir.join(name)
    }
}

impl PathOptions {
    fn resolve(&self, root: &Path) -> BenchPaths {
        BenchPaths {
            build_dir: root.join(self.effective_build_dir()),
            cache_dir: root.join(self.effective_cache_dir()),
            plots_dir: root.join(self.effective_plots_dir()),
            library_dir: root.join(self.effective_library_dir()),
            jemalloc_path: root.join(self.effective_jemalloc_path()),
        }
    }
}

/// Everything a session needs, validated.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub sweep: SweepConfig,
    pub paths: BenchPaths,
    pub recovery_iterations: u32,
}

impl BenchConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// An inverted payload range is not an error; it is clamped when the
    /// sweep is built.
    pub fn validate(config: &BenchConfig) -> Result<(), ConfigError> {
        let sweep = &config.sweep;
        if sweep.effective_threads_min() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "sweep.threads_min".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if sweep.effective_threads_max() < sweep.effective_threads_min() {
            return Err(ConfigError::ValidationFailed {
                field: "sweep.threads_max".to_string(),
                message: format!(
                    "must be >= threads_min ({})",
                    sweep.effective_threads_min()
                ),
            });
        }
        if sweep.effective_payload_min() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "sweep.payload_min".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.recovery.effective_max_iterations() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "recovery.max_iterations".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Build the immutable sweep and path layout for a session.
    pub fn resolve(&self, root: &Path) -> Result<ResolvedConfig, ConfigError> {
        Self::validate(self)?;

        let sweep = &self.sweep;
        let variants = VariantFlags {
            alternate_allocator: self.variants.jemalloc.unwrap_or(false),
            clflushopt: self.variants.clflushopt.unwrap_or(false),
            clwb: self.variants.clwb.unwrap_or(false),
        };
        let sweep_config = SweepConfig::new(
            sweep.effective_threads_min()..=sweep.effective_threads_max(),
            sweep.effective_payload_min()..=sweep.effective_payload_max(),
        )?
        .with_ignore_cache(sweep.effective_ignore_cache())
        .with_variants(variants);

        Ok(ResolvedConfig {
            sweep: sweep_config,
            paths: self.paths.resolve(root),
            recovery_iterations: self.recovery.effective_max_iterations(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BenchConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BenchConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut BenchConfig, other: &BenchConfig) {
        overlay(&mut base.sweep.threads_min, &other.sweep.threads_min);
        overlay(&mut base.sweep.threads_max, &other.sweep.threads_max);
        overlay(&mut base.sweep.payload_min, &other.sweep.payload_min);
        overlay(&mut base.sweep.payload_max, &other.sweep.payload_max);
        overlay(&mut base.sweep.ignore_cache, &other.sweep.ignore_cache);

        overlay(&mut base.variants.jemalloc, &other.variants.jemalloc);
        overlay(&mut base.variants.clflushopt, &other.variants.clflushopt);
        overlay(&mut base.variants.clwb, &other.variants.clwb);

        overlay(&mut base.paths.build_dir, &other.paths.build_dir);
        overlay(&mut base.paths.cache_dir, &other.paths.cache_dir);
        overlay(&mut base.paths.plots_dir, &other.paths.plots_dir);
        overlay(&mut base.paths.library_dir, &other.paths.library_dir);
        overlay(&mut base.paths.jemalloc_path, &other.paths.jemalloc_path);

        overlay(&mut base.recovery.max_iterations, &other.recovery.max_iterations);
    }

    /// Apply environment variable overrides.
    /// Pattern: `ALLOCBENCH_THREADS_MAX`, `ALLOCBENCH_WITH_JEMALLOC`, etc.
    /// Values that fail to parse are skipped with a warning.
    fn apply_env_overrides(config: &mut BenchConfig) {
        env_override("ALLOCBENCH_THREADS_MIN", &mut config.sweep.threads_min);
        env_override("ALLOCBENCH_THREADS_MAX", &mut config.sweep.threads_max);
        env_override("ALLOCBENCH_PAYLOAD_MIN", &mut config.sweep.payload_min);
        env_override("ALLOCBENCH_PAYLOAD_MAX", &mut config.sweep.payload_max);
        env_override("ALLOCBENCH_IGNORE_CACHE", &mut config.sweep.ignore_cache);
        env_override("ALLOCBENCH_WITH_JEMALLOC", &mut config.variants.jemalloc);
        env_override("ALLOCBENCH_HAS_CLFLUSHOPT", &mut config.variants.clflushopt);
        env_override("ALLOCBENCH_HAS_CLWB", &mut config.variants.clwb);
        env_override("ALLOCBENCH_BUILD_DIR", &mut config.paths.build_dir);
        env_override("ALLOCBENCH_CACHE_DIR", &mut config.paths.cache_dir);
        env_override("ALLOCBENCH_PLOTS_DIR", &mut config.paths.plots_dir);
        env_override("ALLOCBENCH_LIBRARY_DIR", &mut config.paths.library_dir);
        env_override("ALLOCBENCH_JEMALLOC_PATH", &mut config.paths.jemalloc_path);
        env_override(
            "ALLOCBENCH_RECOVERY_ITERATIONS",
            &mut config.recovery.max_iterations,
        );
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BenchConfig, cli: &CliOverrides) {
        overlay(&mut config.sweep.threads_min, &cli.threads_min);
        overlay(&mut config.sweep.threads_max, &cli.threads_max);
        overlay(&mut config.sweep.payload_min, &cli.payload_min);
        overlay(&mut config.sweep.payload_max, &cli.payload_max);
        overlay(&mut config.sweep.ignore_cache, &cli.ignore_cache);
        overlay(&mut config.variants.jemalloc, &cli.with_jemalloc);
        overlay(&mut config.variants.clflushopt, &cli.has_clflushopt);
        overlay(&mut config.variants.clwb, &cli.has_clwb);
        overlay(&mut config.paths.build_dir, &cli.build_dir);
        overlay(&mut config.paths.cache_dir, &cli.cache_dir);
        overlay(&mut config.paths.plots_dir, &cli.plots_dir);
        overlay(&mut config.paths.library_dir, &cli.library_dir);
        overlay(&mut config.paths.jemalloc_path, &cli.jemalloc_path);
        overlay(&mut config.recovery.max_iterations, &cli.recovery_iterations);
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn overlay<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        base.clone_from(other);
    }
}

fn env_override<T: FromStr>(key: &str, slot: &mut Option<T>) {
    let Ok(val) = std::env::var(key) else {
        return;
    };
    match val.parse::<T>() {
        Ok(v) => *slot = Some(v),
        Err(_) => tracing::warn!(key, value = %val, "ignoring unparseable environment override"),
    }
}
