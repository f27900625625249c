//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Directive used when `ALLOCBENCH_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "allocbench_core=info,allocbench_engine=info,allocbench_cli=info";

/// Initialize the allocbench tracing/logging system.
///
/// Reads `ALLOCBENCH_LOG` for per-crate log levels, e.g.
/// `ALLOCBENCH_LOG=allocbench_engine=debug` to see every sample.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ALLOCBENCH_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed (tests, embedding).
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
