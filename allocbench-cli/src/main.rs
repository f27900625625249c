use std::process::ExitCode;

use clap::Parser;

use allocbench_cli::Args;
use allocbench_core::errors::BenchErrorCode;
use allocbench_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            tracing::error!("cannot determine working directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    match allocbench_cli::run(&args, &root) {
        Ok(report) => {
            for (benchmark, path) in &report.charts {
                tracing::info!(benchmark = benchmark.name(), path = %path.display(), "done");
            }
            for (benchmark, error) in &report.failures {
                tracing::error!(benchmark = benchmark.name(), "{}", error.tagged_string());
            }
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            tracing::error!("{}", e.tagged_string());
            ExitCode::FAILURE
        }
    }
}
