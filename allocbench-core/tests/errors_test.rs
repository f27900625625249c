//! Tests for the allocbench error types.

use std::path::PathBuf;

use allocbench_core::errors::*;

fn execution_error() -> ExecutionError {
    ExecutionError::MalformedOutput {
        path: PathBuf::from("build/bench_fastalloc"),
        args: vec!["1".into(), "64".into(), "64".into()],
        output: "oops".into(),
    }
}

#[test]
fn test_error_codes() {
    assert_eq!(
        ConfigError::FileNotFound { path: "x".into() }.error_code(),
        "CONFIG_ERROR"
    );
    assert_eq!(execution_error().error_code(), "EXECUTION_ERROR");
    assert_eq!(
        ExecutionError::BinaryNotFound {
            path: PathBuf::from("build/bench_x")
        }
        .error_code(),
        "BINARY_NOT_FOUND"
    );
    assert_eq!(
        CacheError::Corrupt {
            key: "k".into(),
            path: PathBuf::from("cached/k"),
            message: "bad".into(),
        }
        .error_code(),
        "CACHE_CORRUPT"
    );
}

#[test]
fn test_from_conversions() {
    let err: BenchError = execution_error().into();
    assert!(matches!(err, BenchError::Execution(_)));

    let err: BenchError = CacheError::InvalidKey {
        key: "k".into(),
        message: "m".into(),
    }
    .into();
    assert!(matches!(err, BenchError::Cache(_)));

    let err: BenchError = ConfigError::InvalidValue {
        field: "f".into(),
        message: "m".into(),
    }
    .into();
    assert!(matches!(err, BenchError::Config(_)));
}

#[test]
fn test_variant_context_names_benchmark_and_binary() {
    let err = BenchError::from(execution_error()).in_variant("fastalloc", "jemalloc");

    let message = err.to_string();
    assert!(message.contains("fastalloc"));
    assert!(message.contains("jemalloc"));
    assert!(message.contains("bench_fastalloc"));

    // Code comes from the wrapped error.
    assert_eq!(err.error_code(), "EXECUTION_ERROR");
    assert!(matches!(err.root(), BenchError::Execution(_)));
}

#[test]
fn test_tagged_string_format() {
    let err = ConfigError::ValidationFailed {
        field: "sweep.threads_max".into(),
        message: "must be >= threads_min (4)".into(),
    };
    assert_eq!(
        err.tagged_string(),
        "[CONFIG_ERROR] Config validation failed for sweep.threads_max: must be >= threads_min (4)"
    );
}

#[test]
fn test_execution_error_reports_binary() {
    assert_eq!(
        execution_error().binary(),
        std::path::Path::new("build/bench_fastalloc")
    );
}
