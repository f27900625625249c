//! Tests for the thread sweep and recovery sweep runners.

mod common;

use std::fs;
use std::path::PathBuf;

use allocbench_core::errors::{CacheError, ExecutionError};
use allocbench_core::{BenchError, SweepConfig};
use allocbench_engine::{
    CacheKey, CacheStore, FileCacheStore, MemoryCacheStore, RecoverySweepRunner, SweepRunner,
    TimeUnit,
};

use common::FakeSampler;

fn config(threads: std::ops::RangeInclusive<u32>) -> SweepConfig {
    SweepConfig::new(threads, 64..=128).unwrap()
}

#[test]
fn test_sequence_follows_thread_order() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let sampler = FakeSampler::new();

    let values = SweepRunner::new(&store, &sampler, &paths)
        .run("bench_fastalloc", &config(1..=3), false)
        .unwrap();

    assert_eq!(values, vec![1.0, 2.0, 3.0]);
    let calls = sampler.calls();
    assert_eq!(calls.len(), 3);
    for (call, threads) in calls.iter().zip(1u32..) {
        assert_eq!(call.argv, vec![threads, 64, 128]);
        assert_eq!(call.binary, paths.build_dir.join("bench_fastalloc"));
        assert_eq!(call.unit, TimeUnit::Seconds);
        assert_eq!(call.env.library_dir, paths.library_dir);
        assert_eq!(call.env.preload, None);
    }
}

#[test]
fn test_second_run_is_served_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = FileCacheStore::new(&paths.cache_dir);
    let sampler = FakeSampler::new();
    let runner = SweepRunner::new(&store, &sampler, &paths);

    let first = runner.run("bench_linkedlist", &config(2..=5), false).unwrap();
    let second = runner.run("bench_linkedlist", &config(2..=5), false).unwrap();

    assert_eq!(first, second);
    assert_eq!(sampler.call_count(), 4);
}

#[test]
fn test_cache_hit_skips_sampler_entirely() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let cfg = config(1..=3);
    store
        .put(&CacheKey::for_sweep("bench_fastalloc", &cfg, false), &[9.0, 8.0, 7.0])
        .unwrap();
    let sampler = FakeSampler::new();

    let values = SweepRunner::new(&store, &sampler, &paths)
        .run("bench_fastalloc", &cfg, false)
        .unwrap();

    assert_eq!(values, vec![9.0, 8.0, 7.0]);
    assert_eq!(sampler.call_count(), 0);
}

#[test]
fn test_ignore_cache_remeasures_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();

    let cached = FakeSampler::new();
    SweepRunner::new(&store, &cached, &paths)
        .run("bench_fastalloc", &config(1..=2), false)
        .unwrap();

    let fresh = FakeSampler::with_offset(10.0);
    let bypass = config(1..=2).with_ignore_cache(true);
    let values = SweepRunner::new(&store, &fresh, &paths)
        .run("bench_fastalloc", &bypass, false)
        .unwrap();

    assert_eq!(values, vec![11.0, 12.0]);
    assert_eq!(fresh.call_count(), 2);
    let key = CacheKey::for_sweep("bench_fastalloc", &config(1..=2), false);
    assert_eq!(store.get(&key).unwrap(), Some(vec![11.0, 12.0]));
}

#[test]
fn test_empty_range_is_cached() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let sampler = FakeSampler::new();
    let cfg = config(4..=2);

    let values = SweepRunner::new(&store, &sampler, &paths)
        .run("bench_fastalloc", &cfg, false)
        .unwrap();

    assert!(values.is_empty());
    assert_eq!(sampler.call_count(), 0);
    assert!(store.contains(&CacheKey::for_sweep("bench_fastalloc", &cfg, false)));
}

#[test]
fn test_alternate_allocator_preloads_and_uses_own_key() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let sampler = FakeSampler::new();
    let runner = SweepRunner::new(&store, &sampler, &paths);

    let plain = runner.run("bench_alloc_free", &config(1..=2), false).unwrap();
    let jemalloc = runner.run("bench_alloc_free", &config(1..=2), true).unwrap();

    assert_eq!(plain, vec![1.0, 2.0]);
    assert_eq!(jemalloc, vec![1.5, 2.5]);
    assert_eq!(store.len(), 2);
    let last = sampler.calls().pop().unwrap();
    assert_eq!(last.env.preload, Some(paths.jemalloc_path.clone()));
}

#[test]
fn test_corrupt_record_fails_instead_of_remeasuring() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = FileCacheStore::new(&paths.cache_dir);
    let cfg = config(1..=3);
    let key = CacheKey::for_sweep("bench_fastalloc", &cfg, false);
    fs::create_dir_all(&paths.cache_dir).unwrap();
    fs::write(store.record_path(&key).unwrap(), "[1.0, 2.0,").unwrap();
    let sampler = FakeSampler::new();

    let err = SweepRunner::new(&store, &sampler, &paths)
        .run("bench_fastalloc", &cfg, false)
        .unwrap_err();

    assert!(matches!(err, BenchError::Cache(CacheError::Corrupt { .. })));
    assert_eq!(sampler.call_count(), 0);
}

#[test]
fn test_corrupt_record_is_overwritten_when_cache_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = FileCacheStore::new(&paths.cache_dir);
    let cfg = config(1..=2).with_ignore_cache(true);
    let key = CacheKey::for_sweep("bench_fastalloc", &cfg, false);
    fs::create_dir_all(&paths.cache_dir).unwrap();
    fs::write(store.record_path(&key).unwrap(), "garbage").unwrap();

    let values = SweepRunner::new(&store, &FakeSampler::new(), &paths)
        .run("bench_fastalloc", &cfg, false)
        .unwrap();

    assert_eq!(store.get(&key).unwrap(), Some(values));
}

#[test]
fn test_failed_point_stores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let sampler = FakeSampler::failing_on("bench_fastalloc");

    let err = SweepRunner::new(&store, &sampler, &paths)
        .run("bench_fastalloc", &config(1..=3), false)
        .unwrap_err();

    match err {
        BenchError::Execution(e @ ExecutionError::NonZeroExit { .. }) => {
            assert_eq!(e.binary(), paths.build_dir.join("bench_fastalloc"));
        }
        other => panic!("Expected NonZeroExit, got: {:?}", other),
    }
    assert_eq!(sampler.call_count(), 1);
    assert!(store.is_empty());
}

#[test]
fn test_recovery_sweeps_iterations_in_binary_unit() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let sampler = FakeSampler::new();
    let cfg = config(1..=8);

    let values = RecoverySweepRunner::new(&store, &sampler, &paths)
        .run(4, &cfg)
        .unwrap();

    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    let calls = sampler.calls();
    assert_eq!(calls[3].argv, vec![4, 64, 128]);
    assert!(calls.iter().all(|c| c.unit == TimeUnit::Milliseconds));
    assert!(calls.iter().all(|c| c.env.preload.is_none()));
    assert_eq!(calls[0].binary, paths.build_dir.join("bench_recovery"));
    assert!(store.contains(&CacheKey::for_recovery(&cfg)));
}

#[test]
fn test_recovery_key_ignores_thread_range() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let sampler = FakeSampler::new();
    let runner = RecoverySweepRunner::new(&store, &sampler, &paths);

    runner.run(3, &config(1..=8)).unwrap();
    runner.run(3, &config(2..=16)).unwrap();

    assert_eq!(sampler.call_count(), 3);
}

#[test]
fn test_recovery_does_not_collide_with_thread_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let sampler = FakeSampler::new();
    let cfg = config(1..=2);

    SweepRunner::new(&store, &sampler, &paths)
        .run("bench_recovery", &cfg, false)
        .unwrap();
    RecoverySweepRunner::new(&store, &sampler, &paths)
        .run(2, &cfg)
        .unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(sampler.call_count(), 4);
}

#[test]
fn test_recovery_binary_path() {
    let dir = tempfile::tempdir().unwrap();
    let paths = common::paths(dir.path());
    let store = MemoryCacheStore::new();
    let sampler = FakeSampler::new();
    assert_eq!(
        RecoverySweepRunner::new(&store, &sampler, &paths).binary(),
        PathBuf::from(dir.path()).join("build").join("bench_recovery")
    );
}
