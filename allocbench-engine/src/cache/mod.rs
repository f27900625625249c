//! Memoized sweep results.
//!
//! One record per [`CacheKey`]. Records are whole sweeps: written once
//! after the last point is measured, never appended to.

pub mod file_store;
pub mod key;
pub mod memory_store;
pub mod record;

use allocbench_core::errors::CacheError;

pub use file_store::FileCacheStore;
pub use key::CacheKey;
pub use memory_store::MemoryCacheStore;

/// Durable mapping from sweep identity to result sequence.
pub trait CacheStore {
    /// `Ok(None)` when no record exists; `CacheError::Corrupt` when one
    /// exists but cannot be decoded.
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<f64>>, CacheError>;

    /// Store `values` under `key`, replacing any previous record.
    fn put(&self, key: &CacheKey, values: &[f64]) -> Result<(), CacheError>;
}
