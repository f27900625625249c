//! In-process cache, for dry runs and tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use allocbench_core::errors::CacheError;

use super::{CacheKey, CacheStore};

#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    records: RefCell<BTreeMap<CacheKey, Vec<f64>>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.records.borrow().contains_key(key)
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<f64>>, CacheError> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn put(&self, key: &CacheKey, values: &[f64]) -> Result<(), CacheError> {
        self.records
            .borrow_mut()
            .insert(key.clone(), values.to_vec());
        Ok(())
    }
}
