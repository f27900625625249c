//! File-per-key cache store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use allocbench_core::errors::CacheError;

use super::{record, CacheKey, CacheStore};

/// Stores each record as `<dir>/<key>`.
///
/// Writes go to a temporary file in the same directory which is then
/// renamed over the record, so an interrupted write never leaves a
/// half-written record behind.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    dir: PathBuf,
}

impl FileCacheStore {
    /// The directory is created lazily on the first `put`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the record for `key`.
    pub fn record_path(&self, key: &CacheKey) -> Result<PathBuf, CacheError> {
        let binary = key.binary();
        if binary.is_empty()
            || binary == "."
            || binary == ".."
            || binary.contains(['/', '\\'])
        {
            return Err(CacheError::InvalidKey {
                key: key.to_string(),
                message: "binary name must be a plain file name".to_string(),
            });
        }
        Ok(self.dir.join(key.file_name()))
    }
}

impl CacheStore for FileCacheStore {
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<f64>>, CacheError> {
        let path = self.record_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        let corrupt = |message: String| CacheError::Corrupt {
            key: key.to_string(),
            path: path.clone(),
            message,
        };
        let content = String::from_utf8(bytes).map_err(|e| corrupt(e.to_string()))?;
        record::decode(&content).map(Some).map_err(corrupt)
    }

    fn put(&self, key: &CacheKey, values: &[f64]) -> Result<(), CacheError> {
        let path = self.record_path(key)?;
        let body = record::encode(values).map_err(|message| CacheError::InvalidValue {
            key: key.to_string(),
            message,
        })?;

        fs::create_dir_all(&self.dir).map_err(|source| CacheError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let io_err = |source: std::io::Error| CacheError::Io {
            path: path.clone(),
            source,
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        tmp.write_all(body.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&path).map_err(|e| io_err(e.error))?;

        tracing::debug!(key = %key, path = %path.display(), points = values.len(), "cache record written");
        Ok(())
    }
}
