use crate::error::{DashboardError, Result};
use crate::models::Dataset;
use crate::readers::DayReader;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

static GLOBAL_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Memoizes loaded datasets keyed on the canonical source path.
///
/// The lock is held across a load so concurrent first access for a source
/// reads the file exactly once. Failed loads are not cached.
pub struct DatasetCache {
    reader: DayReader,
    entries: Mutex<HashMap<PathBuf, Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::with_reader(DayReader::new())
    }

    pub fn with_reader(reader: DayReader) -> Self {
        Self {
            reader,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide cache, initialized on first use and kept until exit.
    pub fn global() -> &'static DatasetCache {
        &GLOBAL_CACHE
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Dataset> {
        let key = source_key(path)?;
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(dataset) = entries.get(&key) {
            debug!("Dataset cache hit for {}", key.display());
            return Ok(dataset.clone());
        }

        debug!("Dataset cache miss for {}", key.display());
        let dataset = self.reader.read_path(&key)?;
        entries.insert(key, dataset.clone());
        Ok(dataset)
    }

    pub fn contains(&self, path: &Path) -> bool {
        let Ok(key) = source_key(path) else {
            return false;
        };
        self.entries
            .lock()
            .map(|entries| entries.contains_key(&key))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Source identity: the canonical path, so `./day.csv` and `day.csv` share an entry.
fn source_key(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DashboardError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => DashboardError::Io(e),
    })
}
