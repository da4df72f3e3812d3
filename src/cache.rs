//! Load-step cache keyed by source identity
//!
//! Owned by the loading collaborator, not the aggregator: repeat dashboard
//! refreshes against an unchanged file reuse the already-parsed table, and a
//! rewritten file (new length or mtime) triggers a reload.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::loader::{load_csv, DataIntegrityError};
use crate::order::OrderTable;

/// Identity of a source file at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceFingerprint {
    len: u64,
    modified: SystemTime,
}

impl SourceFingerprint {
    fn of(path: &Path) -> std::io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            len: metadata.len(),
            modified: metadata.modified()?,
        })
    }
}

struct CacheEntry {
    fingerprint: SourceFingerprint,
    table: Arc<OrderTable>,
}

/// Cache of parsed order tables, one entry per source path.
#[derive(Default)]
pub struct TableCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, reloading if the file changed
    /// since it was last parsed.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<OrderTable>, DataIntegrityError> {
        let fingerprint = SourceFingerprint::of(path)?;

        if let Some(entry) = self.entries.get(path) {
            if entry.fingerprint == fingerprint {
                log::debug!("Cache hit for {}", path.display());
                return Ok(Arc::clone(&entry.table));
            }
            log::debug!("Source changed, reloading {}", path.display());
        }

        let table = Arc::new(load_csv(path)?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                fingerprint,
                table: Arc::clone(&table),
            },
        );
        Ok(table)
    }

    /// Drop every cached table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
