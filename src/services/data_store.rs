use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::SalesTable;
use crate::services::csv_parser::load_sales_csv;

/// In-memory sales table cache: source path -> loaded table.
///
/// Each distinct source is read from disk once and memoized for the
/// process lifetime. The tables themselves are immutable, so readers
/// share them through `Arc` without further locking; the lock only
/// coordinates the memoization map. Invalidation is explicit, there is
/// no TTL or file watching.
pub struct DataStore {
    cache: RwLock<HashMap<PathBuf, Arc<SalesTable>>>,
}

// Shared data store for passing between handlers
pub type SharedDataStore = Arc<DataStore>;

impl DataStore {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the table for `path`, loading and caching it on first access
    pub async fn get(&self, path: &Path) -> Result<Arc<SalesTable>> {
        {
            let cache = self.cache.read().await;
            if let Some(table) = cache.get(path) {
                debug!("Cache hit for {}", path.display());
                return Ok(table.clone());
            }
        }

        let table = Arc::new(load_sales_csv(path)?);
        info!(
            "Loaded {} rows, {} sellers from {}",
            table.rows.len(),
            table.sellers.len(),
            path.display()
        );

        let mut cache = self.cache.write().await;
        // A concurrent loader may have won the race; keep the first entry
        let entry = cache
            .entry(path.to_path_buf())
            .or_insert_with(|| table.clone());
        Ok(entry.clone())
    }

    /// Drop the cached table for `path`. Returns true if an entry existed.
    /// The next `get` re-reads the source.
    pub async fn invalidate(&self, path: &Path) -> bool {
        let mut cache = self.cache.write().await;
        let removed = cache.remove(path).is_some();
        if removed {
            info!("Invalidated cache entry for {}", path.display());
        }
        removed
    }

    /// Number of distinct sources currently cached
    pub async fn cached_sources(&self) -> usize {
        self.cache.read().await.len()
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
