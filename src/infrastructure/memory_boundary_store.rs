// In-process boundary cache
use crate::application::boundary_source::{BoundaryStore, CachedBoundary};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryBoundaryStore {
    entries: RwLock<HashMap<String, CachedBoundary>>,
}

impl BoundaryStore for MemoryBoundaryStore {
    fn get(&self, url: &str) -> Option<CachedBoundary> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(url).cloned())
    }

    fn put(&self, url: &str, entry: CachedBoundary) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(url.to_string(), entry);
            }
            Err(_) => tracing::warn!("Boundary cache lock poisoned, not caching {}", url),
        }
    }
}
