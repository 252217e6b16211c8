// Boundary data access: fetcher and store traits plus the fetch-or-cached use case
use crate::domain::geo::BoundaryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Fetches a boundary GeoJSON document from its source.
#[async_trait]
pub trait BoundaryFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, BoundaryError>;
}

/// The outcome of the last fetch: a document, or the error it failed with.
#[derive(Debug, Clone)]
pub struct CachedBoundary {
    pub fetched_at: DateTime<Utc>,
    pub data: Result<Arc<Value>, BoundaryError>,
}

/// Keeps fetched boundary documents keyed by URL.
pub trait BoundaryStore: Send + Sync {
    fn get(&self, url: &str) -> Option<CachedBoundary>;
    fn put(&self, url: &str, entry: CachedBoundary);
}

#[derive(Clone)]
pub struct BoundaryService {
    fetcher: Arc<dyn BoundaryFetcher>,
    store: Arc<dyn BoundaryStore>,
    url: String,
    ttl: Duration,
    failure_ttl: Duration,
}

impl BoundaryService {
    pub fn new(
        fetcher: Arc<dyn BoundaryFetcher>,
        store: Arc<dyn BoundaryStore>,
        url: String,
        ttl: Duration,
        failure_ttl: Duration,
    ) -> Self {
        Self {
            fetcher,
            store,
            url,
            ttl,
            failure_ttl,
        }
    }

    /// Returns the cached outcome while it is fresh, otherwise fetches once and
    /// caches the result. Documents live for `ttl`, failures for `failure_ttl`.
    pub async fn boundaries(&self) -> Result<Arc<Value>, BoundaryError> {
        let now = Utc::now();
        if let Some(entry) = self.store.get(&self.url) {
            let age = now.signed_duration_since(entry.fetched_at);
            let ttl = if entry.data.is_ok() { self.ttl } else { self.failure_ttl };
            if age.to_std().map(|a| a < ttl).unwrap_or(true) {
                tracing::debug!("Using cached boundary result for {} (age {}s)", self.url, age.num_seconds());
                return entry.data;
            }
            tracing::debug!("Cached boundary result for {} expired", self.url);
        }

        tracing::info!("Fetching boundary data from {}", self.url);
        let data = self.fetcher.fetch(&self.url).await.map(Arc::new);
        if let Err(e) = &data {
            tracing::warn!("Boundary fetch from {} failed, retrying after {:?}: {}", self.url, self.failure_ttl, e);
        }
        self.store.put(
            &self.url,
            CachedBoundary {
                fetched_at: now,
                data: data.clone(),
            },
        );
        data
    }
}
