use async_trait::async_trait;
use cached::{Cached, TimedSizedCache};
use common::RawEmissionsRecord;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, trace};

use super::HistoricalDataSource;
use crate::error::Result;

type HistoryStore = TimedSizedCache<String, Vec<RawEmissionsRecord>>;

/// A caching wrapper for HistoricalDataSource implementations.
///
/// Fetched records are cached per entity id, so repeated forecasts for the
/// same entity do not hit the wrapped source again. The baseline year is not
/// part of the key: the source returns the whole history of the entity.
///
/// Features:
/// - Caches per entity with TTL and a size bound (any `Cached` store can be plugged in)
/// - Explicit invalidation of one entity or of everything
/// - Thread-safe implementation using Arc<Mutex<>>
pub struct HistoryCacheSource<
    T: HistoricalDataSource,
    C: Cached<String, Vec<RawEmissionsRecord>> = HistoryStore,
> {
    /// The wrapped source
    inner: T,
    /// Cached records by entity id
    cache: Arc<Mutex<C>>,
}

impl<T: HistoricalDataSource, C: Cached<String, Vec<RawEmissionsRecord>>> HistoryCacheSource<T, C> {
    /// Creates a new caching source wrapping `inner` with a custom cache store.
    pub fn new_with_store(inner: T, cache_store: C) -> Self {
        Self {
            inner,
            cache: Arc::new(Mutex::new(cache_store)),
        }
    }

    /// Drops the cached records of one entity.
    ///
    /// Returns whether anything was cached for it.
    pub fn invalidate(&self, entity_id: &str) -> bool {
        match self.cache.lock() {
            Ok(mut cache) => {
                let removed = cache.cache_remove(entity_id).is_some();
                debug!("Invalidated history cache for entity {}: {}", entity_id, removed);
                removed
            }
            Err(_) => false,
        }
    }

    /// Removes all cached entries.
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.cache_clear();
        }
    }

    /// Returns the number of cached entities.
    pub fn cache_size(&self) -> usize {
        if let Ok(cache) = self.cache.lock() {
            cache.cache_size()
        } else {
            0
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: HistoricalDataSource> HistoryCacheSource<T, HistoryStore> {
    /// Creates a new caching source.
    ///
    /// # Arguments
    /// * `inner` - The source to wrap with caching
    /// * `cache_size` - Maximum number of entities in the cache
    /// * `ttl` - Time to live for cached entries
    pub fn new(inner: T, cache_size: usize, ttl: Duration) -> Self {
        Self::new_with_store(
            inner,
            TimedSizedCache::with_size_and_lifespan(cache_size, ttl.as_secs()),
        )
    }

    /// Creates a new caching source with default settings.
    ///
    /// Default settings:
    /// - Cache size: 100 entities
    /// - TTL: 5 minutes
    pub fn with_defaults(inner: T) -> Self {
        Self::new(inner, 100, Duration::from_secs(300))
    }
}

#[async_trait]
impl<T, C> HistoricalDataSource for HistoryCacheSource<T, C>
where
    T: HistoricalDataSource,
    C: Cached<String, Vec<RawEmissionsRecord>> + Send,
{
    async fn fetch_history(
        &self,
        entity_id: &str,
        baseline_year: i32,
    ) -> Result<Vec<RawEmissionsRecord>> {
        if let Ok(mut cache) = self.cache.lock() {
            if let Some(records) = cache.cache_get(entity_id) {
                trace!("History cache hit for entity {}", entity_id);
                return Ok(records.clone());
            }
        }

        trace!("History cache miss for entity {}", entity_id);
        let records = self.inner.fetch_history(entity_id, baseline_year).await?;

        if let Ok(mut cache) = self.cache.lock() {
            cache.cache_set(entity_id.to_string(), records.clone());
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::FixtureHistorySource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often the wrapped fixture is asked for data.
    struct CountingSource {
        fixture: FixtureHistorySource,
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                fixture: FixtureHistorySource::default(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HistoricalDataSource for CountingSource {
        async fn fetch_history(
            &self,
            entity_id: &str,
            baseline_year: i32,
        ) -> Result<Vec<RawEmissionsRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.fixture.fetch_history(entity_id, baseline_year).await
        }
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let source = HistoryCacheSource::with_defaults(CountingSource::new());

        let first = source.fetch_history("portfolio", 2019).await.unwrap();
        let second = source.fetch_history("portfolio", 2015).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.inner().calls(), 1);
        assert_eq!(source.cache_size(), 1);
    }

    #[tokio::test]
    async fn entities_are_cached_separately() {
        let source = HistoryCacheSource::with_defaults(CountingSource::new());

        source.fetch_history("a", 2019).await.unwrap();
        source.fetch_history("b", 2019).await.unwrap();
        source.fetch_history("a", 2019).await.unwrap();

        assert_eq!(source.inner().calls(), 2);
        assert_eq!(source.cache_size(), 2);
    }

    #[tokio::test]
    async fn invalidation_forces_refetch_of_one_entity() {
        let source = HistoryCacheSource::with_defaults(CountingSource::new());
        source.fetch_history("a", 2019).await.unwrap();
        source.fetch_history("b", 2019).await.unwrap();

        assert!(source.invalidate("a"));
        assert!(!source.invalidate("a"));
        assert_eq!(source.cache_size(), 1);

        source.fetch_history("a", 2019).await.unwrap();
        source.fetch_history("b", 2019).await.unwrap();
        assert_eq!(source.inner().calls(), 3);
    }

    #[tokio::test]
    async fn clear_cache_empties_store() {
        let source = HistoryCacheSource::with_defaults(CountingSource::new());
        source.fetch_history("a", 2019).await.unwrap();

        source.clear_cache();

        assert_eq!(source.cache_size(), 0);
    }

    #[tokio::test]
    async fn custom_store_without_ttl() {
        use cached::SizedCache;

        let source = HistoryCacheSource::new_with_store(CountingSource::new(), SizedCache::with_size(1));

        source.fetch_history("a", 2019).await.unwrap();
        source.fetch_history("b", 2019).await.unwrap();
        source.fetch_history("a", 2019).await.unwrap();

        // capacity of one evicts "a" when "b" arrives
        assert_eq!(source.inner().calls(), 3);
        assert_eq!(source.cache_size(), 1);
    }
}
