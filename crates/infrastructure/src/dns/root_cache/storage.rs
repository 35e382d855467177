use super::metrics::RootCacheMetrics;
use hickory_proto::op::Message;
use hickory_proto::rr::RecordType;
use hip5_application::ports::ResponseCache;
use hip5_domain::CacheConfig;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

type RootCacheKey = (Box<str>, RecordType);

struct CachedResponse {
    response: Message,
    expires_at: Instant,
}

/// Bounded LRU of root-zone responses keyed by lowercased name and type.
///
/// An entry lives for the smallest TTL among the response's records,
/// clamped to `[min_ttl, max_ttl]`. Responses without records, or whose
/// clamped TTL is zero, are not stored.
pub struct RootResponseCache {
    entries: Mutex<LruCache<RootCacheKey, CachedResponse>>,
    min_ttl: u32,
    max_ttl: u32,
    metrics: Arc<RootCacheMetrics>,
}

impl RootResponseCache {
    pub fn new(max_entries: NonZeroUsize, min_ttl: u32, max_ttl: u32) -> Self {
        info!(
            max_entries = max_entries.get(),
            min_ttl, max_ttl, "Initializing root response cache"
        );

        Self {
            entries: Mutex::new(LruCache::new(max_entries)),
            min_ttl,
            max_ttl,
            metrics: Arc::new(RootCacheMetrics::default()),
        }
    }

    /// `max_entries` of zero is treated as one; `Config::validate` rejects it
    /// before it gets here.
    pub fn from_config(config: &CacheConfig) -> Self {
        let max_entries = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self::new(max_entries, config.min_ttl, config.max_ttl)
    }

    pub fn metrics(&self) -> Arc<RootCacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Lifetime `response` would be cached for, if any.
    pub fn ttl_for(&self, response: &Message) -> Option<u32> {
        let min_record_ttl = response
            .answers()
            .iter()
            .chain(response.name_servers())
            .chain(response.additionals())
            .map(|record| record.ttl())
            .min()?;

        let ttl = min_record_ttl.clamp(self.min_ttl, self.max_ttl.max(self.min_ttl));
        (ttl > 0).then_some(ttl)
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<RootCacheKey, CachedResponse>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResponseCache for RootResponseCache {
    fn get(&self, name: &str, record_type: RecordType) -> Option<Message> {
        let key: RootCacheKey = (Box::from(name), record_type);
        let mut entries = self.lock();

        let expired = match entries.get(&key) {
            Some(entry) if Instant::now() < entry.expires_at => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(entry.response.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(&key);
            self.metrics.expirations.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(domain = %name, record_type = %record_type, "Root cache entry expired");
        }
        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    fn set(&self, name: &str, record_type: RecordType, response: &Message) {
        let Some(ttl) = self.ttl_for(response) else {
            self.metrics.skipped.fetch_add(1, AtomicOrdering::Relaxed);
            return;
        };

        let entry = CachedResponse {
            response: response.clone(),
            expires_at: Instant::now() + Duration::from_secs(u64::from(ttl)),
        };

        self.lock().put((Box::from(name), record_type), entry);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }
}
