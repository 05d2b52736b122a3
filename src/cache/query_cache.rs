// query_cache.rs
use crate::cache::{CollectionSource, LoadError};
use crate::domain::BusinessCollection;
use crate::geos::Neighborhood;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Entries younger than this are served without reloading.
    pub stale_after: Duration,
    /// Entries not read for this long are dropped.
    pub evict_after: Duration,
    /// Extra attempts after a transient failure.
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(5 * 60),
            evict_after: Duration::from_secs(10 * 60),
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl CachePolicy {
    /// `min(base * 2^attempt, max)` plus up to 10% jitter.
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.min(16);
        let capped = self.base_delay.saturating_mul(factor).min(self.max_delay);

        let jitter_cap = (capped.as_millis() / 10) as u64;
        let jitter = rand::thread_rng().gen_range(0..=jitter_cap);
        capped + Duration::from_millis(jitter)
    }
}

struct Entry {
    collection: Arc<BusinessCollection>,
    fetched_at: Instant,
    last_access: Instant,
}

type Slot = Arc<Mutex<Option<Entry>>>;

/// Memoizes one collection per neighborhood.
///
/// Each neighborhood has its own slot lock, held for the duration of a load,
/// so simultaneous requests for the same neighborhood share one fetch while
/// different neighborhoods load side by side.
pub struct QueryCache<S> {
    source: S,
    policy: CachePolicy,
    slots: Mutex<HashMap<Neighborhood, Slot>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: CollectionSource> QueryCache<S> {
    pub fn new(source: S, policy: CachePolicy) -> Self {
        Self {
            source,
            policy,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, nhood: Neighborhood) -> Result<Arc<BusinessCollection>, LoadError> {
        self.evict_expired();

        let slot = self.slot(nhood);
        let mut entry = lock(&slot);

        let now = Instant::now();
        if let Some(cached) = entry.as_mut() {
            if now.duration_since(cached.fetched_at) < self.policy.stale_after {
                cached.last_access = now;
                tracing::debug!(%nhood, "cache hit");
                return Ok(Arc::clone(&cached.collection));
            }
            tracing::debug!(%nhood, "cache entry stale, reloading");
        }

        let collection = Arc::new(self.load_with_retry(nhood)?);
        let now = Instant::now();
        *entry = Some(Entry {
            collection: Arc::clone(&collection),
            fetched_at: now,
            last_access: now,
        });

        Ok(collection)
    }

    /// The slot for `nhood`, created empty on first use. The returned handle
    /// keeps the slot in the map until it is dropped.
    fn slot(&self, nhood: Neighborhood) -> Slot {
        Arc::clone(lock(&self.slots).entry(nhood).or_default())
    }

    /// Removes entries that have gone unread for `evict_after`, plus empty
    /// slots left by failed loads. A slot some request still holds a handle
    /// to (about to load, loading, or reading) is never removed.
    pub fn evict_expired(&self) {
        let now = Instant::now();
        let evict_after = self.policy.evict_after;

        lock(&self.slots).retain(|nhood, slot| {
            if Arc::strong_count(slot) > 1 {
                return true;
            }
            match lock(&**slot).as_ref() {
                Some(e) if now.duration_since(e.last_access) < evict_after => true,
                Some(_) => {
                    tracing::debug!(%nhood, "evicting idle entry");
                    false
                }
                None => false,
            }
        });
    }

    /// Number of neighborhoods with a slot (loaded or loading).
    pub fn len(&self) -> usize {
        lock(&self.slots).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_with_retry(&self, nhood: Neighborhood) -> Result<BusinessCollection, LoadError> {
        let mut attempt = 0;

        loop {
            let start = Instant::now();

            match self.source.load(nhood) {
                Ok(collection) => {
                    tracing::info!(
                        %nhood,
                        businesses = collection.len(),
                        elapsed = ?start.elapsed(),
                        "loaded neighborhood"
                    );
                    return Ok(collection);
                }
                Err(e) if e.is_transient() && attempt < self.policy.max_retries => {
                    let delay = self.policy.retry_delay(attempt);
                    attempt += 1;
                    tracing::warn!(
                        %nhood,
                        attempt,
                        ?delay,
                        error = %e,
                        "load failed, retrying"
                    );
                    std::thread::sleep(delay);
                }
                Err(e) => {
                    tracing::error!(%nhood, attempts = attempt + 1, error = %e, "load failed");
                    return Err(e);
                }
            }
        }
    }
}
