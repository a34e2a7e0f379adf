//! Time-boxed lookup cache for provider queries
//!
//! Keyed by city name; holds fetch outcomes (successes and recorded failures
//! alike) until the provider's rate-limit window resets, capped by an
//! optional maximum lifetime. At most one fetch per key is in flight at any
//! time; fresh entries are served without touching the provider.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex as AsyncMutex;

/// Clock abstraction so tests can drive expiry deterministically
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Expiry policy for cache entries
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    /// Hard cap on entry lifetime; entries never outlive it even when the
    /// provider promises a later reset
    pub max_lifetime: Option<Duration>,
}

struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

type KeySlot<V> = Arc<AsyncMutex<Option<CacheEntry<V>>>>;

/// Lookup cache with provider-driven expiry
pub struct QueryCache<V> {
    name: &'static str,
    policy: CachePolicy,
    max_entries: usize,
    clock: Clock,
    slots: Mutex<HashMap<String, KeySlot<V>>>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(name: &'static str, policy: CachePolicy, max_entries: usize) -> Self {
        Self::with_clock(name, policy, max_entries, Arc::new(Utc::now))
    }

    pub fn with_clock(
        name: &'static str,
        policy: CachePolicy,
        max_entries: usize,
        clock: Clock,
    ) -> Self {
        Self {
            name,
            policy,
            max_entries,
            clock,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, or run `fetch` and cache its
    /// outcome.
    ///
    /// `fetch` resolves to the value plus the provider's rate-limit reset
    /// time, if it reported one. The entry expires at that reset, capped by
    /// the policy's maximum lifetime; without a reset the entry expires
    /// immediately. Callers racing on the same key queue behind a single
    /// fetch and share its result.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = (V, Option<DateTime<Utc>>)>,
    {
        let slot = self.slot(key);
        let mut guard = slot.lock().await;

        let now = (self.clock)();
        if let Some(entry) = guard.as_ref() {
            if entry.expires_at > now {
                tracing::debug!(cache = self.name, key, "cache hit");
                return entry.value.clone();
            }
        }
        tracing::debug!(cache = self.name, key, "cache miss");

        let (value, rate_limit_reset) = fetch().await;
        *guard = Some(CacheEntry {
            value: value.clone(),
            expires_at: self.expiry(now, rate_limit_reset),
        });
        drop(guard);

        self.enforce_capacity(key);
        value
    }

    /// Number of keys currently tracked
    pub fn len(&self) -> usize {
        self.slots.lock().expect("cache slot map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: &str) -> KeySlot<V> {
        let mut slots = self.slots.lock().expect("cache slot map poisoned");
        slots
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(None)))
            .clone()
    }

    fn expiry(&self, now: DateTime<Utc>, rate_limit_reset: Option<DateTime<Utc>>) -> DateTime<Utc> {
        match rate_limit_reset {
            Some(reset) => match self.policy.max_lifetime {
                Some(max_lifetime) => reset.min(now + max_lifetime),
                None => reset,
            },
            // No reset known: the entry is uncacheable
            None => now,
        }
    }

    /// Drop the earliest-expiring keys once the map outgrows its bound.
    ///
    /// The key just written is kept; slots currently locked by an in-flight
    /// fetch are skipped.
    fn enforce_capacity(&self, keep: &str) {
        let now = (self.clock)();
        let mut slots = self.slots.lock().expect("cache slot map poisoned");
        if slots.len() <= self.max_entries {
            return;
        }

        let mut expiries: Vec<(String, DateTime<Utc>)> = Vec::new();
        for (key, slot) in slots.iter() {
            if key == keep {
                continue;
            }
            if let Ok(entry) = slot.try_lock() {
                let expires_at = entry.as_ref().map_or(now, |entry| entry.expires_at);
                expiries.push((key.clone(), expires_at));
            }
        }
        expiries.sort_by_key(|(_, expires_at)| *expires_at);

        for (key, _) in expiries {
            if slots.len() <= self.max_entries {
                break;
            }
            slots.remove(&key);
            tracing::debug!(cache = self.name, key = %key, "cache evict");
        }
    }
}
