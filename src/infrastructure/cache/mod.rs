//! Key/value cache store used for memoization and the fallback page tier.

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::time::{Duration, Instant};

/// Minimal cache interface the services depend on.
///
/// Only per-key atomicity is expected. There is no single-flight: two
/// concurrent misses on one key both compute and both write.
#[async_trait]
pub trait CacheStore<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<V>;

    /// Store `value` under `key`. `ttl = None` means no time-based expiry.
    async fn set(&self, key: &str, value: V, ttl: Option<Duration>);
}

#[derive(Clone)]
struct Stored<V> {
    value: V,
    ttl: Option<Duration>,
}

/// Expiry policy reading the TTL each entry was stored with.
struct PerEntryTtl;

impl<V> Expiry<String, Stored<V>> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Stored<V>,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Stored<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// In-process store backed by moka.
pub struct MokaCacheStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    inner: Cache<String, Stored<V>>,
}

impl<V> MokaCacheStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Store without a size bound; entries leave only by TTL or overwrite.
    pub fn unbounded() -> Self {
        Self {
            inner: Cache::builder().expire_after(PerEntryTtl).build(),
        }
    }

    /// Store holding at most `max_capacity` entries, evicting the least
    /// useful ones beyond that.
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .expire_after(PerEntryTtl)
                .build(),
        }
    }
}

#[async_trait]
impl<V> CacheStore<V> for MokaCacheStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key).await.map(|stored| stored.value)
    }

    async fn set(&self, key: &str, value: V, ttl: Option<Duration>) {
        self.inner.insert(key.to_string(), Stored { value, ttl }).await;
    }
}
