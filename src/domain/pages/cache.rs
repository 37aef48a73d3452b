use super::model::LocaleFetch;
use crate::infrastructure::cache::CacheStore;
use std::sync::Arc;
use std::time::Duration;

/// Default lifetime of the fresh tier
pub const PAGE_CACHE_DURATION: Duration = Duration::from_secs(5 * 60);

/// Two caches sharing a `(slug, locale)` key:
///
/// - the fresh tier memoizes per-locale fetch outcomes for a short TTL;
/// - the fallback tier keeps the last successfully fetched body forever and
///   is only read when a fetch fails.
pub struct TieredPageCache {
    fresh: Arc<dyn CacheStore<LocaleFetch>>,
    fallback: Arc<dyn CacheStore<String>>,
    fresh_ttl: Duration,
}

impl TieredPageCache {
    pub fn new(
        fresh: Arc<dyn CacheStore<LocaleFetch>>,
        fallback: Arc<dyn CacheStore<String>>,
        fresh_ttl: Duration,
    ) -> Self {
        Self {
            fresh,
            fallback,
            fresh_ttl,
        }
    }

    /// Composite key, the unlocalized variant being `default`.
    pub fn key(slug: &str, locale: Option<&str>) -> String {
        format!("{}-{}", slug, locale.unwrap_or("default"))
    }

    pub async fn fresh(&self, slug: &str, locale: Option<&str>) -> Option<LocaleFetch> {
        self.fresh.get(&fresh_key(slug, locale)).await
    }

    pub async fn remember(&self, slug: &str, locale: Option<&str>, fetch: LocaleFetch) {
        self.fresh
            .set(&fresh_key(slug, locale), fetch, Some(self.fresh_ttl))
            .await;
    }

    pub async fn fallback(&self, slug: &str, locale: Option<&str>) -> Option<String> {
        self.fallback.get(&fallback_key(slug, locale)).await
    }

    /// Overwrite the fallback body after a successful fetch. Never expires.
    pub async fn store_fallback(&self, slug: &str, locale: Option<&str>, content: String) {
        self.fallback
            .set(&fallback_key(slug, locale), content, None)
            .await;
    }
}

fn fresh_key(slug: &str, locale: Option<&str>) -> String {
    format!("pages-locale-{}", TieredPageCache::key(slug, locale))
}

fn fallback_key(slug: &str, locale: Option<&str>) -> String {
    format!("pages-content-{}", TieredPageCache::key(slug, locale))
}
