//! Post service - read-through caching over post storage

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{CacheSettings, InvalidationPolicy};
use crate::domain::cache::{Cache, CacheExt, CacheKeyRegistry, PostCacheKey};
use crate::domain::post::{
    ListQuery, NewPost, PaginationEnvelope, Post, PostId, PostPatch, PostRepository,
};
use crate::domain::DomainError;
use crate::infrastructure::observability::{
    record_cache_hit, record_cache_invalidations, record_cache_miss,
};

const HEALTH_PROBE_KEY: &str = "health_probe";

/// Caching behavior of the post service
#[derive(Debug, Clone)]
pub struct PostCacheConfig {
    /// Lifetime of every cached read
    pub ttl: Duration,
    /// What a write does when the cache store fails to delete an entry
    pub invalidation: InvalidationPolicy,
}

impl Default for PostCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            invalidation: InvalidationPolicy::Strict,
        }
    }
}

impl PostCacheConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_invalidation(mut self, policy: InvalidationPolicy) -> Self {
        self.invalidation = policy;
        self
    }
}

impl From<&CacheSettings> for PostCacheConfig {
    fn from(settings: &CacheSettings) -> Self {
        Self {
            ttl: settings.ttl(),
            invalidation: settings.invalidation,
        }
    }
}

/// Post CRUD with cached reads and write-time invalidation
///
/// List reads record their key in a [`CacheKeyRegistry`]; every successful
/// write drains the registry and deletes each drained key, so no list page
/// cached before the write survives it.
#[derive(Debug)]
pub struct PostService {
    repository: Arc<dyn PostRepository>,
    cache: Arc<dyn Cache>,
    registry: CacheKeyRegistry,
    config: PostCacheConfig,
}

impl PostService {
    /// Creates a new PostService
    pub fn new(
        repository: Arc<dyn PostRepository>,
        cache: Arc<dyn Cache>,
        config: PostCacheConfig,
    ) -> Self {
        Self {
            repository,
            cache,
            registry: CacheKeyRegistry::new(),
            config,
        }
    }

    /// Registry of list keys awaiting invalidation
    pub fn registry(&self) -> &CacheKeyRegistry {
        &self.registry
    }

    pub fn config(&self) -> &PostCacheConfig {
        &self.config
    }

    /// List one page of posts
    pub async fn list(&self, query: &ListQuery) -> Result<PaginationEnvelope<Post>, DomainError> {
        let key = PostCacheKey::list(query);

        // Registered before the lookup so a hit on a key from an earlier
        // generation is still tracked for the next write.
        self.registry.register(key.clone());

        if let Some(envelope) = self.lookup(&key).await {
            return Ok(envelope);
        }

        let (items, total) = self.repository.query(&query.to_post_query()).await?;
        let envelope = PaginationEnvelope::new(query, items, total);

        self.populate(&key, &envelope).await;
        Ok(envelope)
    }

    /// Get a post by ID
    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        let key = PostCacheKey::item(id);

        if let Some(post) = self.lookup(&key).await {
            return Ok(post);
        }

        let post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;

        self.populate(&key, &post).await;
        Ok(post)
    }

    /// Create a new post
    pub async fn create(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let post = self.repository.insert(new_post).await?;
        info!(post_id = post.id, "Post created");

        self.invalidate(None).await?;
        Ok(post)
    }

    /// Update the fields present in `patch`
    pub async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;
        post.apply(patch);

        let post = self.repository.save(post).await?;
        info!(post_id = id, "Post updated");

        self.invalidate(Some(id)).await?;
        Ok(post)
    }

    /// Delete a post, returning its last state
    pub async fn delete(&self, id: PostId) -> Result<Post, DomainError> {
        let post = self.get(id).await?;

        let removed = self.repository.remove(post).await?;
        info!(post_id = id, "Post deleted");

        self.invalidate(Some(id)).await?;
        Ok(removed)
    }

    /// Verifies the storage backend is reachable
    pub async fn ping_storage(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }

    /// Verifies the cache store is reachable
    pub async fn ping_cache(&self) -> Result<(), DomainError> {
        self.cache.exists(HEALTH_PROBE_KEY).await.map(|_| ())
    }

    async fn lookup<V>(&self, key: &PostCacheKey<'_>) -> Option<V>
    where
        V: DeserializeOwned + Send,
    {
        let kind = key.kind();
        let key = key.to_string();

        match self.cache.get(&key).await {
            Ok(Some(value)) => {
                debug!(key = %key, "Cache hit");
                record_cache_hit(kind);
                Some(value)
            }
            Ok(None) => {
                debug!(key = %key, "Cache miss");
                record_cache_miss(kind);
                None
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Cache read failed, falling back to storage");
                record_cache_miss(kind);
                None
            }
        }
    }

    async fn populate<V>(&self, key: &PostCacheKey<'_>, value: &V)
    where
        V: Serialize + Send + Sync,
    {
        let key = key.to_string();

        if let Err(e) = self.cache.set(&key, value, self.config.ttl).await {
            warn!(key = %key, error = %e, "Failed to populate cache");
        }
    }

    /// Deletes the item key (if any) and every registered list key.
    ///
    /// Under the strict policy list keys that could not be deleted are put
    /// back into the registry and the first failure is returned.
    async fn invalidate(&self, item: Option<PostId>) -> Result<(), DomainError> {
        let mut first_error = None;
        let mut deleted = 0u64;

        if let Some(id) = item {
            let key = PostCacheKey::item(id).to_string();

            match self.cache.delete(&key).await {
                Ok(_) => deleted += 1,
                Err(e) => {
                    warn!(key = %key, error = %e, "Failed to invalidate cached post");
                    first_error = Some(e);
                }
            }
        }

        let keys = self.registry.drain();
        let drained = keys.len();
        let mut failed = Vec::new();

        for key in keys {
            match self.cache.delete(&key).await {
                Ok(_) => deleted += 1,
                Err(e) => {
                    warn!(key = %key, error = %e, "Failed to invalidate cached list");
                    first_error.get_or_insert(e);
                    failed.push(key);
                }
            }
        }

        record_cache_invalidations(deleted);
        debug!(drained, deleted, failed = failed.len(), "Cache invalidated");

        let Some(error) = first_error else {
            return Ok(());
        };

        match self.config.invalidation {
            InvalidationPolicy::Strict => {
                self.registry.restore(failed);
                Err(error)
            }
            InvalidationPolicy::BestEffort => {
                warn!(
                    error = %error,
                    "Cache invalidation incomplete, stale entries expire with their TTL"
                );
                Ok(())
            }
        }
    }
}
