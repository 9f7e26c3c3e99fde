//! Posts Service
//!
//! A blog post API whose list and detail reads are served through a
//! read-through cache, with every write invalidating the cached entries it
//! could have made stale.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    cache::{CacheConfig, CacheFactory},
    services::{PostCacheConfig, PostService},
    storage::{StorageConfig, StorageFactory},
};
use tracing::info;

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = StorageConfig::try_from(&config.storage)?;
    info!(backend = ?storage_config.storage_type(), "Initializing post storage");
    let repository = StorageFactory::create(&storage_config).await?;

    let cache_config = CacheConfig::try_from(&config.cache)?;
    info!(
        backend = %cache_config.cache_type,
        ttl_secs = config.cache.ttl_secs,
        invalidation = ?config.cache.invalidation,
        "Initializing cache"
    );
    let cache = CacheFactory::new().create(&cache_config).await?;

    let post_service = PostService::new(repository, cache, PostCacheConfig::from(&config.cache));

    Ok(AppState::new(Arc::new(post_service)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::{ListQuery, NewPost};

    #[tokio::test]
    async fn test_create_app_state_with_defaults() {
        let state = create_app_state(&AppConfig::default()).await.unwrap();

        state
            .post_service
            .create(NewPost::new("Hello", "World", "Ada"))
            .await
            .unwrap();

        let page = state.post_service.list(&ListQuery::default()).await.unwrap();
        assert_eq!(page.meta.total_items, 1);
    }

    #[tokio::test]
    async fn test_create_app_state_rejects_unknown_backend() {
        let mut config = AppConfig::default();
        config.cache.backend = "memcached".to_string();

        assert!(create_app_state(&config).await.is_err());
    }
}
